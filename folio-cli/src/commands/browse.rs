//! Interactive terminal browser

use anyhow::Result;
use clap::Parser;

use folio_core::{FolioConfig, Site};

#[derive(Parser, Debug)]
pub struct BrowseArgs {
    /// Page to open first (slug or path)
    #[arg(default_value = "home")]
    pub page: String,
}

pub fn run_browse(args: BrowseArgs) -> Result<()> {
    let config = FolioConfig::load()?;
    let page = Site::new().resolve(&args.page)?;
    folio_tui::run_browser(config, page)
}
