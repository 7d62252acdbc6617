//! Catalogue listing and plain-text page rendering

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use folio_core::{FolioConfig, NoScroll, Outline, Page, Site};

#[derive(Parser, Debug)]
pub struct PagesArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Page slug or path (e.g. "privacy" or "/privacy")
    pub page: String,

    /// Jump to a section before rendering (repeatable)
    #[arg(long = "open", short = 'o', value_name = "ID")]
    pub open: Vec<String>,

    /// Toggle a section before rendering (repeatable, applied before --open)
    #[arg(long = "toggle", short = 't', value_name = "ID")]
    pub toggle: Vec<String>,

    /// Reject ids the page does not define
    #[arg(long)]
    pub strict: bool,
}

#[derive(Serialize)]
struct PageRow {
    slug: &'static str,
    path: &'static str,
    kind: &'static str,
    title: &'static str,
    sections: usize,
}

impl From<&Page> for PageRow {
    fn from(p: &Page) -> Self {
        Self {
            slug: p.slug,
            path: p.path,
            kind: p.kind.as_str(),
            title: p.title,
            sections: p.sections.len(),
        }
    }
}

pub fn run_pages(args: PagesArgs) -> Result<()> {
    let rows: Vec<PageRow> = Site::new().pages().map(PageRow::from).collect();

    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&rows).context("Failed to serialize pages")?
        );
        return Ok(());
    }

    println!("{:<10} {:<10} {:<8} TITLE", "SLUG", "PATH", "KIND");
    for row in &rows {
        let title = if row.sections > 0 {
            format!("{} ({} sections)", row.title, row.sections)
        } else {
            row.title.to_string()
        };
        println!("{:<10} {:<10} {:<8} {}", row.slug, row.path, row.kind, title);
    }
    Ok(())
}

pub fn run_show(args: ShowArgs) -> Result<()> {
    let config = FolioConfig::load()?;
    let page = Site::new().resolve(&args.page)?;
    print!("{}", render_page(&config, page, &args)?);
    Ok(())
}

fn render_page(config: &FolioConfig, page: &Page, args: &ShowArgs) -> Result<String> {
    if !page.is_disclosure() {
        if !args.open.is_empty() || !args.toggle.is_empty() {
            tracing::warn!(page = page.slug, "page has no collapsible sections, ignoring --open/--toggle");
        }
        return Ok(Outline::build(page, None, config).to_markdown());
    }

    let strict = args.strict || config.server.strict_ids;
    let mut nav = page.navigator(config.ui.terminal_scroll_margin);
    for id in &args.toggle {
        if strict {
            nav.checked_toggle(id)?;
        } else {
            nav.toggle(id);
        }
    }
    for id in &args.open {
        if strict {
            nav.checked_navigate_to(id, &mut NoScroll)?;
        } else {
            nav.navigate_to(id, &mut NoScroll);
        }
    }

    Ok(Outline::build(page, Some(&nav), config).to_markdown())
}
