//! HTTP server command
//!
//! Flags override the `[server]` table of the config file.

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

use folio_core::FolioConfig;
use folio_server::{run_server, AppState, ServerConfig};

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to (default from config: 127.0.0.1:3030)
    #[arg(long, short = 'b')]
    pub bind: Option<SocketAddr>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Directory served under /assets
    #[arg(long, value_name = "DIR")]
    pub assets: Option<PathBuf>,

    /// Reject toggle/open requests for ids a page does not define
    #[arg(long)]
    pub strict_ids: bool,
}

impl ServeArgs {
    fn apply(&self, config: &mut FolioConfig) {
        if let Some(bind) = self.bind {
            config.server.bind = bind;
        }
        if self.cors_permissive {
            config.server.cors_permissive = true;
        }
        if let Some(dir) = &self.assets {
            config.server.assets_dir = dir.clone();
        }
        if self.strict_ids {
            config.server.strict_ids = true;
        }
    }
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    let mut config = FolioConfig::load()?;
    args.apply(&mut config);

    let server_config = ServerConfig::from(&config);
    tracing::info!("Starting folio server on {}", server_config.bind_addr);

    // Run server (blocks until shutdown)
    run_server(AppState::new(config), server_config)
        .await
        .context("Server error")?;

    Ok(())
}
