//! folio CLI - portfolio site server and terminal browser
//!
//! - `serve`: HTTP site with accordion legal pages and a JSON API
//! - `browse`: interactive terminal browser over the same pages
//! - `pages` / `show`: catalogue listing and plain-text rendering
//! - `config`: manage `~/.folio/config.toml`

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};

mod commands;
mod config;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "folio",
    author,
    version,
    about = "Personal portfolio site: HTTP server and terminal browser",
    long_about = "Serve the portfolio over HTTP, browse it in the terminal, or render \
                  single pages as markdown. Legal pages open with their introduction \
                  expanded; every other section starts collapsed."
)]
struct Cli {
    /// Enable debug logging (ignored by `browse`)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve(commands::serve::ServeArgs),
    /// Browse the site in the terminal
    Browse(commands::browse::BrowseArgs),
    /// List every page in the catalogue
    Pages(commands::pages::PagesArgs),
    /// Render one page as markdown
    Show(commands::pages::ShowArgs),
    /// Manage folio configuration (init, show, get, validate, path)
    Config(config::ConfigArgs),
    /// Generate shell completion scripts
    Completions(CompletionsArgs),
}

#[derive(Parser, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: Shell,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)] // PowerShell is a proper noun, not a suffix
enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if !matches!(cli.command, Commands::Browse(_)) {
        tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug }).ok();
    }

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
        Commands::Browse(args) => commands::run_browse(args)?,
        Commands::Pages(args) => commands::run_pages(args)?,
        Commands::Show(args) => commands::run_show(args)?,
        Commands::Config(args) => config::run_config(args)?,
        Commands::Completions(args) => run_completions(args)?,
    }
    Ok(())
}

fn run_completions(args: CompletionsArgs) -> Result<()> {
    use clap::CommandFactory;
    use clap_complete::{generate, Shell as CompletionShell};
    use std::io;

    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();

    let shell = match args.shell {
        Shell::Bash => CompletionShell::Bash,
        Shell::Zsh => CompletionShell::Zsh,
        Shell::Fish => CompletionShell::Fish,
        Shell::PowerShell => CompletionShell::PowerShell,
        Shell::Elvish => CompletionShell::Elvish,
    };

    generate(shell, &mut cmd, bin_name, &mut io::stdout());

    Ok(())
}
