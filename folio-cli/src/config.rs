use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::FolioConfig;

#[derive(Parser, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommands,
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Write a default config file
    Init(InitArgs),
    /// Print the effective configuration as TOML
    Show,
    /// Get a config value by dot-notation key
    Get(GetArgs),
    /// Load the config file and check owner links
    Validate,
    /// Show config file path
    Path,
}

#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Force overwrite existing config
    #[arg(long, short)]
    pub force: bool,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    /// Dot-notation key (e.g., "server.bind")
    pub key: String,
}

pub fn run_config(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommands::Init(args) => run_init(args),
        ConfigCommands::Show => run_show(),
        ConfigCommands::Get(args) => run_get(args),
        ConfigCommands::Validate => run_validate(),
        ConfigCommands::Path => run_path(),
    }
}

fn run_init(args: InitArgs) -> Result<()> {
    let config_path = FolioConfig::config_path();

    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\n\nUse --force to overwrite",
            config_path.display()
        ));
    }

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    std::fs::write(&config_path, FolioConfig::template()?)
        .with_context(|| format!("Failed to write config file: {}", config_path.display()))?;

    println!("Created config at: {}", config_path.display());
    println!("\nNext steps:");
    println!("  1. Edit the config: $EDITOR {}", config_path.display());
    println!("  2. Fill in [site] owner, email and profiles");
    println!("  3. Run: folio config validate");

    Ok(())
}

fn run_show() -> Result<()> {
    let config = FolioConfig::load()?;
    let toml_str =
        toml::to_string_pretty(&config).context("Failed to serialize config to TOML")?;
    println!("{}", toml_str);
    Ok(())
}

fn run_get(args: GetArgs) -> Result<()> {
    let config = FolioConfig::load()?;
    println!("{}", get_config_value(&config, &args.key)?);
    Ok(())
}

fn run_validate() -> Result<()> {
    let path = FolioConfig::config_path();
    if !path.exists() {
        println!("No config at {} (defaults in use)", path.display());
    }

    let config = FolioConfig::load()?;
    let links = config.contact_links()?;

    println!("Configuration valid");
    println!("   owner: {}", config.site.owner);
    for link in &links {
        println!("   link:  {}", link.href());
    }
    println!("   resume: {}", config.resume_link()?.href());

    Ok(())
}

fn run_path() -> Result<()> {
    println!("{}", FolioConfig::config_path().display());
    Ok(())
}

/// Look up `key` in the serialized config, e.g. `ui.scroll_margin`
fn get_config_value(config: &FolioConfig, key: &str) -> Result<String> {
    let root = toml::Value::try_from(config).context("Failed to serialize config")?;

    let value = key
        .split('.')
        .try_fold(&root, |node, part| node.get(part))
        .ok_or_else(|| anyhow::anyhow!("Unknown config key: {}", key))?;

    Ok(match value {
        toml::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_nested_values() {
        let config = FolioConfig::default();
        assert_eq!(
            get_config_value(&config, "server.bind").unwrap(),
            "127.0.0.1:3030"
        );
        assert_eq!(get_config_value(&config, "ui.scroll_margin").unwrap(), "100");
        assert_eq!(get_config_value(&config, "site.resume").unwrap(), "resume.pdf");
    }

    #[test]
    fn unknown_key_is_error() {
        let config = FolioConfig::default();
        let err = get_config_value(&config, "server.port").unwrap_err();
        assert!(err.to_string().contains("server.port"));
    }
}
