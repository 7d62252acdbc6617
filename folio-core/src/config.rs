use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::links::Link;
use crate::loading::DEFAULT_LOADING_DELAY;
use crate::navigator::DEFAULT_SCROLL_MARGIN;

/// Centralized configuration for folio (`~/.folio/config.toml`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    pub site: SiteConfig,
    pub server: ServerSection,
    pub ui: UiConfig,
}

/// Owner details shown on the contact and resume pages
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub owner: String,
    pub email: String,
    pub phone: Option<String>,
    /// Profile links (GitHub, LinkedIn, YouTube, ...)
    pub profiles: Vec<String>,
    /// Resume file name under the assets directory
    pub resume: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSection {
    pub bind: SocketAddr,
    pub cors_permissive: bool,
    pub assets_dir: PathBuf,
    /// Reject navigator actions on ids a page does not define
    pub strict_ids: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub loading_delay_ms: u64,
    /// Space kept above a jumped-to section (pixels in HTML, rows in the terminal)
    pub scroll_margin: u16,
    pub terminal_scroll_margin: u16,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            owner: "Your Name".to_string(),
            email: "hello@example.com".to_string(),
            phone: None,
            profiles: vec![
                "https://github.com/example".to_string(),
                "https://www.youtube.com/@example".to_string(),
            ],
            resume: "resume.pdf".to_string(),
        }
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3030)),
            cors_permissive: false,
            assets_dir: PathBuf::from("assets"),
            strict_ids: false,
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            loading_delay_ms: DEFAULT_LOADING_DELAY.as_millis() as u64,
            scroll_margin: DEFAULT_SCROLL_MARGIN,
            terminal_scroll_margin: 1,
        }
    }
}

impl UiConfig {
    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

impl FolioConfig {
    /// Load config from `FOLIO_CONFIG` or `~/.folio/config.toml`.
    ///
    /// A missing file yields the defaults; a malformed one is an error.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| crate::FolioError::toml(path, e))
            .context("Failed to parse config file (invalid TOML)")?;

        config.validate()?;
        Ok(config)
    }

    /// Get config file path: `$FOLIO_CONFIG` or `~/.folio/config.toml`
    pub fn config_path() -> PathBuf {
        if let Ok(path) = env::var("FOLIO_CONFIG") {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".folio/config.toml")
    }

    /// Check that owner links are well-formed
    pub fn validate(&self) -> Result<()> {
        self.contact_links()?;
        Link::asset(&self.site.resume).context("site.resume")?;
        Ok(())
    }

    /// Links for the contact page: email, optional phone, then profiles
    pub fn contact_links(&self) -> Result<Vec<Link>> {
        let mut links = vec![Link::mail(&self.site.email).context("site.email")?];
        if let Some(phone) = &self.site.phone {
            links.push(Link::tel(phone).context("site.phone")?);
        }
        for profile in &self.site.profiles {
            links.push(Link::external(profile).context("site.profiles")?);
        }
        Ok(links)
    }

    pub fn resume_link(&self) -> Result<Link> {
        Ok(Link::asset(&self.site.resume)?)
    }

    /// Default config rendered as TOML, for `folio config init`
    pub fn template() -> Result<String> {
        toml::to_string_pretty(&Self::default()).context("Failed to render config template")
    }
}
