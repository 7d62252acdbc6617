/// Structured error types for folio-core.
///
/// Library consumers get `FolioError`; the binaries wrap it in `anyhow`
/// where they only need to report and exit.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for folio-core operations
#[derive(Error, Debug)]
pub enum FolioError {
    /// I/O operation failed
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },

    /// Config file could not be parsed
    #[error("TOML error in {path:?}: {source}")]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    /// Configuration is present but unusable
    #[error("Configuration error: {reason}")]
    Config { reason: String },

    /// No page is bound to the requested slug or path
    #[error("Unknown page '{key}'")]
    UnknownPage { key: String },

    /// Section id is not part of the page (strict navigation only)
    #[error("Unknown section '{id}' on page '{page}'")]
    UnknownSection { page: String, id: String },

    /// Outbound link target is malformed or uses an unsupported scheme
    #[error("Invalid link '{target}': {reason}")]
    InvalidLink { target: String, reason: String },
}

/// Result type alias for folio-core operations
pub type Result<T> = std::result::Result<T, FolioError>;

impl FolioError {
    /// Create a TOML error for a config path
    pub fn toml(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Toml {
            path: path.into(),
            source,
        }
    }

    /// Create a config error
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }

    /// Create an unknown page error
    pub fn unknown_page(key: impl Into<String>) -> Self {
        Self::UnknownPage { key: key.into() }
    }

    /// Create an unknown section error
    pub fn unknown_section(page: impl Into<String>, id: impl Into<String>) -> Self {
        Self::UnknownSection {
            page: page.into(),
            id: id.into(),
        }
    }

    /// Create an invalid link error
    pub fn invalid_link(target: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidLink {
            target: target.into(),
            reason: reason.into(),
        }
    }
}
