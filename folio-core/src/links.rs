//! Outbound link targets (mail, phone, external sites, static assets)

use std::fmt;

use serde::Serialize;

use crate::error::{FolioError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum Link {
    Mail(String),
    Tel(String),
    External(String),
    /// Path under the site's asset mount, e.g. `resume.pdf`
    Asset(String),
}

impl Link {
    pub fn mail(address: &str) -> Result<Self> {
        let address = address.trim();
        match address.split_once('@') {
            Some((user, domain)) if !user.is_empty() && domain.contains('.') => {
                Ok(Self::Mail(address.to_string()))
            }
            _ => Err(FolioError::invalid_link(address, "not an email address")),
        }
    }

    /// Phone link. Spaces, dashes and parentheses are stripped.
    pub fn tel(number: &str) -> Result<Self> {
        let digits: String = number
            .chars()
            .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '.'))
            .collect();
        let valid = !digits.is_empty()
            && digits
                .char_indices()
                .all(|(i, c)| c.is_ascii_digit() || (i == 0 && c == '+'));
        if valid {
            Ok(Self::Tel(digits))
        } else {
            Err(FolioError::invalid_link(number, "not a phone number"))
        }
    }

    /// External URL; only http and https are accepted
    pub fn external(url: &str) -> Result<Self> {
        let url = url.trim();
        let rest = url
            .strip_prefix("https://")
            .or_else(|| url.strip_prefix("http://"))
            .ok_or_else(|| FolioError::invalid_link(url, "unsupported scheme"))?;
        if rest.is_empty() || rest.starts_with('/') {
            return Err(FolioError::invalid_link(url, "missing host"));
        }
        Ok(Self::External(url.to_string()))
    }

    pub fn asset(path: &str) -> Result<Self> {
        let path = path.trim_start_matches('/');
        if path.is_empty() || path.split('/').any(|seg| seg == "..") {
            return Err(FolioError::invalid_link(path, "invalid asset path"));
        }
        Ok(Self::Asset(path.to_string()))
    }

    /// Value for an `href` attribute
    pub fn href(&self) -> String {
        match self {
            Link::Mail(addr) => format!("mailto:{addr}"),
            Link::Tel(num) => format!("tel:{num}"),
            Link::External(url) => url.clone(),
            Link::Asset(path) => format!("/assets/{path}"),
        }
    }

    /// Whether the target should open outside the current page
    pub fn opens_externally(&self) -> bool {
        matches!(self, Link::External(_))
    }

    /// Human-readable label
    pub fn label(&self) -> &str {
        match self {
            Link::Mail(s) | Link::Tel(s) | Link::External(s) | Link::Asset(s) => s,
        }
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}
