//! Disclosure navigator for accordion-style pages.
//!
//! Tracks which sections of a page are expanded and which one was the last
//! explicit jump target ("active"). Toggling only flips expansion; jumping
//! expands, activates, and asks the host to bring the section into view.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::error::{FolioError, Result};

/// Margin kept above a scrolled-to section so a fixed header does not cover it.
pub const DEFAULT_SCROLL_MARGIN: u16 = 100;

/// Request sent to the host when a section should be brought into view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollRequest {
    /// Target section id
    pub id: String,
    /// Space to leave above the target (pixels for HTML, rows for the terminal)
    pub margin: u16,
}

/// Environment that can scroll a section into view.
///
/// Requests are fire-and-forget. A host that cannot find the target drops
/// the request without reporting back.
pub trait ScrollHost {
    fn request_scroll(&mut self, request: ScrollRequest);
}

/// Host that ignores every request.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoScroll;

impl ScrollHost for NoScroll {
    fn request_scroll(&mut self, request: ScrollRequest) {
        tracing::trace!(id = %request.id, "scroll request dropped (no host)");
    }
}

/// Host that keeps only the most recent request, resolved later by the
/// caller once the target has been laid out.
#[derive(Debug, Default, Clone)]
pub struct PendingScroll {
    pending: Option<ScrollRequest>,
}

impl PendingScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the pending request, leaving nothing behind
    pub fn take(&mut self) -> Option<ScrollRequest> {
        self.pending.take()
    }

    pub fn peek(&self) -> Option<&ScrollRequest> {
        self.pending.as_ref()
    }
}

impl ScrollHost for PendingScroll {
    fn request_scroll(&mut self, request: ScrollRequest) {
        self.pending = Some(request);
    }
}

/// Derived per-section view of the navigator state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionState {
    Collapsed,
    Expanded,
    ExpandedActive,
}

/// Serializable snapshot of a navigator
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigatorState {
    #[serde(default)]
    pub expanded: Vec<String>,
    #[serde(default)]
    pub active: Option<String>,
}

/// Expand/collapse and jump bookkeeping for one page view
#[derive(Debug, Clone)]
pub struct Navigator {
    page: String,
    sections: Vec<String>,
    expanded: BTreeSet<String>,
    active: Option<String>,
    margin: u16,
}

impl Navigator {
    /// Create the mount-time state: only `default_open` expanded, nothing active.
    pub fn new<I, S>(page: impl Into<String>, sections: I, default_open: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut expanded = BTreeSet::new();
        if let Some(id) = default_open {
            expanded.insert(id.to_string());
        }

        Self {
            page: page.into(),
            sections: sections.into_iter().map(Into::into).collect(),
            expanded,
            active: None,
            margin: DEFAULT_SCROLL_MARGIN,
        }
    }

    /// Override the scroll margin sent with every scroll request
    pub fn with_margin(mut self, margin: u16) -> Self {
        self.margin = margin;
        self
    }

    /// Rebuild a navigator from a snapshot. Ids are accepted as-is.
    pub fn restore<I, S>(page: impl Into<String>, sections: I, state: NavigatorState) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut nav = Self::new(page, sections, None);
        nav.expanded = state.expanded.into_iter().collect();
        nav.active = state.active;
        nav
    }

    /// `restore` that rejects a snapshot naming ids outside the page's
    /// section list, in either the expanded set or the active slot
    pub fn checked_restore<I, S>(
        page: impl Into<String>,
        sections: I,
        state: NavigatorState,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut nav = Self::new(page, sections, None);
        for id in state.expanded.iter().chain(state.active.as_ref()) {
            nav.ensure_known(id)?;
        }
        nav.expanded = state.expanded.into_iter().collect();
        nav.active = state.active;
        Ok(nav)
    }

    /// Flip membership of `id` in the expanded set.
    ///
    /// Unknown ids are inserted like any other. Returns whether the
    /// section is expanded afterwards.
    pub fn toggle(&mut self, id: &str) -> bool {
        let now_expanded = if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        };
        tracing::debug!(page = %self.page, id, expanded = now_expanded, "toggle section");
        now_expanded
    }

    /// Expand `id`, make it the active section, and ask `host` to scroll to it.
    ///
    /// Exactly one scroll request is issued per call.
    pub fn navigate_to<H: ScrollHost + ?Sized>(&mut self, id: &str, host: &mut H) {
        self.expanded.insert(id.to_string());
        self.active = Some(id.to_string());
        tracing::debug!(page = %self.page, id, "navigate to section");

        host.request_scroll(ScrollRequest {
            id: id.to_string(),
            margin: self.margin,
        });
    }

    /// `toggle` that rejects ids outside the page's section list
    pub fn checked_toggle(&mut self, id: &str) -> Result<bool> {
        self.ensure_known(id)?;
        Ok(self.toggle(id))
    }

    /// `navigate_to` that rejects ids outside the page's section list
    pub fn checked_navigate_to<H: ScrollHost + ?Sized>(
        &mut self,
        id: &str,
        host: &mut H,
    ) -> Result<()> {
        self.ensure_known(id)?;
        self.navigate_to(id, host);
        Ok(())
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Expanded ids in sorted order
    pub fn expanded(&self) -> impl Iterator<Item = &str> {
        self.expanded.iter().map(String::as_str)
    }

    pub fn state_of(&self, id: &str) -> SectionState {
        match (self.is_expanded(id), self.is_active(id)) {
            (true, true) => SectionState::ExpandedActive,
            (true, false) => SectionState::Expanded,
            (false, _) => SectionState::Collapsed,
        }
    }

    /// Section ids in display order
    pub fn sections(&self) -> &[String] {
        &self.sections
    }

    pub fn is_known(&self, id: &str) -> bool {
        self.sections.iter().any(|s| s == id)
    }

    pub fn page(&self) -> &str {
        &self.page
    }

    pub fn margin(&self) -> u16 {
        self.margin
    }

    pub fn snapshot(&self) -> NavigatorState {
        NavigatorState {
            expanded: self.expanded.iter().cloned().collect(),
            active: self.active.clone(),
        }
    }

    fn ensure_known(&self, id: &str) -> Result<()> {
        if self.is_known(id) {
            Ok(())
        } else {
            Err(FolioError::unknown_section(&self.page, id))
        }
    }
}
