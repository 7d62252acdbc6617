//! Page and section model
//!
//! Everything here is static data: pages are declared once in
//! [`crate::catalogue`] and never mutated. Per-view state lives in
//! [`crate::Navigator`].

use serde::Serialize;

use crate::navigator::Navigator;

/// A named, collapsible block of page content
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Section {
    pub id: &'static str,
    pub title: &'static str,
    /// Paragraphs, rendered verbatim
    pub body: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Landing,
    Info,
    Legal,
}

impl PageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageKind::Landing => "landing",
            PageKind::Info => "info",
            PageKind::Legal => "legal",
        }
    }
}

/// Record list rendered as cards below a page's sections
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Feature {
    Services,
    Skills,
    Projects,
    Course,
    Faq,
    Contact,
    Resume,
}

#[derive(Debug, Clone, Copy, Serialize)]
pub struct Page {
    pub slug: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub kind: PageKind,
    pub summary: &'static str,
    pub sections: &'static [Section],
    /// Section expanded at mount. Pages with one are rendered as accordions.
    pub default_open: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feature: Option<Feature>,
}

impl Page {
    /// Whether this page uses the disclosure navigator
    pub fn is_disclosure(&self) -> bool {
        self.default_open.is_some()
    }

    pub fn section(&self, id: &str) -> Option<&'static Section> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn section_ids(&self) -> impl Iterator<Item = &'static str> {
        self.sections.iter().map(|s| s.id)
    }

    /// Fresh mount-time navigator for this page
    pub fn navigator(&self, margin: u16) -> Navigator {
        Navigator::new(self.slug, self.section_ids(), self.default_open).with_margin(margin)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalogue::Site;

    #[test]
    fn legal_pages_open_introduction() {
        let site = Site::new();
        for slug in ["privacy", "terms", "access", "cookies"] {
            let page = site.by_slug(slug).unwrap();
            assert_eq!(page.kind, PageKind::Legal);
            assert_eq!(page.default_open, Some("introduction"));
            assert!(page.section("introduction").is_some());
        }
    }

    #[test]
    fn navigator_starts_from_default_open() {
        let site = Site::new();
        let page = site.by_slug("privacy").unwrap();
        let nav = page.navigator(64);

        assert_eq!(nav.expanded().collect::<Vec<_>>(), vec!["introduction"]);
        assert_eq!(nav.active(), None);
        assert_eq!(nav.margin(), 64);
        assert_eq!(nav.sections().len(), page.sections.len());
    }

    #[test]
    fn flat_pages_are_not_disclosure() {
        let site = Site::new();
        assert!(!site.by_slug("about").unwrap().is_disclosure());
        assert!(site.by_slug("terms").unwrap().is_disclosure());
    }
}
