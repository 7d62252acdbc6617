//! Navigator actions received over HTTP

use folio_core::{Navigator, ScrollHost};
use serde::{Deserialize, Serialize};

/// `{"toggle": "<id>"}` or `{"navigate": "<id>"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NavAction {
    Toggle(String),
    Navigate(String),
}

impl NavAction {
    pub fn id(&self) -> &str {
        match self {
            NavAction::Toggle(id) | NavAction::Navigate(id) => id,
        }
    }
}

/// Apply `action` to `nav`. In strict mode ids outside the page are rejected.
pub fn apply<H: ScrollHost>(
    nav: &mut Navigator,
    action: &NavAction,
    host: &mut H,
    strict: bool,
) -> folio_core::Result<()> {
    match (action, strict) {
        (NavAction::Toggle(id), true) => {
            nav.checked_toggle(id)?;
        }
        (NavAction::Toggle(id), false) => {
            nav.toggle(id);
        }
        (NavAction::Navigate(id), true) => nav.checked_navigate_to(id, host)?,
        (NavAction::Navigate(id), false) => nav.navigate_to(id, host),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{FolioError, PendingScroll, Site};

    #[test]
    fn action_json_shape() {
        let action: NavAction = serde_json::from_str(r#"{"navigate":"rights"}"#).unwrap();
        assert_eq!(action, NavAction::Navigate("rights".into()));
        assert_eq!(action.id(), "rights");
    }

    #[test]
    fn strict_mode_rejects_typos() {
        let page = Site::new().by_slug("privacy").unwrap();
        let mut nav = page.navigator(100);
        let mut host = PendingScroll::new();

        let err = apply(&mut nav, &NavAction::Toggle("rigths".into()), &mut host, true).unwrap_err();
        assert!(matches!(err, FolioError::UnknownSection { .. }));

        apply(&mut nav, &NavAction::Toggle("rigths".into()), &mut host, false).unwrap();
        assert!(nav.is_expanded("rigths"));
        assert!(host.peek().is_none());
    }
}
