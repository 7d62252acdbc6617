//! HTML page endpoints
//!
//! One GET route per site page. Accordion pages read their state from the
//! query string and apply at most one toggle and one jump per request,
//! toggle first. Errors render as HTML, never as the JSON API body.

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::get,
    Router,
};
use folio_core::{FolioError, Navigator, NavigatorState, Page, Site};
use serde::Deserialize;

use crate::actions::{self, NavAction};
use crate::http::server::AppState;
use crate::render::{self, AnchorHost};

/// Query parameters understood by accordion pages
#[derive(Debug, Default, Deserialize)]
pub struct NavQuery {
    /// Comma-separated expanded section ids
    pub x: Option<String>,
    /// Active section id
    pub a: Option<String>,
    pub toggle: Option<String>,
    pub open: Option<String>,
}

impl NavQuery {
    /// Navigator for `page`: restored from the query, or the mount state
    /// when the query carries none. In strict mode every restored id must
    /// belong to the page.
    pub fn navigator(
        &self,
        page: &Page,
        margin: u16,
        strict: bool,
    ) -> folio_core::Result<Navigator> {
        if self.x.is_none() && self.a.is_none() {
            return Ok(page.navigator(margin));
        }

        let state = NavigatorState {
            expanded: self.x.as_deref().map(render::parse_expanded).unwrap_or_default(),
            active: self.a.clone().filter(|a| !a.is_empty()),
        };
        let nav = if strict {
            Navigator::checked_restore(page.slug, page.section_ids(), state)?
        } else {
            Navigator::restore(page.slug, page.section_ids(), state)
        };
        Ok(nav.with_margin(margin))
    }

    pub fn actions(&self) -> Vec<NavAction> {
        let mut actions = Vec::new();
        if let Some(id) = &self.toggle {
            actions.push(NavAction::Toggle(id.clone()));
        }
        if let Some(id) = &self.open {
            actions.push(NavAction::Navigate(id.clone()));
        }
        actions
    }
}

/// Error page for the HTML routes
#[derive(Debug)]
pub enum PageError {
    NotFound { path: String },
    BadRequest { message: String },
    Internal { message: String },
}

impl From<FolioError> for PageError {
    fn from(e: FolioError) -> Self {
        match e {
            FolioError::UnknownPage { key } => Self::NotFound { path: key },
            other @ (FolioError::UnknownSection { .. } | FolioError::InvalidLink { .. }) => {
                Self::BadRequest {
                    message: other.to_string(),
                }
            }
            other => Self::Internal {
                message: other.to_string(),
            },
        }
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound { path } => not_found_page(&path),
            Self::BadRequest { message } => {
                tracing::debug!(%message, "rejected page request");
                error_page(StatusCode::BAD_REQUEST, "Bad request", &message)
            }
            Self::Internal { message } => {
                tracing::error!("Internal error: {}", message);
                error_page(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Server error",
                    "An internal error occurred",
                )
            }
        }
    }
}

fn error_page(status: StatusCode, title: &str, message: &str) -> Response {
    (
        status,
        Html(format!(
            "<!doctype html>\n<title>{title}</title>\n<h1>{title}</h1>\n<p>{}. <a href=\"/\">Home</a></p>\n",
            render::escape(message)
        )),
    )
        .into_response()
}

fn not_found_page(path: &str) -> Response {
    error_page(
        StatusCode::NOT_FOUND,
        "Not found",
        &format!("No page at {path}"),
    )
}

/// GET /<page path>
async fn page(
    State(state): State<Arc<AppState>>,
    uri: Uri,
    Query(query): Query<NavQuery>,
) -> Result<Html<String>, PageError> {
    let page = state.site.by_path(uri.path()).ok_or_else(|| PageError::NotFound {
        path: uri.path().to_string(),
    })?;

    if !page.is_disclosure() {
        return Ok(Html(render::render_page(
            &state.site,
            page,
            None,
            None,
            &state.config,
        )));
    }

    let mut nav = query.navigator(page, state.scroll_margin(), state.strict_ids())?;
    let mut host = AnchorHost::new(page);
    for action in query.actions() {
        actions::apply(&mut nav, &action, &mut host, state.strict_ids())?;
    }

    Ok(Html(render::render_page(
        &state.site,
        page,
        Some(&nav),
        host.target(),
        &state.config,
    )))
}

async fn not_found(uri: Uri) -> Response {
    tracing::debug!(path = %uri.path(), "no page bound to path");
    not_found_page(uri.path())
}

/// Page routes: every path in the site catalogue, plus an HTML 404 fallback
pub fn router() -> Router<Arc<AppState>> {
    Site::new()
        .pages()
        .fold(Router::new(), |router, p| router.route(p.path, get(page)))
        .fallback(not_found)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request};
    use folio_core::FolioConfig;
    use tower::ServiceExt;

    fn app(config: FolioConfig) -> Router {
        router().with_state(Arc::new(AppState::new(config)))
    }

    async fn get_html(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        assert!(content_type.starts_with("text/html"), "{uri}: {content_type}");
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn empty_query_gives_mount_state() {
        let page = Site::new().by_slug("privacy").unwrap();
        let nav = NavQuery::default().navigator(page, 100, true).unwrap();
        assert_eq!(nav.expanded().collect::<Vec<_>>(), vec!["introduction"]);
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn query_state_is_restored() {
        let page = Site::new().by_slug("privacy").unwrap();
        let query = NavQuery {
            x: Some("".into()),
            a: Some("".into()),
            ..Default::default()
        };
        let nav = query.navigator(page, 100, true).unwrap();
        assert_eq!(nav.expanded().count(), 0);
        assert_eq!(nav.active(), None);
    }

    #[tokio::test]
    async fn legal_page_mounts_with_introduction_open() {
        let (status, html) = get_html(app(FolioConfig::default()), "/privacy").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("id=\"introduction-body\""));
        assert!(!html.contains("id=\"rights-body\""));
    }

    #[tokio::test]
    async fn toggle_collapses_default_section() {
        let (_, html) = get_html(
            app(FolioConfig::default()),
            "/privacy?x=introduction&toggle=introduction",
        )
        .await;
        assert!(!html.contains("id=\"introduction-body\""));
    }

    #[tokio::test]
    async fn open_expands_and_activates() {
        let (_, html) = get_html(app(FolioConfig::default()), "/terms?x=introduction&open=liability").await;
        assert!(html.contains("id=\"introduction-body\""));
        assert!(html.contains("id=\"liability-body\""));
        assert!(html.contains("data-scroll-target=\"liability\""));
        assert!(html.contains("class=\"disclosure open active\""));
    }

    #[tokio::test]
    async fn unknown_toggle_is_tolerated_by_default() {
        let (status, _) = get_html(app(FolioConfig::default()), "/access?toggle=nonexistent-id").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_toggle_rejected_in_strict_mode() {
        let mut config = FolioConfig::default();
        config.server.strict_ids = true;
        let (status, body) = get_html(app(config), "/access?toggle=nonexistent-id").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("nonexistent-id"));
    }

    #[tokio::test]
    async fn restored_ids_checked_in_strict_mode() {
        let mut config = FolioConfig::default();
        config.server.strict_ids = true;

        let (status, body) = get_html(app(config.clone()), "/privacy?x=bogus").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("bogus"));

        let (status, _) = get_html(app(config.clone()), "/privacy?x=introduction&a=bogus").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = get_html(app(config), "/privacy?x=introduction,rights&a=rights").await;
        assert_eq!(status, StatusCode::OK);

        let (status, html) = get_html(app(FolioConfig::default()), "/privacy?x=bogus&a=bogus").await;
        assert_eq!(status, StatusCode::OK);
        assert!(!html.contains("id=\"introduction-body\""));
    }

    #[tokio::test]
    async fn toggle_applies_before_open() {
        let (status, html) = get_html(
            app(FolioConfig::default()),
            "/privacy?x=introduction&toggle=rights&open=rights",
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        // toggle opens rights, open keeps it open and activates it
        assert!(html.contains("id=\"rights-body\""));
        assert!(html.contains("data-scroll-target=\"rights\""));
    }

    #[test]
    fn query_actions_are_ordered() {
        let query = NavQuery {
            toggle: Some("a".into()),
            open: Some("b".into()),
            ..Default::default()
        };
        assert_eq!(
            query.actions(),
            vec![NavAction::Toggle("a".into()), NavAction::Navigate("b".into())]
        );
    }

    #[tokio::test]
    async fn flat_pages_and_unknown_paths() {
        let (status, html) = get_html(app(FolioConfig::default()), "/dsa").await;
        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Data Structures &amp; Algorithms"));

        let (status, _) = get_html(app(FolioConfig::default()), "/blog").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
}
