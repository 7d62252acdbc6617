//! JSON API over the page catalogue and the disclosure navigator

use std::sync::Arc;

use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use folio_core::{Navigator, NavigatorState, Page, PageKind, ScrollRequest, SectionState};
use serde::{Deserialize, Serialize};

use crate::actions::{self, NavAction};
use crate::http::error::ApiError;
use crate::http::extractors::ValidPage;
use crate::http::server::AppState;
use crate::render::AnchorHost;

/// Page listing entry
#[derive(Debug, Serialize)]
pub struct PageSummary {
    pub slug: &'static str,
    pub path: &'static str,
    pub title: &'static str,
    pub kind: PageKind,
    pub summary: &'static str,
    pub disclosure: bool,
}

impl From<&Page> for PageSummary {
    fn from(p: &Page) -> Self {
        Self {
            slug: p.slug,
            path: p.path,
            title: p.title,
            kind: p.kind,
            summary: p.summary,
            disclosure: p.is_disclosure(),
        }
    }
}

/// Full page with its mount-time navigator state
#[derive(Debug, Serialize)]
pub struct PageResponse {
    pub page: &'static Page,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial: Option<NavigatorState>,
}

#[derive(Debug, Deserialize)]
pub struct NavigatorRequest {
    /// Current state; omitted means the mount state
    #[serde(default)]
    pub state: Option<NavigatorState>,
    #[serde(default)]
    pub action: Option<NavAction>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub id: String,
    pub state: SectionState,
}

#[derive(Debug, Serialize)]
pub struct NavigatorResponse {
    pub state: NavigatorState,
    pub sections: Vec<SectionView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scroll: Option<ScrollRequest>,
}

/// GET /api/pages
async fn list_pages(State(state): State<Arc<AppState>>) -> Json<Vec<PageSummary>> {
    Json(state.site.pages().map(PageSummary::from).collect())
}

/// GET /api/pages/{slug}
async fn get_page(
    State(state): State<Arc<AppState>>,
    ValidPage(page): ValidPage,
) -> Json<PageResponse> {
    let initial = page
        .is_disclosure()
        .then(|| page.navigator(state.scroll_margin()).snapshot());
    Json(PageResponse { page, initial })
}

/// POST /api/pages/{slug}/navigator - apply one action to a navigator state
async fn navigate(
    State(state): State<Arc<AppState>>,
    ValidPage(page): ValidPage,
    Json(req): Json<NavigatorRequest>,
) -> Result<Json<NavigatorResponse>, ApiError> {
    if !page.is_disclosure() {
        return Err(ApiError::BadRequest {
            message: format!("page '{}' has no collapsible sections", page.slug),
        });
    }

    let margin = state.scroll_margin();
    let mut nav = match req.state {
        Some(snapshot) if state.strict_ids() => {
            Navigator::checked_restore(page.slug, page.section_ids(), snapshot)?
                .with_margin(margin)
        }
        Some(snapshot) => {
            Navigator::restore(page.slug, page.section_ids(), snapshot).with_margin(margin)
        }
        None => page.navigator(margin),
    };

    let mut host = AnchorHost::new(page);
    if let Some(action) = &req.action {
        actions::apply(&mut nav, action, &mut host, state.strict_ids())?;
    }

    let sections = nav
        .sections()
        .iter()
        .map(|id| SectionView {
            id: id.clone(),
            state: nav.state_of(id),
        })
        .collect();

    Ok(Json(NavigatorResponse {
        state: nav.snapshot(),
        sections,
        scroll: host.target().cloned(),
    }))
}

/// API routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/pages", get(list_pages))
        .route("/api/pages/{slug}", get(get_page))
        .route("/api/pages/{slug}/navigator", post(navigate))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use folio_core::FolioConfig;
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn app() -> Router {
        app_with(FolioConfig::default())
    }

    fn app_with(config: FolioConfig) -> Router {
        router().with_state(Arc::new(AppState::new(config)))
    }

    async fn send(req: Request<Body>) -> (StatusCode, Value) {
        send_to(app(), req).await
    }

    async fn send_to(app: Router, req: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(req).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn lists_all_pages() {
        let (status, body) = send(Request::get("/api/pages").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        let pages = body.as_array().unwrap();
        assert_eq!(pages.len(), folio_core::Site::new().len());
        assert!(pages
            .iter()
            .any(|p| p["slug"] == "privacy" && p["disclosure"] == true));
    }

    #[tokio::test]
    async fn page_detail_includes_initial_state() {
        let (status, body) =
            send(Request::get("/api/pages/privacy").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["initial"]["expanded"], json!(["introduction"]));
        assert_eq!(body["initial"]["active"], Value::Null);
        assert_eq!(body["page"]["path"], "/privacy");
    }

    #[tokio::test]
    async fn unknown_page_is_404() {
        let (status, body) =
            send(Request::get("/api/pages/blog").body(Body::empty()).unwrap()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "not_found");
    }

    #[tokio::test]
    async fn navigate_from_mount_state() {
        let (status, body) = send(post_json(
            "/api/pages/privacy/navigator",
            json!({ "action": { "navigate": "rights" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["expanded"], json!(["introduction", "rights"]));
        assert_eq!(body["state"]["active"], "rights");
        assert_eq!(body["scroll"]["id"], "rights");
        assert_eq!(body["scroll"]["margin"], 100);

        let rights = body["sections"]
            .as_array()
            .unwrap()
            .iter()
            .find(|s| s["id"] == "rights")
            .unwrap();
        assert_eq!(rights["state"], "expanded_active");
    }

    #[tokio::test]
    async fn toggle_from_given_state() {
        let (status, body) = send(post_json(
            "/api/pages/privacy/navigator",
            json!({
                "state": { "expanded": ["introduction"], "active": null },
                "action": { "toggle": "introduction" }
            }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["expanded"], json!([]));
        assert!(body.get("scroll").is_none());
    }

    #[tokio::test]
    async fn flat_page_has_no_navigator() {
        let (status, body) = send(post_json(
            "/api/pages/about/navigator",
            json!({ "action": { "toggle": "story" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
    }

    #[tokio::test]
    async fn strict_mode_checks_restored_state() {
        let mut config = FolioConfig::default();
        config.server.strict_ids = true;

        let (status, body) = send_to(
            app_with(config.clone()),
            post_json(
                "/api/pages/privacy/navigator",
                json!({ "state": { "expanded": ["bogus"], "active": "bogus" } }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "bad_request");
        assert!(body["message"].as_str().unwrap().contains("bogus"));

        let (status, _) = send_to(
            app_with(config.clone()),
            post_json(
                "/api/pages/privacy/navigator",
                json!({ "state": { "expanded": ["introduction"], "active": "bogus" } }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send_to(
            app_with(config),
            post_json(
                "/api/pages/privacy/navigator",
                json!({
                    "state": { "expanded": ["introduction"], "active": null },
                    "action": { "navigate": "rights" }
                }),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["active"], "rights");
    }

    #[tokio::test]
    async fn restored_state_is_permissive_by_default() {
        let (status, body) = send(post_json(
            "/api/pages/privacy/navigator",
            json!({ "state": { "expanded": ["bogus"], "active": "bogus" } }),
        ))
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["state"]["expanded"], json!(["bogus"]));
    }
}
