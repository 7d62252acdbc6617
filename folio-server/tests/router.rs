//! End-to-end checks against the fully layered router

use std::fs;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use folio_core::FolioConfig;
use folio_server::{build_router, AppState, ServerConfig};
use tower::ServiceExt;

fn router_with_assets(dir: &std::path::Path) -> axum::Router {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();

    let mut config = FolioConfig::default();
    config.server.assets_dir = dir.to_path_buf();
    let server_config = ServerConfig::from(&config);
    build_router(AppState::new(config), &server_config)
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn health_through_full_stack() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(router_with_assets(dir.path()), "/health").await;
    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn serves_resume_from_assets_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("resume.pdf"), b"%PDF-1.4 test").unwrap();

    let (status, body) = get(router_with_assets(dir.path()), "/assets/resume.pdf").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(b"%PDF"));

    let (status, _) = get(router_with_assets(dir.path()), "/assets/missing.pdf").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn resume_page_links_to_asset() {
    let dir = tempfile::tempdir().unwrap();
    let (status, body) = get(router_with_assets(dir.path()), "/resume").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("href=\"/assets/resume.pdf\" download"));
}

#[tokio::test]
async fn every_catalogue_path_renders() {
    let dir = tempfile::tempdir().unwrap();
    for page in folio_core::Site::new().pages() {
        let (status, _) = get(router_with_assets(dir.path()), page.path).await;
        assert_eq!(status, StatusCode::OK, "{}", page.path);
    }
}
