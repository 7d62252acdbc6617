//! Custom Axum extractors

use std::sync::Arc;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use folio_core::Page;

use super::error::ApiError;
use super::server::AppState;

/// Resolve the `{slug}` path segment to a page of the site
pub struct ValidPage(pub &'static Page);

impl FromRequestParts<Arc<AppState>> for ValidPage {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(slug): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::BadRequest {
                message: "missing page slug".into(),
            })?;

        let page = state.site.by_slug(&slug).ok_or(ApiError::NotFound {
            resource: "page",
            id: slug,
        })?;
        Ok(Self(page))
    }
}
