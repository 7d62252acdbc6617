//! folio-server: HTTP front end for the folio site
//!
//! Serves every catalogue page as HTML, a JSON API over pages and the
//! disclosure navigator, and static assets (stylesheet, resume PDF).

pub mod actions;
pub mod http;
pub mod render;

pub use http::{build_router, run_server, AppState, ServerConfig, ServerError};
