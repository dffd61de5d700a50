//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`                      - Redirect to the web UI
//! - `GET  /health`                - Health check
//! - `POST /api/shorten`           - Create a short code
//! - `GET  /api/url/{short_url}`   - Look up the original URL
//! - `/web/*`                      - Static web UI
//!
//! Every request is traced; trailing slashes are trimmed before routing.

use crate::api;
use crate::api::handlers::{health_handler, index_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Builds the routed application without path normalization.
///
/// `static_dir` is served under `/web`.
pub fn router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_handler))
        .route("/health", get(health_handler))
        .nest("/api", api::routes::api_routes())
        .nest_service("/web", ServeDir::new(static_dir))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState, static_dir: &str) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, static_dir))
}
