//! API route configuration.

use crate::api::handlers::{lookup_handler, shorten_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Short link API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`           - Create a short code
/// - `GET  /url/{short_url}`   - Look up the original URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/url/{short_url}", get(lookup_handler))
}
