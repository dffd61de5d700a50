//! Handler for the site root.

use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// Sends browsers to the bundled web UI.
///
/// `GET /` answers `301 Moved Permanently` with `Location: /web/`, so
/// relative links in the page resolve under `/web/`.
pub async fn index_handler() -> impl IntoResponse {
    (StatusCode::MOVED_PERMANENTLY, [(header::LOCATION, "/web/")])
}
