//! Handler for original URL lookup.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::lookup::LookupResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the original URL behind a short code.
///
/// # Endpoint
///
/// `GET /api/url/{short_url}`
///
/// # Errors
///
/// - 400 `invalid short url` if the code has the wrong length
/// - 404 `url not found` if no mapping exists
/// - 500 `error has occurred` on storage failure
pub async fn lookup_handler(
    Path(short_url): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<LookupResponse>, AppError> {
    let url = state.shortener_service.resolve(&short_url).await?;

    Ok(Json(LookupResponse { url }))
}
