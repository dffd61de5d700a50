//! Handler for link shortening endpoint.

use axum::{Json, body::Bytes, extract::State};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short code for a long URL.
///
/// # Endpoint
///
/// `POST /api/shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "http://test.com/abc" }
/// ```
///
/// The body is parsed as JSON regardless of `Content-Type`.
///
/// # Response
///
/// ```json
/// { "link": "Xb3_k9A" }
/// ```
///
/// # Errors
///
/// - 400 with the parser message if the body is not valid JSON
/// - 400 `invalid url` if the URL fails the shape check
/// - 500 `error has occurred` on storage failure
pub async fn shorten_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ShortenResponse>, AppError> {
    let payload: ShortenRequest = serde_json::from_slice(&body).inspect_err(|e| {
        tracing::debug!("Failed to parse shorten request: {}", e);
    })?;
    payload.validate()?;

    let link = state.shortener_service.shorten(&payload.url).await?;

    Ok(Json(ShortenResponse { link }))
}
