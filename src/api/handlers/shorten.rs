//! Handler for the link shortening endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Shortens a URL, returning the existing short URL if it was shortened before.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "fullUrl": "https://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "shortUrl": "https://short.ly/ab3D" }
/// ```
///
/// # Errors
///
/// - `400 {"error": "Invalid URL."}` for a missing, malformed, or relative URL,
///   and for bodies that are not valid JSON
/// - `429` when the client exceeded its rate limit (applied by middleware)
/// - `500` when no short code could be allocated
/// - `503` when the store did not answer in time
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "Rejected shorten request body");
        AppError::InvalidUrl
    })?;

    payload.validate()?;

    let full_url = payload.full_url.ok_or(AppError::InvalidUrl)?;

    let link = state.shorten_service.shorten(&full_url).await?;

    Ok(Json(ShortenResponse {
        short_url: link.short_url,
    }))
}
