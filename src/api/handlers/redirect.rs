//! Handler for short URL redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Responses
///
/// - `302 Found` with `Location` set to the original URL
/// - `404 {"error": "Url not found"}` if the code was never issued
/// - `429` when the client exceeded its rate limit (applied by middleware)
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let link = state.resolve_service.resolve(&code).await?;

    let location = HeaderValue::from_bytes(link.original_url.as_bytes()).map_err(|_| {
        AppError::internal(format!(
            "Stored URL for '{}' is not a valid Location header",
            link.code
        ))
    })?;

    tracing::debug!(code = %link.code, "Redirecting");

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
