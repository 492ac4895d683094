//! Application error type and its HTTP mapping.
//!
//! Every failure in the service is expressed as an [`AppError`]. Client-facing
//! variants carry a fixed message; internal variants are logged and reported
//! with a generic body so storage details never leak to callers.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::time::Duration;

/// Constraint guarding code uniqueness in the `links` table.
pub const CODE_UNIQUE_CONSTRAINT: &str = "links_code_key";

/// JSON body returned for every error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is missing, malformed, or not absolute.
    #[error("Invalid URL.")]
    InvalidUrl,

    /// No link exists for the requested code.
    #[error("Url not found")]
    NotFound { code: String },

    /// The client exceeded its request budget for the current window.
    #[error("Too many requests, please try again later.")]
    RateLimited { retry_after: Duration },

    /// The store rejected an insert because the code is already assigned.
    ///
    /// Retried by the shortening service and never surfaced directly.
    #[error("Short code '{code}' is already assigned")]
    DuplicateCode { code: String },

    /// Every candidate code drawn by the generator was already taken.
    #[error("No free short code found after {attempts} attempts")]
    ExhaustedKeyspace { attempts: usize },

    /// Every insert attempt lost a race on the code uniqueness constraint.
    #[error("Failed to persist a link after {attempts} attempts")]
    AllocationFailed { attempts: usize },

    /// A store operation did not complete within the configured timeout.
    #[error("Store operation timed out after {0:?}")]
    StoreTimeout(Duration),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn not_found(code: impl Into<String>) -> Self {
        Self::NotFound { code: code.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::RateLimited { .. } => StatusCode::TOO_MANY_REQUESTS,
            AppError::StoreTimeout(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::DuplicateCode { .. }
            | AppError::ExhaustedKeyspace { .. }
            | AppError::AllocationFailed { .. }
            | AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed in the response body.
    ///
    /// Server-side failures are collapsed into a generic message.
    pub fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => "Internal server error".to_string(),
            StatusCode::SERVICE_UNAVAILABLE => "Service temporarily unavailable".to_string(),
            _ => self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        let mut response = (status, Json(body)).into_response();

        if let AppError::RateLimited { retry_after } = self {
            let seconds = retry_after.as_secs() + u64::from(retry_after.subsec_nanos() > 0);
            if let Ok(value) = HeaderValue::from_str(&seconds.max(1).to_string()) {
                response.headers_mut().insert(header::RETRY_AFTER, value);
            }
        }

        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidUrl
    }
}

/// Maps an insert failure, recognising a lost race on the code constraint.
pub fn map_insert_error(e: sqlx::Error, code: &str) -> AppError {
    if let Some(db_err) = e.as_database_error()
        && db_err.is_unique_violation()
        && db_err.constraint() == Some(CODE_UNIQUE_CONSTRAINT)
    {
        return AppError::DuplicateCode {
            code: code.to_string(),
        };
    }

    AppError::from(e)
}
