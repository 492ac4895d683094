//! Rate limiting middleware.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::net::IpAddr;
use std::sync::Arc;
use tower_governor::key_extractor::{KeyExtractor, PeerIpKeyExtractor, SmartIpKeyExtractor};

use crate::error::AppError;
use crate::infrastructure::rate_limit::ClientRateLimiter;

/// How the client address used as the rate limit key is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientIdentity {
    /// Socket peer address.
    Peer,
    /// `X-Forwarded-For` / `X-Real-IP` / `Forwarded`, falling back to the peer address.
    ///
    /// Only sound behind a trusted reverse proxy that overwrites these headers.
    Forwarded,
}

impl ClientIdentity {
    pub fn from_behind_proxy(behind_proxy: bool) -> Self {
        if behind_proxy {
            Self::Forwarded
        } else {
            Self::Peer
        }
    }

    /// Extracts the client address from a request, if available.
    pub fn client_ip<T>(&self, req: &axum::http::Request<T>) -> Option<IpAddr> {
        match self {
            Self::Peer => PeerIpKeyExtractor.extract(req).ok(),
            Self::Forwarded => SmartIpKeyExtractor.extract(req).ok(),
        }
    }
}

/// A limiter bound to the way clients are identified.
///
/// One gate is attached per protected route so each entry point keeps its
/// own budget.
#[derive(Clone)]
pub struct RateLimitGate {
    limiter: Arc<ClientRateLimiter>,
    identity: ClientIdentity,
}

impl RateLimitGate {
    pub fn new(limiter: Arc<ClientRateLimiter>, identity: ClientIdentity) -> Self {
        Self { limiter, identity }
    }

    pub fn limiter(&self) -> &Arc<ClientRateLimiter> {
        &self.limiter
    }
}

/// Rejects requests from clients that exceeded their budget.
///
/// Runs before the handler, so rejected requests never reach the link store.
///
/// # Errors
///
/// - `429 Too Many Requests` with `Retry-After` when the client is over budget
/// - `500 Internal Server Error` if no client address is available
///
/// # Example
///
/// ```rust,ignore
/// let routes = Router::new()
///     .route("/shorten", post(shorten_handler))
///     .route_layer(middleware::from_fn_with_state(gate, rate_limit::layer));
/// ```
pub async fn layer(
    State(gate): State<RateLimitGate>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = gate
        .identity
        .client_ip(&req)
        .ok_or_else(|| AppError::internal("Unable to determine client address"))?;

    gate.limiter.check(client)?;

    Ok(next.run(req).await)
}
