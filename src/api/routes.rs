//! API route configuration.

use crate::api::handlers::{redirect_handler, shorten_handler};
use crate::api::middleware::rate_limit::{self, RateLimitGate};
use crate::state::AppState;
use axum::{
    Router, middleware,
    routing::{get, post},
};

/// `POST /shorten`, guarded by its own rate limiter.
pub fn shorten_routes(gate: RateLimitGate) -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route_layer(middleware::from_fn_with_state(gate, rate_limit::layer))
}

/// `GET /{code}`, guarded by its own rate limiter.
pub fn redirect_routes(gate: RateLimitGate) -> Router<AppState> {
    Router::new()
        .route("/{code}", get(redirect_handler))
        .route_layer(middleware::from_fn_with_state(gate, rate_limit::layer))
}
