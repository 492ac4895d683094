//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /shorten` - Create (or look up) a short URL, rate limited per client
//! - `GET  /{code}`  - Redirect to the original URL, rate limited per client
//! - `GET  /health`  - Store health check
//!
//! Requests are traced, and trailing slashes are trimmed before routing.

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router with all routes and middleware except path normalization.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .merge(api::routes::shorten_routes(state.shorten_gate.clone()))
        .merge(api::routes::redirect_routes(state.resolve_gate.clone()))
        .route("/health", get(health_handler))
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router served by [`crate::server::run`].
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(routes(state))
}
