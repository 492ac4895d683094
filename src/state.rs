//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::api::middleware::rate_limit::{ClientIdentity, RateLimitGate};
use crate::application::services::{ResolveService, ShortenService};
use crate::domain::repositories::LinkRepository;
use crate::infrastructure::rate_limit::{ClientRateLimiter, RateLimitPolicy};

#[derive(Clone)]
pub struct AppState {
    pub shorten_service: Arc<ShortenService>,
    pub resolve_service: Arc<ResolveService>,
    pub shorten_gate: RateLimitGate,
    pub resolve_gate: RateLimitGate,
}

impl AppState {
    /// Wires services and rate limiters around a link store.
    ///
    /// Shortening and resolution each get their own limiter built from
    /// `policy`, so a client's budget on one endpoint does not affect the other.
    pub fn new(
        link_repository: Arc<dyn LinkRepository>,
        base_url: &str,
        policy: &RateLimitPolicy,
        identity: ClientIdentity,
    ) -> Self {
        let shorten_limiter = Arc::new(ClientRateLimiter::new("shorten", policy));
        let resolve_limiter = Arc::new(ClientRateLimiter::new("resolve", policy));

        Self {
            shorten_service: Arc::new(ShortenService::new(link_repository.clone(), base_url)),
            resolve_service: Arc::new(ResolveService::new(link_repository)),
            shorten_gate: RateLimitGate::new(shorten_limiter, identity),
            resolve_gate: RateLimitGate::new(resolve_limiter, identity),
        }
    }

    /// All rate limiters owned by this state.
    pub fn limiters(&self) -> [Arc<ClientRateLimiter>; 2] {
        [
            self.shorten_gate.limiter().clone(),
            self.resolve_gate.limiter().clone(),
        ]
    }
}
