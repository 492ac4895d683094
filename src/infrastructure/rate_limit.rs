//! Per-client request rate limiting.
//!
//! Each limiter tracks one GCRA cell per client address. A client may spend
//! its whole budget at once; budget is replenished continuously at
//! `max_requests` per `window`, so an exhausted client is fully restored one
//! window after its last accepted request.

use std::net::IpAddr;
use std::num::NonZeroU32;
use std::time::Duration;

use governor::clock::{Clock, DefaultClock};
use governor::middleware::NoOpMiddleware;
use governor::state::keyed::DashMapStateStore;
use governor::{Quota, RateLimiter};

use crate::error::AppError;

/// Request budget applied to each client.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitPolicy {
    window: Duration,
    max_requests: NonZeroU32,
    quota: Quota,
}

impl RateLimitPolicy {
    /// Allows `max_requests` per `window` for every client.
    ///
    /// # Errors
    ///
    /// Fails if `max_requests` is zero or the window is too short to be split
    /// into `max_requests` non-zero intervals.
    pub fn new(window: Duration, max_requests: u32) -> anyhow::Result<Self> {
        let max_requests = NonZeroU32::new(max_requests)
            .ok_or_else(|| anyhow::anyhow!("rate limit must allow at least one request"))?;

        let quota = Quota::with_period(window / max_requests.get())
            .ok_or_else(|| anyhow::anyhow!("rate limit window {window:?} is too short"))?
            .allow_burst(max_requests);

        Ok(Self {
            window,
            max_requests,
            quota,
        })
    }

    pub fn window(&self) -> Duration {
        self.window
    }

    pub fn max_requests(&self) -> u32 {
        self.max_requests.get()
    }
}

type KeyedLimiter<C> =
    RateLimiter<IpAddr, DashMapStateStore<IpAddr>, C, NoOpMiddleware<<C as Clock>::Instant>>;

/// Rate limiter keyed by client address.
///
/// Checks are lock-free per key and never touch the link store.
pub struct ClientRateLimiter<C: Clock + Clone = DefaultClock> {
    name: &'static str,
    limiter: KeyedLimiter<C>,
    clock: C,
}

impl ClientRateLimiter<DefaultClock> {
    /// Creates a limiter using the system clock.
    ///
    /// `name` labels log events and metrics emitted on rejection.
    pub fn new(name: &'static str, policy: &RateLimitPolicy) -> Self {
        Self::with_clock(name, policy, DefaultClock::default())
    }
}

impl<C: Clock + Clone> ClientRateLimiter<C> {
    pub fn with_clock(name: &'static str, policy: &RateLimitPolicy, clock: C) -> Self {
        Self {
            name,
            limiter: RateLimiter::dashmap_with_clock(policy.quota, clock.clone()),
            clock,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Records a request from `client`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::RateLimited`] with the time until the next request
    /// would be accepted.
    pub fn check(&self, client: IpAddr) -> Result<(), AppError> {
        self.limiter.check_key(&client).map_err(|not_until| {
            let retry_after = not_until.wait_time_from(self.clock.now());

            tracing::warn!(client = %client, limiter = self.name, ?retry_after, "Rate limit exceeded");
            metrics::counter!("rate_limited_total", "limiter" => self.name).increment(1);

            AppError::RateLimited { retry_after }
        })
    }

    /// Drops clients whose budget is fully replenished.
    pub fn retain_recent(&self) {
        self.limiter.retain_recent();
        self.limiter.shrink_to_fit();
    }

    /// Number of clients currently tracked.
    pub fn tracked_clients(&self) -> usize {
        self.limiter.len()
    }
}
