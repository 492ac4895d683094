//! Infrastructure layer for storage and request protection.
//!
//! - [`persistence`] - Link store implementations
//! - [`rate_limit`] - Per-client rate limiting

pub mod persistence;
pub mod rate_limit;
