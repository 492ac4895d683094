//! Application layer services implementing business logic.
//!
//! Services consume the [`LinkRepository`](crate::domain::repositories::LinkRepository)
//! trait and provide a clean API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::code_allocator::CodeAllocator`] - Unused short code allocation
//! - [`services::shorten_service::ShortenService`] - Short link creation with URL dedup
//! - [`services::resolve_service::ResolveService`] - Short code lookup

pub mod services;
