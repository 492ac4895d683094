//! Link repository implementations.
//!
//! - [`PgLinkRepository`] - PostgreSQL storage via SQLx
//! - [`InMemoryLinkRepository`] - In-process storage for tests and local runs
//! - [`TimeoutLinkRepository`] - Decorator bounding each store call

pub mod memory_link_repository;
pub mod pg_link_repository;
pub mod timeout_link_repository;

pub use memory_link_repository::InMemoryLinkRepository;
pub use pg_link_repository::PgLinkRepository;
pub use timeout_link_repository::TimeoutLinkRepository;
