//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// The link store.
///
/// The store is the single authority on code uniqueness: [`insert`] must be
/// atomic with respect to the code constraint, so two writers racing on the
/// same code cannot both succeed. Lookups performed before an insert are an
/// optimization only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - In-process store
/// - [`crate::infrastructure::persistence::TimeoutLinkRepository`] - Timeout decorator
/// - Test mocks available with `cfg(test)`
///
/// [`insert`]: LinkRepository::insert
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Finds a link previously created for `url`.
    ///
    /// The URL is matched exactly as it was submitted. When more than one link
    /// exists for the URL, the oldest one is returned.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError>;

    /// Persists a new link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::DuplicateCode`] if the code is already assigned.
    /// Returns [`AppError::Internal`] on storage errors.
    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
