//! Short code resolution service.

use std::sync::Arc;

use crate::domain::entities::Link;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::is_well_formed;

/// Looks up short codes. Read-only.
pub struct ResolveService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
}

impl<L: LinkRepository + ?Sized> ResolveService<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self { link_repository }
    }

    /// Returns the link stored under `code`.
    ///
    /// Codes that could never have been generated are rejected without a
    /// store lookup.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link has that code.
    /// Store errors are propagated unchanged.
    pub async fn resolve(&self, code: &str) -> Result<Link, AppError> {
        if !is_well_formed(code) {
            metrics::counter!("links_not_found_total").increment(1);
            return Err(AppError::not_found(code));
        }

        match self.link_repository.find_by_code(code).await? {
            Some(link) => {
                metrics::counter!("links_resolved_total").increment(1);
                Ok(link)
            }
            None => {
                metrics::counter!("links_not_found_total").increment(1);
                Err(AppError::not_found(code))
            }
        }
    }

    /// Checks that the underlying store is reachable.
    pub async fn store_health(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }
}
