//! Allocation of unused short codes.

use std::sync::Arc;

use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Maximum number of candidates drawn before giving up.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 20;

/// Draws random codes until one is found that the store does not know.
///
/// Nothing is reserved: a code returned here can still be taken by a
/// concurrent writer before it is inserted, so callers must handle
/// [`AppError::DuplicateCode`] from the store.
pub struct CodeAllocator<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    max_attempts: usize,
}

impl<L: LinkRepository + ?Sized> CodeAllocator<L> {
    pub fn new(link_repository: Arc<L>) -> Self {
        Self::with_max_attempts(link_repository, MAX_ALLOCATION_ATTEMPTS)
    }

    pub fn with_max_attempts(link_repository: Arc<L>, max_attempts: usize) -> Self {
        Self {
            link_repository,
            max_attempts,
        }
    }

    /// Returns a code not currently assigned to any link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ExhaustedKeyspace`] when every attempt collided.
    /// Store errors are propagated unchanged.
    pub async fn allocate(&self) -> Result<String, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code();

            if self.link_repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }

            tracing::debug!(code = %code, attempt, "Short code collision");
        }

        tracing::error!(
            attempts = self.max_attempts,
            "Short code space exhausted"
        );

        Err(AppError::ExhaustedKeyspace {
            attempts: self.max_attempts,
        })
    }
}
