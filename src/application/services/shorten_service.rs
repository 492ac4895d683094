//! Link shortening service.

use std::sync::Arc;

use url::Url;

use crate::application::services::code_allocator::CodeAllocator;
use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Maximum number of inserts attempted when the store reports a code conflict.
pub const MAX_INSERT_ATTEMPTS: usize = 5;

/// Creates short links, returning the existing one for URLs seen before.
///
/// # Concurrency
///
/// The service holds no locks. Code uniqueness is enforced by the store's
/// insert; a lost race surfaces as [`AppError::DuplicateCode`] and is retried
/// with a fresh code.
///
/// Two concurrent requests for the same brand-new URL can both miss the
/// dedup lookup and each create a link. Both short URLs stay valid and
/// resolve to the same target; later requests return the oldest one.
pub struct ShortenService<L: LinkRepository + ?Sized = dyn LinkRepository> {
    link_repository: Arc<L>,
    allocator: CodeAllocator<L>,
    base_url: String,
}

impl<L: LinkRepository + ?Sized> ShortenService<L> {
    /// Creates a new shortening service.
    ///
    /// `base_url` is the public origin prepended to every code.
    pub fn new(link_repository: Arc<L>, base_url: impl Into<String>) -> Self {
        let allocator = CodeAllocator::new(link_repository.clone());
        Self::with_allocator(link_repository, allocator, base_url)
    }

    pub fn with_allocator(
        link_repository: Arc<L>,
        allocator: CodeAllocator<L>,
        base_url: impl Into<String>,
    ) -> Self {
        Self {
            link_repository,
            allocator,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base origin used to compose short URLs, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Shortens `raw_url`, or returns the link already created for it.
    ///
    /// # Errors
    ///
    /// - [`AppError::InvalidUrl`] if `raw_url` is not an absolute URL; the store is not touched
    /// - [`AppError::ExhaustedKeyspace`] if no free code could be drawn
    /// - [`AppError::AllocationFailed`] if every insert lost a race on its code
    /// - Store errors are propagated unchanged
    pub async fn shorten(&self, raw_url: &str) -> Result<Link, AppError> {
        validate_url(raw_url)?;

        if let Some(existing) = self.link_repository.find_by_url(raw_url).await? {
            tracing::debug!(code = %existing.code, "URL already shortened");
            metrics::counter!("links_deduplicated_total").increment(1);
            return Ok(existing);
        }

        for attempt in 1..=MAX_INSERT_ATTEMPTS {
            let code = self.allocator.allocate().await?;
            let new_link = NewLink::compose(&self.base_url, code, raw_url);

            match self.link_repository.insert(new_link).await {
                Ok(link) => {
                    tracing::info!(code = %link.code, "Short link created");
                    metrics::counter!("links_created_total").increment(1);
                    return Ok(link);
                }
                Err(AppError::DuplicateCode { code }) => {
                    tracing::warn!(code = %code, attempt, "Lost race on short code, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::AllocationFailed {
            attempts: MAX_INSERT_ATTEMPTS,
        })
    }
}

/// Checks that `raw_url` parses as an absolute URL.
///
/// The parser silently drops tabs and newlines and trims surrounding
/// whitespace, while the raw string is what gets stored and redirected to.
/// Such input is rejected so the stored value is exactly what was validated.
pub fn validate_url(raw_url: &str) -> Result<Url, AppError> {
    if raw_url.chars().any(char::is_control) || raw_url.trim() != raw_url {
        return Err(AppError::InvalidUrl);
    }

    Url::parse(raw_url).map_err(|_| AppError::InvalidUrl)
}
