//! Timeout decorator for link repositories.

use async_trait::async_trait;
use std::future::Future;
use std::time::Duration;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Bounds every call to the wrapped repository by a fixed timeout.
///
/// An expired call yields [`AppError::StoreTimeout`]. The pending operation is
/// dropped; for inserts the outcome in the store is then unknown.
pub struct TimeoutLinkRepository<R> {
    inner: R,
    timeout: Duration,
}

impl<R: LinkRepository> TimeoutLinkRepository<R> {
    pub fn new(inner: R, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    async fn bounded<T, F>(&self, operation: &'static str, fut: F) -> Result<T, AppError>
    where
        F: Future<Output = Result<T, AppError>> + Send,
    {
        match tokio::time::timeout(self.timeout, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(operation, timeout = ?self.timeout, "Store operation timed out");
                Err(AppError::StoreTimeout(self.timeout))
            }
        }
    }
}

#[async_trait]
impl<R: LinkRepository> LinkRepository for TimeoutLinkRepository<R> {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.bounded("find_by_code", self.inner.find_by_code(code))
            .await
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        self.bounded("find_by_url", self.inner.find_by_url(url)).await
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        self.bounded("insert", self.inner.insert(new_link)).await
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.bounded("ping", self.inner.ping()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::InMemoryLinkRepository;

    /// Store whose every call stalls longer than any test timeout.
    struct StalledRepository;

    #[async_trait]
    impl LinkRepository for StalledRepository {
        async fn find_by_code(&self, _code: &str) -> Result<Option<Link>, AppError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(None)
        }

        async fn find_by_url(&self, _url: &str) -> Result<Option<Link>, AppError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(None)
        }

        async fn insert(&self, _new_link: NewLink) -> Result<Link, AppError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Err(AppError::internal("unreachable"))
        }

        async fn ping(&self) -> Result<(), AppError> {
            tokio::time::sleep(Duration::from_secs(3600)).await;
            Ok(())
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_store_times_out() {
        let repo = TimeoutLinkRepository::new(StalledRepository, Duration::from_millis(50));

        assert!(matches!(
            repo.find_by_code("ab3D").await,
            Err(AppError::StoreTimeout(_))
        ));
        assert!(matches!(
            repo.find_by_url("https://example.com").await,
            Err(AppError::StoreTimeout(_))
        ));
        assert!(matches!(
            repo.insert(NewLink::compose("https://short.ly", "ab3D", "https://example.com"))
                .await,
            Err(AppError::StoreTimeout(_))
        ));
        assert!(matches!(repo.ping().await, Err(AppError::StoreTimeout(_))));
    }

    #[tokio::test]
    async fn test_fast_store_passes_through() {
        let repo =
            TimeoutLinkRepository::new(InMemoryLinkRepository::new(), Duration::from_secs(1));

        repo.insert(NewLink::compose("https://short.ly", "ab3D", "https://example.com"))
            .await
            .unwrap();

        let result = repo
            .insert(NewLink::compose("https://short.ly", "ab3D", "https://other.com"))
            .await;

        assert!(matches!(result, Err(AppError::DuplicateCode { .. })));
        assert!(repo.find_by_code("ab3D").await.unwrap().is_some());
    }
}
