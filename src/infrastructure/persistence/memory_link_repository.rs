//! In-process link repository.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Link store kept in memory.
///
/// Mirrors the PostgreSQL semantics: inserts check and claim the code under a
/// single write guard, and `find_by_url` returns the first link created for a
/// URL. Contents are lost when the process exits.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    by_code: HashMap<String, Link>,
    by_url: HashMap<String, String>,
    next_id: i64,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored links.
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_code.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// All links stored for `url`, oldest first.
    pub async fn links_for_url(&self, url: &str) -> Vec<Link> {
        let inner = self.inner.read().await;
        let mut links: Vec<Link> = inner
            .by_code
            .values()
            .filter(|l| l.original_url == url)
            .cloned()
            .collect();
        links.sort_by_key(|l| l.id);
        links
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        Ok(self.inner.read().await.by_code.get(code).cloned())
    }

    async fn find_by_url(&self, url: &str) -> Result<Option<Link>, AppError> {
        let inner = self.inner.read().await;
        Ok(inner
            .by_url
            .get(url)
            .and_then(|code| inner.by_code.get(code))
            .cloned())
    }

    async fn insert(&self, new_link: NewLink) -> Result<Link, AppError> {
        let mut inner = self.inner.write().await;

        if inner.by_code.contains_key(&new_link.code) {
            return Err(AppError::DuplicateCode {
                code: new_link.code,
            });
        }

        inner.next_id += 1;
        let now = Utc::now();
        let link = Link::new(
            inner.next_id,
            new_link.code,
            new_link.original_url,
            new_link.short_url,
            now,
            now,
        );

        inner
            .by_url
            .entry(link.original_url.clone())
            .or_insert_with(|| link.code.clone());
        inner.by_code.insert(link.code.clone(), link.clone());

        Ok(link)
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
