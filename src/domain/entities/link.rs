//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A persisted mapping from a short code to its original URL.
///
/// Links are written once and never mutated. `short_url` is always
/// `base_origin + "/" + code` and is stored so redirects and dedup hits can
/// answer without recomposing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub short_url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        short_url: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            short_url,
            created_at,
            updated_at,
        }
    }
}

/// Input data for creating a new link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLink {
    pub code: String,
    pub original_url: String,
    pub short_url: String,
}

impl NewLink {
    /// Builds a link for `code`, composing the short URL from `base_url`.
    ///
    /// A trailing slash on `base_url` is ignored.
    pub fn compose(base_url: &str, code: impl Into<String>, original_url: impl Into<String>) -> Self {
        let code = code.into();
        let short_url = format!("{}/{}", base_url.trim_end_matches('/'), code);

        Self {
            code,
            original_url: original_url.into(),
            short_url,
        }
    }
}
