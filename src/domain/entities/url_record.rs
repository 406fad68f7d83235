//! URL record entity representing a persisted alias mapping.

use chrono::{DateTime, Utc};

/// A stored alias to destination URL mapping.
///
/// `id` is assigned by the store and never reused. `alias` is unique across
/// live records and immutable once created. `url` is opaque to the store.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UrlRecord {
    pub id: i64,
    pub alias: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
}

impl UrlRecord {
    /// Creates a new UrlRecord instance.
    pub fn new(id: i64, alias: String, url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            alias,
            url,
            created_at,
        }
    }
}
