//! Store trait for alias to URL mappings.

use async_trait::async_trait;
use thiserror::Error;

/// Outcome classification performed once at the store boundary.
///
/// Upper layers match on these kinds only and never see backend-specific
/// error shapes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The backend rejected the insert because the alias is taken.
    #[error("alias already exists: {0}")]
    AliasExists(String),

    /// No live record has this alias.
    #[error("alias not found: {0}")]
    NotFound(String),

    /// Any other backend failure (I/O, connectivity, decoding).
    #[error("storage backend error: {0}")]
    Backend(String),
}

/// Durable mapping from alias to destination URL.
///
/// Alias uniqueness is authoritative here and nowhere else. Implementations
/// must detect conflicts with an atomic insert, never a lookup followed by an
/// insert.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgUrlRepository`] - PostgreSQL
/// - [`crate::infrastructure::persistence::InMemoryUrlRepository`] - `DashMap`
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts a new record and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::AliasExists`] if a live record already has
    /// `alias`, [`StoreError::Backend`] on any other failure.
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError>;

    /// Looks up the destination URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when no record has `alias`,
    /// [`StoreError::Backend`] on any other failure.
    async fn resolve(&self, alias: &str) -> Result<String, StoreError>;

    /// Permanently removes the record for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::NotFound`] when nothing was removed,
    /// [`StoreError::Backend`] on any other failure.
    async fn delete(&self, alias: &str) -> Result<(), StoreError>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<(), StoreError>;
}
