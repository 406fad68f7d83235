//! Alias resolution for redirects.

use std::sync::Arc;

use serde_json::json;
use tracing::info;

use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::AppError;

/// Service mapping an alias back to its destination URL.
pub struct ResolutionService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: UrlRepository + ?Sized> ResolutionService<R> {
    /// Creates a new resolution service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns the destination URL for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    ///
    /// Returns [`AppError::NotFound`] if no record has `alias`.
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn resolve(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::bad_request("Alias is empty", json!({})));
        }

        match self.repository.resolve(alias).await {
            Ok(url) => {
                info!(alias = %alias, url = %url, "resolved alias");
                Ok(url)
            }
            Err(StoreError::NotFound(missing)) => {
                info!(alias = %missing, "alias not found");
                Err(StoreError::NotFound(missing).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Reports whether the store backend is reachable.
    pub async fn store_healthy(&self) -> Result<(), StoreError> {
        self.repository.ping().await
    }
}
