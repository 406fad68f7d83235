//! Short URL creation and removal.

use std::sync::Arc;

use serde_json::json;
use tracing::{info, warn};

use crate::domain::repositories::{StoreError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::AliasGenerator;
use crate::utils::alias_validator::validate_alias;

/// Service for assigning aliases to URLs.
///
/// A request flows through: determine the alias (caller-supplied or
/// generated), validate it, persist it, return it. Collisions are reported
/// as [`AppError::Conflict`] and never retried with a fresh alias.
pub struct ShorteningService<R: UrlRepository + ?Sized> {
    repository: Arc<R>,
    generator: AliasGenerator,
    alias_length: usize,
}

impl<R: UrlRepository + ?Sized> ShorteningService<R> {
    /// Creates a new shortening service.
    pub fn new(repository: Arc<R>, generator: AliasGenerator, alias_length: usize) -> Self {
        Self {
            repository,
            generator,
            alias_length,
        }
    }

    /// Configured alias length.
    pub fn alias_length(&self) -> usize {
        self.alias_length
    }

    /// Stores `url` under `alias`, or under a generated alias when `alias` is
    /// `None` or empty. Returns the alias used.
    ///
    /// The URL itself is not inspected here; syntax checks belong to the
    /// caller.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the alias has the wrong length or
    /// contains characters outside `[A-Za-z0-9]`.
    ///
    /// Returns [`AppError::Conflict`] if the alias is already taken.
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn shorten(&self, url: String, alias: Option<String>) -> Result<String, AppError> {
        let alias = match alias.filter(|a| !a.is_empty()) {
            Some(supplied) => supplied,
            None => self.generator.generate(self.alias_length),
        };

        if let Err(err) = validate_alias(&alias, self.alias_length) {
            info!(alias = %alias, reason = %err, "rejected alias");
            return Err(err);
        }

        match self.repository.save(&url, &alias).await {
            Ok(id) => {
                info!(id, alias = %alias, "url saved");
                Ok(alias)
            }
            Err(StoreError::AliasExists(taken)) => {
                info!(alias = %taken, url = %url, "alias already exists");
                Err(StoreError::AliasExists(taken).into())
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Permanently removes the mapping for `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    ///
    /// Returns [`AppError::NotFound`] if no record has `alias`.
    ///
    /// Returns [`AppError::Internal`] on store failures.
    pub async fn delete(&self, alias: &str) -> Result<(), AppError> {
        if alias.is_empty() {
            warn!("delete requested with empty alias");
            return Err(AppError::bad_request("Alias is empty", json!({})));
        }

        self.repository.delete(alias).await?;
        info!(alias = %alias, "url deleted");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockUrlRepository;
    use crate::utils::alias_validator::{DEFAULT_ALIAS_LENGTH, is_valid_alphabet};

    fn service(repo: MockUrlRepository) -> ShorteningService<MockUrlRepository> {
        ShorteningService::new(
            Arc::new(repo),
            AliasGenerator::seeded(7),
            DEFAULT_ALIAS_LENGTH,
        )
    }

    #[tokio::test]
    async fn test_shorten_with_supplied_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|url, alias| url == "https://example.com" && alias == "myalias12345678901ab")
            .times(1)
            .returning(|_, _| Ok(1));

        let result = service(mock_repo)
            .shorten(
                "https://example.com".to_string(),
                Some("myalias12345678901ab".to_string()),
            )
            .await;

        assert_eq!(result.unwrap(), "myalias12345678901ab");
    }

    #[tokio::test]
    async fn test_shorten_generates_alias_when_absent() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|_, alias| alias.len() == DEFAULT_ALIAS_LENGTH && is_valid_alphabet(alias))
            .times(1)
            .returning(|_, _| Ok(1));

        let alias = service(mock_repo)
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
        assert!(is_valid_alphabet(&alias));
    }

    #[tokio::test]
    async fn test_shorten_empty_alias_is_generated() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let alias = service(mock_repo)
            .shorten("https://example.com".to_string(), Some(String::new()))
            .await
            .unwrap();

        assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
    }

    #[tokio::test]
    async fn test_generated_alias_is_reproducible_with_seed() {
        let expected = AliasGenerator::seeded(7).generate(DEFAULT_ALIAS_LENGTH);

        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(1).returning(|_, _| Ok(1));

        let alias = service(mock_repo)
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(alias, expected);
    }

    #[tokio::test]
    async fn test_shorten_rejects_wrong_length() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(0);

        let result = service(mock_repo)
            .shorten("https://example.com".to_string(), Some("short".to_string()))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_rejects_bad_alphabet() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_save().times(0);

        let result = service(mock_repo)
            .shorten(
                "https://example.com".to_string(),
                Some("myalias12345678901a!".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_shorten_conflict_is_not_retried() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, alias| Err(StoreError::AliasExists(alias.to_string())));

        let result = service(mock_repo)
            .shorten(
                "https://example.com".to_string(),
                Some("myalias12345678901ab".to_string()),
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_generated_collision_is_conflict() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, alias| Err(StoreError::AliasExists(alias.to_string())));

        let result = service(mock_repo)
            .shorten("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_shorten_backend_failure() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .times(1)
            .returning(|_, _| Err(StoreError::Backend("connection refused".to_string())));

        let result = service(mock_repo)
            .shorten("https://example.com".to_string(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_shorten_honors_configured_length() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_save()
            .withf(|_, alias| alias.len() == 8)
            .times(1)
            .returning(|_, _| Ok(1));

        let service = ShorteningService::new(Arc::new(mock_repo), AliasGenerator::seeded(3), 8);
        let alias = service
            .shorten("https://example.com".to_string(), None)
            .await
            .unwrap();

        assert_eq!(alias.len(), 8);
        assert_eq!(service.alias_length(), 8);
    }

    #[tokio::test]
    async fn test_delete_success() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .withf(|alias| alias == "myalias12345678901ab")
            .times(1)
            .returning(|_| Ok(()));

        let result = service(mock_repo).delete("myalias12345678901ab").await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo
            .expect_delete()
            .times(1)
            .returning(|alias| Err(StoreError::NotFound(alias.to_string())));

        let result = service(mock_repo).delete("unknown").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_delete_empty_alias() {
        let mut mock_repo = MockUrlRepository::new();
        mock_repo.expect_delete().times(0);

        let result = service(mock_repo).delete("").await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }
}
