//! PostgreSQL implementation of the URL store.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::UrlRecord;
use crate::domain::repositories::{StoreError, UrlRepository};
use crate::utils::db_error::{classify_insert_error, classify_sqlx_error};

/// PostgreSQL store for alias mappings.
///
/// Uniqueness comes from the `urls_alias_key` constraint: the insert either
/// succeeds or the database reports a unique violation, which is translated
/// into [`StoreError::AliasExists`]. Each call checks a connection out of the
/// pool and returns it when the query future completes or is dropped.
#[derive(Clone)]
pub struct PgUrlRepository {
    pool: Arc<PgPool>,
}

impl PgUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Fetches the full record for `alias`, if any.
    pub async fn find(&self, alias: &str) -> Result<Option<UrlRecord>, StoreError> {
        sqlx::query_as::<_, UrlRecord>(
            r#"
            SELECT id, alias, url, created_at
            FROM urls
            WHERE alias = $1
            "#,
        )
        .bind(alias)
        .fetch_optional(self.pool.as_ref())
        .await
        .map_err(|e| classify_sqlx_error(e, alias))
    }
}

#[async_trait]
impl UrlRepository for PgUrlRepository {
    async fn save(&self, url: &str, alias: &str) -> Result<i64, StoreError> {
        sqlx::query_scalar::<_, i64>(
            r#"
            INSERT INTO urls (alias, url)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(alias)
        .bind(url)
        .fetch_one(self.pool.as_ref())
        .await
        .map_err(|e| classify_insert_error(e, alias))
    }

    async fn resolve(&self, alias: &str) -> Result<String, StoreError> {
        sqlx::query_scalar::<_, String>("SELECT url FROM urls WHERE alias = $1")
            .bind(alias)
            .fetch_one(self.pool.as_ref())
            .await
            .map_err(|e| classify_sqlx_error(e, alias))
    }

    async fn delete(&self, alias: &str) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM urls WHERE alias = $1")
            .bind(alias)
            .execute(self.pool.as_ref())
            .await
            .map_err(|e| classify_sqlx_error(e, alias))?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(alias.to_string()));
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .map(|_| ())
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
