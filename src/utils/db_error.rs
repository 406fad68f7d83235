//! Translation of `sqlx` errors into [`StoreError`] kinds.

use crate::domain::repositories::StoreError;

/// Name of the unique constraint on `urls.alias`.
pub const ALIAS_UNIQUE_CONSTRAINT: &str = "urls_alias_key";

/// Returns `true` if `e` is a unique violation on the alias constraint.
pub fn is_unique_violation_on_alias(e: &sqlx::Error) -> bool {
    let Some(db_err) = e.as_database_error() else {
        return false;
    };

    if !db_err.is_unique_violation() {
        return false;
    }

    matches!(db_err.constraint(), Some(ALIAS_UNIQUE_CONSTRAINT))
}

/// Classifies a failed insert. Only a unique violation on the alias
/// constraint becomes [`StoreError::AliasExists`].
pub fn classify_insert_error(e: sqlx::Error, alias: &str) -> StoreError {
    if is_unique_violation_on_alias(&e) {
        return StoreError::AliasExists(alias.to_string());
    }

    classify_sqlx_error(e, alias)
}

/// Classifies a failed lookup or delete.
pub fn classify_sqlx_error(e: sqlx::Error, alias: &str) -> StoreError {
    match e {
        sqlx::Error::RowNotFound => StoreError::NotFound(alias.to_string()),
        other => StoreError::Backend(other.to_string()),
    }
}
