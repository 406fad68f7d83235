//! Handler for alias removal.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};

use crate::error::AppError;
use crate::state::AppState;

/// Permanently removes an alias.
///
/// # Endpoint
///
/// `DELETE /url/{alias}`
///
/// # Errors
///
/// - 404 if the alias is unknown
/// - 500 on store failures
pub async fn delete_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    state.shortening_service.delete(&alias).await?;

    Ok(StatusCode::NO_CONTENT)
}
