//! Handler for alias redirects.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its destination URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// # Errors
///
/// - 404 if the alias is unknown
/// - 500 on store failures, or if the stored URL is not a valid header value
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let url = state.resolution_service.resolve(&alias).await?;

    found(&url)
}

/// `GET /` carries no alias and is rejected as invalid input.
pub async fn empty_alias_handler(State(state): State<AppState>) -> Result<Response, AppError> {
    let url = state.resolution_service.resolve("").await?;

    found(&url)
}

/// Builds a `302 Found` response pointing at `url`.
fn found(url: &str) -> Result<Response, AppError> {
    let location = HeaderValue::try_from(url).map_err(|e| {
        tracing::error!(error = %e, "stored url is not a valid Location header");
        AppError::internal("Internal error", json!({}))
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
