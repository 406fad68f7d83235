//! Handler for the save endpoint.

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use serde_json::json;
use tracing::{error, info, warn};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "myalias12345678901ab" }
/// ```
///
/// `alias` is optional.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "myalias12345678901ab" }
/// ```
///
/// # Errors
///
/// - 400 if the body cannot be decoded, the URL is invalid or contains
///   control characters, or the alias fails length/alphabet checks
/// - 409 if the alias is already taken
/// - 500 on store failures
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) =
        payload.inspect_err(|e| error!(error = %e, "failed to decode request body"))?;

    info!(url = %request.url, alias = ?request.alias, "request body decoded");

    if let Err(e) = request.validate() {
        error!(error = %e, "failed to validate request");
        return Err(e.into());
    }

    // URL parsing drops tabs and newlines, but the raw string is what gets
    // stored and later sent back as a Location header.
    if request.url.chars().any(char::is_control) {
        warn!(url = ?request.url, "url contains control characters");
        return Err(AppError::bad_request(
            "Invalid request",
            json!({ "url": ["URL must not contain control characters"] }),
        ));
    }

    let alias = state
        .shortening_service
        .shorten(request.url, request.alias)
        .await?;

    Ok(Json(SaveResponse::ok(alias)))
}
