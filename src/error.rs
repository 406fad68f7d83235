//! Application error type and its HTTP rendering.
//!
//! Every failure that crosses the service boundary is one of the [`AppError`]
//! variants. Store failures arrive already classified as
//! [`StoreError`](crate::domain::repositories::StoreError) and are relayed
//! through [`From`].

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};
use std::fmt;

use crate::domain::repositories::StoreError;

/// JSON body returned for every non-2xx response.
#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    error: ErrorInfo,
}

/// Machine-readable error description.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug)]
pub enum AppError {
    /// Malformed request, empty alias, or alias failing length/alphabet checks.
    Validation { message: String, details: Value },
    /// No live record for the alias.
    NotFound { message: String, details: Value },
    /// Alias already taken.
    Conflict { message: String, details: Value },
    /// Missing or wrong credentials.
    Unauthorized { message: String, details: Value },
    /// Backend failure. Details never carry backend internals.
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// HTTP status the transport layer renders this error with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Conflict { .. } => StatusCode::CONFLICT,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Conflict { message, .. }
            | Self::Unauthorized { message, .. }
            | Self::Internal { message, .. } => message,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, details) = match self {
            Self::Validation { details, .. } => ("validation_error", details),
            Self::NotFound { details, .. } => ("not_found", details),
            Self::Conflict { details, .. } => ("conflict", details),
            Self::Unauthorized { details, .. } => ("unauthorized", details),
            Self::Internal { details, .. } => ("internal_error", details),
        };

        ErrorInfo {
            code,
            message: self.message().to_string(),
            details: details.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: "Error",
            error: self.to_error_info(),
        };

        if status == StatusCode::UNAUTHORIZED {
            return (
                status,
                [(header::WWW_AUTHENTICATE, "Basic realm=\"alias-shortener\"")],
                Json(body),
            )
                .into_response();
        }

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::AliasExists(alias) => {
                AppError::conflict("Alias already exists", json!({ "alias": alias }))
            }
            StoreError::NotFound(alias) => {
                AppError::not_found("Alias not found", json!({ "alias": alias }))
            }
            StoreError::Backend(reason) => {
                tracing::error!(error = %reason, "store backend failure");
                AppError::internal("Internal error", json!({}))
            }
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: serde_json::Map<String, Value> = errors
            .field_errors()
            .into_iter()
            .map(|(field, errs)| {
                let messages: Vec<String> = errs
                    .iter()
                    .map(|e| {
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    })
                    .collect();
                (field.to_string(), json!(messages))
            })
            .collect();

        AppError::bad_request("Invalid request", Value::Object(fields))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Failed to decode request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::conflict("x", json!({})).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            AppError::unauthorized("x", json!({})).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            AppError::internal("x", json!({})).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        let err: AppError = StoreError::AliasExists("abc".to_string()).into();
        assert!(matches!(err, AppError::Conflict { .. }));

        let err: AppError = StoreError::NotFound("abc".to_string()).into();
        assert!(matches!(err, AppError::NotFound { .. }));

        let err: AppError = StoreError::Backend("connection reset".to_string()).into();
        assert!(matches!(err, AppError::Internal { .. }));
    }

    #[test]
    fn test_backend_details_not_leaked() {
        let err: AppError = StoreError::Backend("password=hunter2".to_string()).into();
        let info = err.to_error_info();

        assert_eq!(info.code, "internal_error");
        assert!(!info.details.to_string().contains("hunter2"));
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::conflict("Alias already exists", json!({}));
        assert_eq!(err.to_string(), "Alias already exists");
    }
}
