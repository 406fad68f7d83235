//! API route configuration.
//!
//! Write routes are guarded by [`crate::api::middleware::auth`] when
//! credentials are configured.

use crate::api::handlers::{delete_handler, save_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, post},
};

/// Write routes.
///
/// # Endpoints
///
/// - `POST   /url`           - Store a URL under an alias
/// - `DELETE /url/{alias}`   - Remove an alias
pub fn protected_routes() -> Router<AppState> {
    Router::new()
        .route("/url", post(save_handler))
        .route("/url/{alias}", delete(delete_handler))
}
