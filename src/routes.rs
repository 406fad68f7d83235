//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET    /{alias}`       - Redirect to the stored URL (public)
//! - `GET    /health`        - Store health check (public)
//! - `POST   /url`           - Save a URL (Basic auth when configured)
//! - `DELETE /url/{alias}`   - Delete an alias (Basic auth when configured)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Authentication** - Basic auth on write routes

use crate::api;
use crate::api::handlers::{empty_alias_handler, health_handler, redirect_handler};
use crate::api::middleware::{auth, request_id, tracing};
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> Router {
    let api_router = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/", get(empty_alias_handler))
        .route("/{alias}", get(redirect_handler))
        .route("/health", get(health_handler))
        .merge(api_router)
        .with_state(state)
        .layer(request_id::propagate_layer())
        .layer(tracing::layer())
        .layer(request_id::set_layer())
}
