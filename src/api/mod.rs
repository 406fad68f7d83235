//! HTTP transport layer.
//!
//! Translates HTTP requests into service calls and renders their outcomes.
//! The services never build responses themselves.
//!
//! # Modules
//!
//! - [`dto`] - Request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Authentication, request ids, tracing
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
