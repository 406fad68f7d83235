//! HTTP middleware for request processing and protection.

pub mod auth;
pub mod request_id;
pub mod tracing;
