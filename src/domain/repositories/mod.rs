//! Store trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`. A mock
//! implementation is generated via `mockall` for service tests.

pub mod url_repository;

pub use url_repository::{StoreError, UrlRepository};

#[cfg(test)]
pub use url_repository::MockUrlRepository;
