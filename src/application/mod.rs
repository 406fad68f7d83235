//! Application layer services.
//!
//! Services consume the [`UrlRepository`](crate::domain::repositories::UrlRepository)
//! trait and provide the API used by HTTP handlers and the admin CLI.
//!
//! - [`services::ShorteningService`] - Alias assignment and removal
//! - [`services::ResolutionService`] - Alias lookup for redirects

pub mod services;
