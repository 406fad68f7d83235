//! Store implementations.
//!
//! - [`PgUrlRepository`] - PostgreSQL via SQLx, uniqueness from a table constraint
//! - [`InMemoryUrlRepository`] - `DashMap`, uniqueness from the entry API

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::InMemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;
