//! Infrastructure layer for external integrations.
//!
//! - [`persistence`] - PostgreSQL and in-memory store implementations

pub mod persistence;
