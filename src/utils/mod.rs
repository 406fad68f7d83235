//! Helpers used across the application:
//!
//! - [`alias_generator`] - Random alias generation
//! - [`alias_validator`] - Alias length and alphabet checks
//! - [`db_error`] - `sqlx` error classification

pub mod alias_generator;
pub mod alias_validator;
pub mod db_error;
