//! Alias length and character-set validation.

use crate::error::AppError;
use serde_json::json;

/// Characters permitted in an alias: `A-Z`, `a-z`, `0-9`.
pub const ALPHABET: &[u8; 62] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Default alias length used when none is configured.
pub const DEFAULT_ALIAS_LENGTH: usize = 20;

/// Path segments served by fixed routes; an alias equal to one of them could
/// be saved but never redirected.
pub const RESERVED_ALIASES: &[&str] = &["health", "url"];

/// Returns `true` iff every character of `s` belongs to [`ALPHABET`].
///
/// The empty string is vacuously valid; length is checked separately by
/// [`validate_alias`].
pub fn is_valid_alphabet(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Validates an alias against the configured length and the alphabet.
///
/// # Errors
///
/// Returns [`AppError::Validation`] if the length differs from `length`, a
/// character falls outside [`ALPHABET`], or the alias is one of
/// [`RESERVED_ALIASES`].
pub fn validate_alias(alias: &str, length: usize) -> Result<(), AppError> {
    let provided_length = alias.chars().count();
    if provided_length != length {
        return Err(AppError::bad_request(
            format!("Alias must be exactly {length} characters"),
            json!({ "alias": alias, "provided_length": provided_length, "required_length": length }),
        ));
    }

    if !is_valid_alphabet(alias) {
        return Err(AppError::bad_request(
            "Alias can only contain ASCII letters and digits",
            json!({ "alias": alias }),
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request(
            "Alias is reserved",
            json!({ "alias": alias }),
        ));
    }

    Ok(())
}
