//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to store a URL under an alias.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    /// Destination URL (must parse as a URL).
    #[validate(url(message = "Invalid URL format"))]
    pub url: String,

    /// Optional alias; a random one is generated when absent or empty.
    #[serde(default)]
    pub alias: Option<String>,
}

/// Successful save response.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub status: &'static str,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: String) -> Self {
        Self {
            status: "OK",
            alias,
        }
    }
}
