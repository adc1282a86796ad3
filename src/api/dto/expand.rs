//! DTOs for the expand endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to resolve a short reference back to its original URL.
///
/// `shorted_url` may be a bare code or a fully-qualified short URL; the
/// resolver strips the wrapping prefix itself.
#[derive(Debug, Deserialize, Validate)]
pub struct ExpandRequest {
    #[validate(length(min = 1, message = "shorted_url must not be empty"))]
    pub shorted_url: String,
}

/// The original URL mapped to the requested short reference.
#[derive(Debug, Serialize)]
pub struct ExpandResponse {
    pub original_url: String,
}
