//! DTOs for the shortening endpoint.

use crate::utils::url_shape::URL_SHAPE_REGEX;
use serde::{Deserialize, Deserializer, Serialize};
use validator::Validate;

/// Request to shorten a URL.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    /// The original URL to shorten.
    ///
    /// A missing or `null` url reads as empty and fails validation as
    /// `invalid url` rather than as a parse error.
    #[serde(default, deserialize_with = "null_as_empty")]
    #[validate(regex(path = *URL_SHAPE_REGEX, message = "invalid url"))]
    pub url: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Response carrying the generated short code.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub link: String,
}
