//! DTOs for the lookup endpoint.

use serde::Serialize;

/// Original URL resolved from a short code.
#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub url: String,
}
