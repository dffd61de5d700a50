//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization; request DTOs are checked with
//! `validator`.

pub mod health;
pub mod lookup;
pub mod shorten;
