//! Utility functions for code generation, salting, and input checks.
//!
//! - [`code_generator`] - Deterministic short code derivation
//! - [`salt`] - Injectable salt sources
//! - [`url_shape`] - URL shape validation
//! - [`db_error`] - Database error classification

pub mod code_generator;
pub mod db_error;
pub mod salt;
pub mod url_shape;
