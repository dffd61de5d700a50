//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::shortener_service::ShortenerService`] - Short code creation and lookup

pub mod services;
