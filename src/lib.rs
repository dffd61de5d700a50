//! # shurl
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The url mapping entity and repository trait
//! - **Application Layer** ([`application`]) - Code generation with collision retry, lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Short Codes
//!
//! A code is the first characters of the base64url-encoded MD5 digest of
//! `salt + url`. The salt is redrawn whenever the database reports the code
//! as taken, so the primary key on `urls.short` is the only uniqueness
//! mechanism.
//!
//! ## Quick Start
//!
//! ```bash
//! export DATABASE_URL="sqlite://main.db"   # Optional
//! cargo run
//!
//! curl -d '{"url":"http://test.com/abc"}' localhost:8080/api/shorten
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
pub mod prelude {
    pub use crate::application::services::{ShortenerService, ShortenerSettings};
    pub use crate::domain::entities::UrlMapping;
    pub use crate::domain::repositories::{RepositoryError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
    pub use crate::utils::salt::{RandomSalt, SaltSource};
}
