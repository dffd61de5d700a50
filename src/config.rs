//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `DATABASE_URL` - SQLite database (default: `sqlite://main.db`, created if missing)
//! - `LISTEN` - Bind address (default: `0.0.0.0:8080`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `STATIC_DIR` - Directory served under `/web` (default: `./web`)
//! - `SHORT_CODE_LENGTH` - Length of generated codes, 1-8 (default: 7)
//! - `SALT_LENGTH` - Length of the per-attempt salt (default: 6)
//! - `MAX_SHORTEN_ATTEMPTS` - Collision retries per request (default: 10)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)

use anyhow::Result;
use std::env;

use crate::application::services::ShortenerSettings;
use crate::application::services::shortener_service::DEFAULT_MAX_ATTEMPTS;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};
use crate::utils::salt::DEFAULT_SALT_LENGTH;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    pub static_dir: String,
    /// Must match between generation and lookup, or valid codes get rejected.
    pub short_code_length: usize,
    pub salt_length: usize,
    pub max_shorten_attempts: usize,
    pub db_max_connections: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: "sqlite://main.db".to_string(),
            listen_addr: "0.0.0.0:8080".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            static_dir: "./web".to_string(),
            short_code_length: DEFAULT_CODE_LENGTH,
            salt_length: DEFAULT_SALT_LENGTH,
            max_shorten_attempts: DEFAULT_MAX_ATTEMPTS,
            db_max_connections: 5,
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable numeric variables fall back to their defaults.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let database_url = env::var("DATABASE_URL").unwrap_or(defaults.database_url);
        let listen_addr = env::var("LISTEN").unwrap_or(defaults.listen_addr);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);
        let static_dir = env::var("STATIC_DIR").unwrap_or(defaults.static_dir);

        let short_code_length = env::var("SHORT_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.short_code_length);

        let salt_length = env::var("SALT_LENGTH")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.salt_length);

        let max_shorten_attempts = env::var("MAX_SHORTEN_ATTEMPTS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_shorten_attempts);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.db_max_connections);

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            static_dir,
            short_code_length,
            salt_length,
            max_shorten_attempts,
            db_max_connections,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `short_code_length` is outside `1..=8`
    /// - `salt_length` or `max_shorten_attempts` is zero
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` has no port
    /// - `database_url` is not a SQLite URL
    pub fn validate(&self) -> Result<()> {
        if self.short_code_length == 0 || self.short_code_length > MAX_CODE_LENGTH {
            anyhow::bail!(
                "SHORT_CODE_LENGTH must be between 1 and {}, got {}",
                MAX_CODE_LENGTH,
                self.short_code_length
            );
        }

        if self.salt_length == 0 {
            anyhow::bail!("SALT_LENGTH must be at least 1");
        }

        if self.max_shorten_attempts == 0 {
            anyhow::bail!("MAX_SHORTEN_ATTEMPTS must be at least 1");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Code generation settings derived from this configuration.
    pub fn shortener_settings(&self) -> ShortenerSettings {
        ShortenerSettings {
            code_length: self.short_code_length,
            salt_length: self.salt_length,
            max_attempts: self.max_shorten_attempts,
        }
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Short codes: length {}, salt {}, max attempts {}",
            self.short_code_length,
            self.salt_length,
            self.max_shorten_attempts
        );
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
