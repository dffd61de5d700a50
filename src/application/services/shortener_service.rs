//! Short link creation and lookup service.

use std::sync::Arc;

use serde_json::json;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{RepositoryError, UrlRepository};
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code};
use crate::utils::salt::{DEFAULT_SALT_LENGTH, SaltSource};
use crate::utils::url_shape::is_valid_url;

/// Default cap on insert attempts per shorten request.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

/// Tunables for code generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShortenerSettings {
    /// Length of every short code. Shared by generation and lookup validation.
    pub code_length: usize,
    pub salt_length: usize,
    pub max_attempts: usize,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            salt_length: DEFAULT_SALT_LENGTH,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Service for creating and resolving short codes.
///
/// Holds no mutable state of its own; uniqueness is delegated to the
/// repository's insert-if-absent operation.
pub struct ShortenerService {
    repository: Arc<dyn UrlRepository>,
    salt_source: Arc<dyn SaltSource>,
    settings: ShortenerSettings,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(
        repository: Arc<dyn UrlRepository>,
        salt_source: Arc<dyn SaltSource>,
        settings: ShortenerSettings,
    ) -> Self {
        Self {
            repository,
            salt_source,
            settings,
        }
    }

    /// Creates a short code for `original`.
    ///
    /// # Collision Handling
    ///
    /// Each attempt hashes a fresh salt prepended to the URL. When the store
    /// reports the code as taken, the candidate is discarded and a new salt
    /// is drawn, up to `max_attempts` times.
    ///
    /// The same URL may be shortened any number of times; each call stores
    /// an independent mapping.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `original` does not look like a URL.
    /// Returns [`AppError::Internal`] on storage failure or when every attempt
    /// collided.
    pub async fn shorten(&self, original: &str) -> Result<String, AppError> {
        if !is_valid_url(original) {
            return Err(AppError::bad_request("invalid url"));
        }

        for attempt in 1..=self.settings.max_attempts {
            let salt = self.salt_source.salt(self.settings.salt_length);
            let code = generate_code(&format!("{salt}{original}"), self.settings.code_length);

            match self
                .repository
                .insert_if_absent(UrlMapping::new(code.clone(), original))
                .await
            {
                Ok(()) => {
                    tracing::debug!(%code, attempt, "Short code created");
                    return Ok(code);
                }
                Err(RepositoryError::Conflict) => {
                    tracing::warn!(%code, attempt, "Duplicated short code, regenerating");
                }
                Err(e) => return Err(e.into()),
            }
        }

        Err(AppError::internal(
            "Failed to generate unique code",
            json!({ "attempts": self.settings.max_attempts }),
        ))
    }

    /// Resolves a short code to its original URL.
    ///
    /// Only the length of `code` is checked up front; a right-length code
    /// with foreign characters simply isn't found.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `code` has the wrong length.
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn resolve(&self, code: &str) -> Result<String, AppError> {
        if code.len() != self.settings.code_length {
            return Err(AppError::bad_request("invalid short url"));
        }

        self.repository
            .find_by_short(code)
            .await?
            .map(|mapping| mapping.original)
            .ok_or_else(|| AppError::not_found("url not found"))
    }

    /// Checks that the backing store is reachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        Ok(self.repository.ping().await?)
    }
}
