//! Repository trait for url mapping storage.

use crate::domain::entities::UrlMapping;
use crate::utils::db_error::is_unique_violation;
use async_trait::async_trait;
use thiserror::Error;

/// Outcome of a failed storage operation.
///
/// Callers only need to tell a key conflict apart from everything else.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// A mapping with the same short code already exists.
    #[error("short code already exists")]
    Conflict,

    /// Any other storage failure.
    #[error("database error: {0}")]
    Database(sqlx::Error),
}

impl From<sqlx::Error> for RepositoryError {
    fn from(e: sqlx::Error) -> Self {
        if is_unique_violation(&e) {
            Self::Conflict
        } else {
            Self::Database(e)
        }
    }
}

/// Storage capability for url mappings.
///
/// Uniqueness of `short` is enforced by the store itself, so concurrent
/// inserts of the same code see exactly one success.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Inserts `mapping` unless its short code is already taken.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Conflict`] if the short code exists.
    /// Returns [`RepositoryError::Database`] on any other failure.
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<(), RepositoryError>;

    /// Finds a mapping by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`RepositoryError::Database`] on database errors.
    async fn find_by_short(&self, short: &str) -> Result<Option<UrlMapping>, RepositoryError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), RepositoryError>;
}
