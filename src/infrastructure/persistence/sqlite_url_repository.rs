//! SQLite implementation of the url repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use std::sync::Arc;

use crate::domain::entities::UrlMapping;
use crate::domain::repositories::{RepositoryError, UrlRepository};

/// SQLite repository for url mappings.
///
/// The `urls.short` primary key is what keeps codes unique.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r#"
            INSERT INTO urls (short, original)
            VALUES (?, ?)
            ON CONFLICT(short) DO NOTHING
            "#,
        )
        .bind(mapping.short)
        .bind(mapping.original)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::Conflict);
        }

        Ok(())
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        let row = sqlx::query_as::<_, (String, String)>(
            "SELECT short, original FROM urls WHERE short = ?",
        )
        .bind(short)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(|(short, original)| UrlMapping { short, original }))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}
