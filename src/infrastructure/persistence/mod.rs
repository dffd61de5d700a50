//! SQLite repository implementations and pool setup.
//!
//! - [`SqliteUrlRepository`] - Url mapping storage and retrieval

pub mod sqlite_url_repository;

pub use sqlite_url_repository::SqliteUrlRepository;

use sqlx::SqlitePool;
use sqlx::migrate::MigrateError;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::str::FromStr;

/// Opens a connection pool, creating the database file if it does not exist.
///
/// # Errors
///
/// Returns an error if the URL is malformed or the database cannot be opened.
pub async fn connect(database_url: &str, max_connections: u32) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(max_connections)
        .connect_with(options)
        .await
}

/// Applies the embedded migrations from `./migrations`.
///
/// Creates the `urls` table on first start.
pub async fn migrate(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
