//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, service wiring, and the Axum
//! server lifecycle.

use crate::application::services::ShortenerService;
use crate::config::Config;
use crate::infrastructure::persistence::{self, SqliteUrlRepository};
use crate::routes::app_router;
use crate::state::AppState;
use crate::utils::salt::RandomSalt;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool
/// - Apply migrations
/// - Shortener service with a process-wide salt source
/// - Axum HTTP server
///
/// Returns after a Ctrl+C once in-flight requests are drained.
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = persistence::connect(&config.database_url, config.db_max_connections)
        .await
        .context("Failed to connect to database")?;
    tracing::info!("Connected to database");

    persistence::migrate(&pool)
        .await
        .context("Failed to migrate")?;
    tracing::info!("Migrations applied");

    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool)));
    let shortener_service = Arc::new(ShortenerService::new(
        repository,
        Arc::new(RandomSalt::new()),
        config.shortener_settings(),
    ));

    let state = AppState::new(shortener_service);
    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
