#![allow(dead_code)]

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;
use shurl::application::services::{ShortenerService, ShortenerSettings};
use shurl::domain::entities::UrlMapping;
use shurl::domain::repositories::{RepositoryError, UrlRepository};
use shurl::infrastructure::persistence::{self, SqliteUrlRepository};
use shurl::routes::router;
use shurl::state::AppState;
use shurl::utils::salt::{RandomSalt, SaltSource};
use sqlx::SqlitePool;
use sqlx::sqlite::SqlitePoolOptions;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// Fresh in-memory database with migrations applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    persistence::migrate(&pool).await.unwrap();
    pool
}

pub async fn insert_mapping(pool: &SqlitePool, short: &str, original: &str) {
    sqlx::query("INSERT INTO urls (short, original) VALUES (?, ?)")
        .bind(short)
        .bind(original)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_mappings(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM urls")
        .fetch_one(pool)
        .await
        .unwrap()
}

pub fn create_test_state(
    repository: Arc<dyn UrlRepository>,
    salt_source: Arc<dyn SaltSource>,
) -> AppState {
    AppState::new(Arc::new(ShortenerService::new(
        repository,
        salt_source,
        ShortenerSettings::default(),
    )))
}

/// State backed by a real in-memory SQLite repository.
pub async fn create_sqlite_state() -> (AppState, SqlitePool) {
    let pool = test_pool().await;
    let repository = Arc::new(SqliteUrlRepository::new(Arc::new(pool.clone())));
    let state = create_test_state(repository, Arc::new(RandomSalt::from_seed(1)));

    (state, pool)
}

pub fn test_app(state: AppState) -> Router {
    router(state, "web")
}

pub fn test_server(state: AppState) -> TestServer {
    TestServer::new(test_app(state)).unwrap()
}

/// Salt source replaying a fixed list of salts, then falling back to random ones.
pub struct SequenceSalt {
    salts: Mutex<VecDeque<String>>,
    fallback: RandomSalt,
}

impl SequenceSalt {
    pub fn new(salts: &[&str]) -> Self {
        Self {
            salts: Mutex::new(salts.iter().map(|s| s.to_string()).collect()),
            fallback: RandomSalt::from_seed(99),
        }
    }
}

impl SaltSource for SequenceSalt {
    fn salt(&self, length: usize) -> String {
        self.salts
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| self.fallback.salt(length))
    }
}

/// Repository reporting a fixed number of conflicts before delegating.
pub struct ConflictingRepository {
    inner: SqliteUrlRepository,
    conflicts_left: AtomicUsize,
    pub inserts: AtomicUsize,
}

impl ConflictingRepository {
    pub fn new(pool: SqlitePool, conflicts: usize) -> Self {
        Self {
            inner: SqliteUrlRepository::new(Arc::new(pool)),
            conflicts_left: AtomicUsize::new(conflicts),
            inserts: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl UrlRepository for ConflictingRepository {
    async fn insert_if_absent(&self, mapping: UrlMapping) -> Result<(), RepositoryError> {
        self.inserts.fetch_add(1, Ordering::SeqCst);

        let remaining = self.conflicts_left.load(Ordering::SeqCst);
        if remaining > 0 {
            self.conflicts_left.store(remaining - 1, Ordering::SeqCst);
            return Err(RepositoryError::Conflict);
        }

        self.inner.insert_if_absent(mapping).await
    }

    async fn find_by_short(&self, short: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        self.inner.find_by_short(short).await
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        self.inner.ping().await
    }
}

/// Repository whose every operation fails with a database error.
pub struct BrokenRepository;

#[async_trait]
impl UrlRepository for BrokenRepository {
    async fn insert_if_absent(&self, _mapping: UrlMapping) -> Result<(), RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn find_by_short(&self, _short: &str) -> Result<Option<UrlMapping>, RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn ping(&self) -> Result<(), RepositoryError> {
        Err(RepositoryError::Database(sqlx::Error::PoolTimedOut))
    }
}
