//! Shared state injected into HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Application state cloned into every handler.
#[derive(Clone)]
pub struct AppState {
    pub shortener_service: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener_service: Arc<ShortenerService>) -> Self {
        Self { shortener_service }
    }
}
