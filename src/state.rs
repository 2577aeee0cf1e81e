use std::sync::Arc;

use crate::config::AppConfig;
use crate::metrics::Metrics;
use crate::status::IndexingHandle;

/// The shared application state.
///
/// Holds the resources accessed across HTTP handlers and the background
/// indexing task. Cloneable for use with Axum's request extraction system.
#[derive(Clone)]
pub struct AppState {
    /// The database connection pool for sources and directories.
    pub db: sqlx::SqlitePool,
    /// The application configuration.
    pub config: Arc<AppConfig>,
    /// Observable state of the active indexing run. Written by the
    /// orchestrator, read by the status endpoint.
    pub indexing: IndexingHandle,
    /// Run counters and statistics.
    pub metrics: Metrics,
    /// Shared HTTP client used by the crawl engine.
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(db: sqlx::SqlitePool, config: AppConfig, http: reqwest::Client) -> Self {
        Self {
            db,
            config: Arc::new(config),
            indexing: IndexingHandle::new(),
            metrics: Metrics::new(),
            http,
        }
    }
}
