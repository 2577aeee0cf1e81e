use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use crate::{
    error::{AppError, AppResult},
    indexer,
    state::AppState,
};

/// Starts a background indexing run over all registered sources and returns
/// immediately. While a run is active, further triggers are rejected; the
/// orchestrator itself does not serialize concurrent invocations.
pub async fn trigger_index(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    if state.indexing.is_running() {
        return Err(AppError::Conflict("an indexing run is already active".into()));
    }

    let db = state.db.clone();
    let client = state.http.clone();
    let status = state.indexing.clone();
    let metrics = state.metrics.clone();
    let fetch_timeout = Duration::from_secs(state.config.crawler.fetch_timeout_secs);
    let batch_size = state.config.indexer.batch_size;

    tokio::spawn(async move {
        indexer::run_indexing(db, client, status, metrics, fetch_timeout, batch_size).await;
    });

    Ok((StatusCode::ACCEPTED, Json(json!({ "message": "Indexing started in background" }))))
}

/// Returns the current indexing status verbatim.
pub async fn index_status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.indexing.snapshot())
}
