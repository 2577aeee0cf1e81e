use axum::{extract::State, response::IntoResponse, Json};
use sqlx::Row;

use crate::{state::AppState, types::StatsResponse};

/// Corpus statistics: source/directory counts and the time of the latest
/// indexed directory. Query failures degrade to zeros rather than erroring.
pub async fn get_stats(State(state): State<AppState>) -> impl IntoResponse {
    let sources = sqlx::query("SELECT COUNT(*) AS cnt FROM sources")
        .fetch_one(&state.db)
        .await
        .map(|r| r.get::<i64, _>("cnt"))
        .unwrap_or(0);

    let directories = sqlx::query("SELECT COUNT(*) AS cnt FROM directories")
        .fetch_one(&state.db)
        .await
        .map(|r| r.get::<i64, _>("cnt"))
        .unwrap_or(0);

    let last_updated = sqlx::query("SELECT created_at FROM directories ORDER BY created_at DESC LIMIT 1")
        .fetch_optional(&state.db)
        .await
        .ok()
        .flatten()
        .map(|r| r.get::<String, _>("created_at"));

    Json(StatsResponse { sources, directories, last_updated })
}
