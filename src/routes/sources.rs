use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sqlx::Row;

use crate::{
    error::{AppError, AppResult},
    state::AppState,
    store,
    types::{CreateSourceRequest, Source},
};

pub async fn list_sources(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let sources = store::list_sources(&state.db).await?;
    Ok(Json(sources))
}

pub async fn create_source(
    State(state): State<AppState>,
    Json(req): Json<CreateSourceRequest>,
) -> AppResult<impl IntoResponse> {
    let label = req.label.trim();
    let url = req.url.trim();
    if label.is_empty() {
        return Err(AppError::InvalidInput("label must not be empty".into()));
    }
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(AppError::InvalidInput("url must start with http:// or https://".into()));
    }

    let res = sqlx::query("INSERT INTO sources (label, url) VALUES (?1, ?2)")
        .bind(label)
        .bind(url)
        .execute(&state.db)
        .await?;
    let id = res.last_insert_rowid();

    let row = sqlx::query("SELECT id, label, url, created_at FROM sources WHERE id = ?1")
        .bind(id)
        .fetch_one(&state.db)
        .await?;
    let source = Source {
        id: row.get::<i64, _>("id"),
        label: row.get::<String, _>("label"),
        url: row.get::<String, _>("url"),
        created_at: row.get::<String, _>("created_at"),
    };

    Ok((StatusCode::CREATED, Json(source)))
}

pub async fn delete_source(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<impl IntoResponse> {
    // Cascades to the source's directories (foreign key)
    let res = sqlx::query("DELETE FROM sources WHERE id = ?1").bind(id).execute(&state.db).await?;
    if res.rows_affected() == 0 {
        return Err(AppError::NotFound("source not found".into()));
    }
    Ok(StatusCode::NO_CONTENT)
}
