use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;
use sqlx::{QueryBuilder, Row};

use crate::{error::AppResult, state::AppState, types::DirectoryDto};

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    #[serde(default)]
    pub q: String,
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    100
}

const LIKE_ESCAPE: char = '!';

fn escape_like_pattern(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            out.push(LIKE_ESCAPE);
        }
        out.push(ch);
    }
    out
}

/// Substring search over directory names. The query is split on whitespace
/// and every term must match (AND semantics); SQLite's LIKE is
/// case-insensitive for ASCII.
pub async fn search_directories(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Response> {
    let terms: Vec<&str> = query.q.split_whitespace().collect();
    if terms.is_empty() {
        return Ok(Json(Vec::<DirectoryDto>::new()).into_response());
    }

    // Clamp limit to a safe range to prevent overly large responses
    let limit = query.limit.clamp(1, 1000);

    let mut qb =
        QueryBuilder::new("SELECT id, source_id, name, path, original_link, created_at FROM directories");
    let mut first = true;
    for term in terms {
        qb.push(if first { " WHERE " } else { " AND " });
        first = false;
        qb.push("name LIKE ")
            .push_bind(format!("%{}%", escape_like_pattern(term)))
            .push(" ESCAPE '!'");
    }
    qb.push(" ORDER BY name ASC LIMIT ").push_bind(limit);

    let rows = qb.build().fetch_all(&state.db).await?;
    let items: Vec<DirectoryDto> = rows
        .into_iter()
        .map(|r| DirectoryDto {
            id: r.get::<i64, _>("id"),
            source_id: r.get::<i64, _>("source_id"),
            name: r.get::<String, _>("name"),
            path: r.get::<String, _>("path"),
            original_link: r.get::<String, _>("original_link"),
            created_at: r.get::<String, _>("created_at"),
        })
        .collect();

    Ok(Json(items).into_response())
}
