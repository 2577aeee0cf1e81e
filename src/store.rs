//! Persistence collaborator for the indexing run: source listing and batched
//! directory upserts. Route handlers with simple one-off queries talk to the
//! pool directly; the orchestrator goes through this module.

use sqlx::{QueryBuilder, Row, SqlitePool};

use crate::types::{DirectoryRecord, Source};

pub async fn list_sources(pool: &SqlitePool) -> Result<Vec<Source>, sqlx::Error> {
    let rows = sqlx::query("SELECT id, label, url, created_at FROM sources ORDER BY id ASC")
        .fetch_all(pool)
        .await?;

    Ok(rows
        .into_iter()
        .map(|r| Source {
            id: r.get::<i64, _>("id"),
            label: r.get::<String, _>("label"),
            url: r.get::<String, _>("url"),
            created_at: r.get::<String, _>("created_at"),
        })
        .collect())
}

/// Upserts one batch of directory records inside a single transaction.
///
/// Rows are keyed by `(source_id, path)`: a conflicting row is replaced, so
/// re-crawling a source never duplicates directories. Statements are chunked
/// to respect SQLite's bound-variable limit (commonly 999); each row consumes
/// a fixed number of parameters.
pub async fn upsert_directories(pool: &SqlitePool, batch: &[DirectoryRecord]) -> Result<(), sqlx::Error> {
    if batch.is_empty() {
        return Ok(());
    }

    const SQLITE_MAX_VARS: usize = 999;
    const BINDS_PER_ROW: usize = 4; // source_id, name, path, original_link
    let rows_per_stmt = SQLITE_MAX_VARS / BINDS_PER_ROW;

    let mut tx = pool.begin().await?;
    for chunk in batch.chunks(rows_per_stmt) {
        let mut qb = QueryBuilder::new("INSERT INTO directories (source_id, name, path, original_link) ");
        qb.push_values(chunk, |mut b, d| {
            b.push_bind(d.source_id).push_bind(&d.name).push_bind(&d.path).push_bind(&d.original_link);
        });
        qb.push(
            " ON CONFLICT(source_id, path) DO UPDATE SET \
             name = excluded.name, original_link = excluded.original_link",
        );
        qb.build().execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}
