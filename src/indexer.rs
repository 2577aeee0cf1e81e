//! Indexing orchestrator: one background run over all registered sources.
//!
//! Sources are crawled sequentially, never interleaved. Crawl-level failures
//! are swallowed inside the engine; a persistence failure aborts the rest of
//! the run. Status cleanup is guaranteed on success and failure alike.

use std::time::Duration;

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::crawler;
use crate::metrics::Metrics;
use crate::status::IndexingHandle;
use crate::store;

/// Runs one full indexing pass over all known sources.
///
/// Intended to run as a single fire-and-forget background task; the caller is
/// responsible for not starting a second run while one is active. On return
/// the status is back to idle, with the final counter and logs still visible.
pub async fn run_indexing(
    db: SqlitePool,
    client: reqwest::Client,
    status: IndexingHandle,
    metrics: Metrics,
    fetch_timeout: Duration,
    batch_size: usize,
) {
    status.begin_run();
    status.log("Starting background indexer");
    info!("Starting background indexer");
    metrics.inc_runs_started();

    match index_all_sources(&db, &client, &status, &metrics, fetch_timeout, batch_size).await {
        Ok(()) => {
            info!("Indexing completed");
            status.log("Indexing completed");
            metrics.inc_runs_completed();
        }
        Err(e) => {
            warn!("Indexer failed: {:#}", e);
            status.log(format!("Indexer failed: {}", e));
            metrics.inc_runs_failed();
        }
    }

    status.finish_run();
}

async fn index_all_sources(
    db: &SqlitePool,
    client: &reqwest::Client,
    status: &IndexingHandle,
    metrics: &Metrics,
    fetch_timeout: Duration,
    batch_size: usize,
) -> anyhow::Result<()> {
    let sources = store::list_sources(db).await?;

    for src in sources {
        info!("Indexing source: {}", src.label);
        status.set_current_source(&src.label);
        status.log(format!("Indexing source: {}", src.label));

        let directories = crawler::crawl(client, src.id, &src.url, fetch_timeout, |count, url| {
            status.record_progress(count, url);
        })
        .await;

        if !directories.is_empty() {
            info!("Found {} directories for {}. Upserting...", directories.len(), src.label);
            status.log(format!("Found {} directories. Upserting...", directories.len()));

            // Fixed-size batches bound memory and statement size for very
            // large sites; a failed upsert aborts the remainder of the run.
            for batch in directories.chunks(batch_size.max(1)) {
                store::upsert_directories(db, batch).await?;
            }
            metrics.add_directories(directories.len() as u64);
        }
        metrics.inc_sources_indexed();
    }

    Ok(())
}
