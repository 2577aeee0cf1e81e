use serde::Serialize;
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;

/// Operational counters for monitoring
#[derive(Clone)]
pub struct Metrics {
    pub runs_started: Arc<AtomicUsize>,
    pub runs_completed: Arc<AtomicUsize>,
    pub runs_failed: Arc<AtomicUsize>,
    pub sources_indexed: Arc<AtomicU64>,
    pub directories_indexed: Arc<AtomicU64>,
    pub start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            runs_started: Arc::new(AtomicUsize::new(0)),
            runs_completed: Arc::new(AtomicUsize::new(0)),
            runs_failed: Arc::new(AtomicUsize::new(0)),
            sources_indexed: Arc::new(AtomicU64::new(0)),
            directories_indexed: Arc::new(AtomicU64::new(0)),
            start_time: Instant::now(),
        }
    }

    pub fn inc_runs_started(&self) {
        self.runs_started.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_runs_completed(&self) {
        self.runs_completed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_runs_failed(&self) {
        self.runs_failed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn inc_sources_indexed(&self) {
        self.sources_indexed.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_directories(&self, count: u64) {
        self.directories_indexed.fetch_add(count, Ordering::Relaxed);
    }

    pub fn get_snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            runs_started: self.runs_started.load(Ordering::Relaxed),
            runs_completed: self.runs_completed.load(Ordering::Relaxed),
            runs_failed: self.runs_failed.load(Ordering::Relaxed),
            sources_indexed: self.sources_indexed.load(Ordering::Relaxed),
            directories_indexed: self.directories_indexed.load(Ordering::Relaxed),
            uptime_seconds: self.start_time.elapsed().as_secs(),
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Serializable snapshot of metrics
#[derive(Debug, Clone, Serialize)]
pub struct MetricsSnapshot {
    pub runs_started: usize,
    pub runs_completed: usize,
    pub runs_failed: usize,
    pub sources_indexed: u64,
    pub directories_indexed: u64,
    pub uptime_seconds: u64,
}
