use std::collections::VecDeque;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;

/// Maximum number of log lines retained per run. Oldest lines are evicted
/// first once the cap is reached.
pub const LOG_CAPACITY: usize = 50;

/// Snapshot of the indexing run state, as exposed by `GET /index/status`.
#[derive(Debug, Clone, Serialize)]
pub struct IndexingStatus {
    pub is_running: bool,
    pub current_source: String,
    pub current_path: String,
    pub directories_found: u64,
    pub logs: Vec<String>,
}

#[derive(Debug, Default)]
struct StatusInner {
    is_running: bool,
    current_source: String,
    current_path: String,
    directories_found: u64,
    logs: VecDeque<String>,
}

/// Owned, thread-safe handle to the process-wide indexing status.
///
/// Written only by the orchestrator while a run is active; read by the status
/// endpoint as a cloned snapshot. Readers may observe a value mid-update;
/// eventually-consistent reads are acceptable for this domain.
#[derive(Clone, Default)]
pub struct IndexingHandle {
    inner: Arc<RwLock<StatusInner>>,
}

impl IndexingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    // A writer panicking mid-update leaves the lock poisoned; the state itself
    // stays structurally valid, so poisoned guards are recovered.
    fn write(&self) -> RwLockWriteGuard<'_, StatusInner> {
        self.inner.write().unwrap_or_else(|e| e.into_inner())
    }

    fn read(&self) -> RwLockReadGuard<'_, StatusInner> {
        self.inner.read().unwrap_or_else(|e| e.into_inner())
    }

    /// Resets the status to a fresh running state at the start of a run.
    pub fn begin_run(&self) {
        let mut s = self.write();
        s.is_running = true;
        s.current_source.clear();
        s.current_path.clear();
        s.directories_found = 0;
        s.logs.clear();
    }

    /// Returns the status to idle. Counter and logs of the finished run stay
    /// visible until the next run resets them.
    pub fn finish_run(&self) {
        let mut s = self.write();
        s.is_running = false;
        s.current_source.clear();
        s.current_path.clear();
    }

    pub fn is_running(&self) -> bool {
        self.read().is_running
    }

    pub fn set_current_source(&self, label: &str) {
        self.write().current_source = label.to_string();
    }

    /// Progress callback target for the crawl engine: updates the running
    /// count and current path, and appends a capped log line.
    pub fn record_progress(&self, count: u64, url: &str) {
        let mut s = self.write();
        s.directories_found = count;
        s.current_path = url.to_string();
        push_capped(&mut s.logs, format!("Crawling: {}", url));
    }

    pub fn log(&self, line: impl Into<String>) {
        push_capped(&mut self.write().logs, line.into());
    }

    pub fn snapshot(&self) -> IndexingStatus {
        let s = self.read();
        IndexingStatus {
            is_running: s.is_running,
            current_source: s.current_source.clone(),
            current_path: s.current_path.clone(),
            directories_found: s.directories_found,
            logs: s.logs.iter().cloned().collect(),
        }
    }
}

fn push_capped(logs: &mut VecDeque<String>, line: String) {
    while logs.len() >= LOG_CAPACITY {
        logs.pop_front();
    }
    logs.push_back(line);
}
