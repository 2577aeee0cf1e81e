use crate::status::{IndexingHandle, LOG_CAPACITY};

#[test]
fn begin_run_resets_previous_state() {
    let handle = IndexingHandle::new();
    handle.begin_run();
    handle.set_current_source("old");
    handle.record_progress(42, "http://x/old/");
    handle.finish_run();

    handle.begin_run();
    let s = handle.snapshot();
    assert!(s.is_running);
    assert!(s.current_source.is_empty());
    assert!(s.current_path.is_empty());
    assert_eq!(s.directories_found, 0);
    assert!(s.logs.is_empty());
}

#[test]
fn finish_run_keeps_counter_and_logs_visible() {
    let handle = IndexingHandle::new();
    handle.begin_run();
    handle.set_current_source("mirror");
    handle.record_progress(7, "http://x/sub/");
    handle.log("Indexing completed");
    handle.finish_run();

    let s = handle.snapshot();
    assert!(!s.is_running);
    assert!(s.current_source.is_empty());
    assert!(s.current_path.is_empty());
    assert_eq!(s.directories_found, 7);
    assert_eq!(s.logs.len(), 2);
}

#[test]
fn log_is_capped_and_keeps_most_recent_in_order() {
    let handle = IndexingHandle::new();
    handle.begin_run();
    for i in 0..120 {
        handle.log(format!("line {}", i));
    }

    let s = handle.snapshot();
    assert_eq!(s.logs.len(), LOG_CAPACITY);
    assert_eq!(s.logs.first().unwrap(), "line 70");
    assert_eq!(s.logs.last().unwrap(), "line 119");
}

#[test]
fn record_progress_appends_a_crawl_log_line() {
    let handle = IndexingHandle::new();
    handle.begin_run();
    handle.record_progress(3, "http://x/sub1/");

    let s = handle.snapshot();
    assert_eq!(s.directories_found, 3);
    assert_eq!(s.current_path, "http://x/sub1/");
    assert_eq!(s.logs, vec!["Crawling: http://x/sub1/".to_string()]);
}

#[test]
fn snapshot_serializes_with_expected_field_names() {
    let handle = IndexingHandle::new();
    let value = serde_json::to_value(handle.snapshot()).unwrap();
    for key in ["is_running", "current_source", "current_path", "directories_found", "logs"] {
        assert!(value.get(key).is_some(), "missing field {}", key);
    }
}

#[test]
fn handle_clones_share_state() {
    let handle = IndexingHandle::new();
    let clone = handle.clone();
    handle.begin_run();
    assert!(clone.is_running());
    clone.finish_run();
    assert!(!handle.is_running());
}
