use crate::config::{ensure_sqlite_parent_dir, AppConfig, CrawlerConfig, IndexerConfig};

#[test]
fn embedded_defaults_parse() {
    let cfg = AppConfig::default();
    assert_eq!(cfg.server.host, "127.0.0.1");
    assert_eq!(cfg.server.port, 8080);
    assert!(cfg.database.url.starts_with("sqlite://"));
    assert_eq!(cfg.crawler.fetch_timeout_secs, 10);
    assert_eq!(cfg.indexer.batch_size, 1000);
}

#[test]
fn struct_defaults_mirror_embedded_toml() {
    let embedded = AppConfig::default();
    assert_eq!(IndexerConfig::default().batch_size, embedded.indexer.batch_size);
    assert_eq!(CrawlerConfig::default().fetch_timeout_secs, embedded.crawler.fetch_timeout_secs);
}

#[test]
fn default_user_agent_is_not_empty() {
    assert!(!CrawlerConfig::default().user_agent.trim().is_empty());
}

#[test]
fn ensure_sqlite_parent_dir_creates_missing_directories() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("deep").join("test.db");
    let url = format!("sqlite://{}", db_path.display());

    ensure_sqlite_parent_dir(&url).unwrap();
    assert!(db_path.parent().unwrap().is_dir());
}

#[test]
fn non_sqlite_urls_are_left_alone() {
    ensure_sqlite_parent_dir("postgres://localhost/db").unwrap();
}
