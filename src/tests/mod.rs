//! Integration and unit tests for the Pfadfinder application.
//!
//! ## Test Modules
//!
//! - **classify_tests**: Link classification rules on raw autoindex markup
//! - **crawler_tests**: Crawl engine traversal against stubbed HTTP servers
//! - **indexer_tests**: Full indexing runs including failure paths
//! - **status_tests**: Indexing status lifecycle and log capping
//! - **store_tests**: Batched directory upserts and source listing
//! - **db_tests**: Schema initialization and constraints
//! - **config_tests**: Configuration defaults and helpers
//! - **api_tests**: HTTP API endpoints end to end

pub mod config_tests;
pub mod db_tests;
pub mod status_tests;
