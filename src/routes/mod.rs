//! HTTP route handlers for the Pfadfinder API.
//!
//! - `auth`: admin password setup and login
//! - `health`: health checks, metrics and build info
//! - `indexing`: background indexing trigger and status
//! - `search`: directory name search over the indexed corpus
//! - `sources`: seed-site CRUD
//! - `stats`: corpus statistics

pub mod auth;
pub mod health;
pub mod indexing;
pub mod search;
pub mod sources;
pub mod stats;
