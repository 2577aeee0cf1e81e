//! # Pfadfinder Backend Library
//!
//! Core library for Pfadfinder, a service that discovers publicly browsable
//! directory-listing pages (Apache/Nginx autoindex) and makes the discovered
//! directory paths searchable by name.
//!
//! ## Architecture
//!
//! The application is built using:
//! - **Axum**: Web framework for the HTTP server and routing
//! - **SQLx**: Asynchronous database operations with SQLite
//! - **Tokio**: Async runtime for the background indexing task
//! - **Reqwest/Scraper**: HTTP fetching and HTML link extraction
//!
//! ## Core Components
//!
//! - [`config`]: Application configuration management
//! - [`crawler`]: Listing-page traversal and link classification
//! - [`db`]: Database schema initialization
//! - [`error`]: Centralized error handling and HTTP error responses
//! - [`indexer`]: Background indexing run over all registered sources
//! - [`metrics`]: Run counters and operational metrics
//! - [`routes`]: HTTP API endpoint handlers
//! - [`state`]: Shared application state
//! - [`status`]: Observable state of the active indexing run
//! - [`store`]: Source listing and batched directory upserts
//! - [`types`]: Data transfer objects and shared type definitions

pub mod config;
pub mod crawler;
pub mod db;
pub mod error;
pub mod indexer;
pub mod metrics;
pub mod routes;
pub mod state;
pub mod status;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
