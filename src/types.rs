use serde::{Deserialize, Serialize};

/// A registered seed site whose listing pages get crawled.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub id: i64,
    pub label: String,
    pub url: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSourceRequest {
    pub label: String,
    pub url: String,
}

/// A subdirectory discovered during one crawl run of one source.
///
/// `original_link` is the fully resolved absolute URL and always starts with
/// the seed URL of the owning source. Rows are keyed by `(source_id, path)`;
/// a re-crawl replaces rather than duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRecord {
    pub source_id: i64,
    pub name: String,
    pub path: String,
    pub original_link: String,
}

/// A persisted directory row as returned by the search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectoryDto {
    pub id: i64,
    pub source_id: i64,
    pub name: String,
    pub path: String,
    pub original_link: String,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatsResponse {
    pub sources: i64,
    pub directories: i64,
    pub last_updated: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthSetupRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthLoginRequest {
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthStatusResponse {
    pub configured: bool,
}
