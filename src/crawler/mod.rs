//! Crawl engine: breadth-first traversal of a site's directory-listing
//! hierarchy starting from a seed URL.

use std::collections::{HashSet, VecDeque};
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use crate::types::DirectoryRecord;

pub mod classify;

/// Crawls the listing hierarchy under `seed_url` and returns every discovered
/// subdirectory, in discovery order.
///
/// Traversal is breadth-first over a FIFO frontier seeded with `seed_url`.
/// A URL may be enqueued more than once; the visited-check at dequeue time is
/// the single source of truth for dedup. `on_progress` is invoked with
/// `(count_so_far, current_url)` before each fetch, so progress reflects
/// work-in-progress rather than completion.
///
/// Failures are handled per URL: a network error, timeout or non-200 status
/// abandons that URL and the crawl continues with the remaining frontier.
/// Nothing short of frontier exhaustion ends the crawl.
pub async fn crawl(
    client: &reqwest::Client,
    source_id: i64,
    seed_url: &str,
    fetch_timeout: Duration,
    mut on_progress: impl FnMut(u64, &str),
) -> Vec<DirectoryRecord> {
    let mut found: Vec<DirectoryRecord> = Vec::new();
    let mut visited: HashSet<String> = HashSet::new();
    let mut frontier: VecDeque<String> = VecDeque::new();
    frontier.push_back(seed_url.to_string());

    while let Some(curr) = frontier.pop_front() {
        if visited.contains(&curr) {
            continue;
        }
        visited.insert(curr.clone());

        on_progress(found.len() as u64, &curr);
        debug!("Crawling listing page: {}", curr);

        let response = match client.get(&curr).timeout(fetch_timeout).send().await {
            Ok(r) => r,
            Err(e) => {
                warn!("Error crawling {}: {}", curr, e);
                continue;
            }
        };
        if response.status() != reqwest::StatusCode::OK {
            debug!("Skipping {} (status {})", curr, response.status());
            continue;
        }
        let body = match response.text().await {
            Ok(b) => b,
            Err(e) => {
                warn!("Error reading body of {}: {}", curr, e);
                continue;
            }
        };

        // The frontier holds resolved absolute URLs, so this parse only fails
        // for a malformed seed; that URL is abandoned like any other failure.
        let base = match Url::parse(&curr) {
            Ok(u) => u,
            Err(e) => {
                warn!("Unparseable URL {}: {}", curr, e);
                continue;
            }
        };

        for link in classify::classify(seed_url, &base, &body) {
            frontier.push_back(link.url.clone());
            found.push(DirectoryRecord {
                source_id,
                name: link.name,
                path: link.path,
                original_link: link.url,
            });
        }
    }

    found
}
