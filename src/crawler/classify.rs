//! Link classification for autoindex pages.
//!
//! Given the raw HTML of one listing page, extracts the anchors that point at
//! subdirectories of the crawled site and discards everything else (files,
//! navigation artifacts, links escaping the seed site).

use scraper::{Html, Selector};
use url::Url;

/// An admissible directory link extracted from one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryLink {
    /// The directory's own name: the raw href with leading/trailing `/` stripped.
    pub name: String,
    /// URL path component of the resolved URL.
    pub path: String,
    /// Fully resolved absolute URL.
    pub url: String,
}

/// Extracts the admissible subdirectory links from `html`.
///
/// Rules, in order:
/// - anchors without an `href` are ignored;
/// - hrefs that are exactly `../`, `./` or `/` are navigation artifacts of
///   autoindex pages and are dropped;
/// - a link is a directory link iff its raw href ends with `/` (the
///   autoindex convention; files never do);
/// - the href is resolved against `base_url` and admitted only if the
///   resolved URL string starts with `seed_url`. This is a literal prefix
///   comparison, not a normalized path comparison; downstream data depends
///   on the literal semantics.
///
/// Malformed markup never fails: the parse is best-effort and simply yields
/// fewer or no links.
pub fn classify(seed_url: &str, base_url: &Url, html: &str) -> Vec<DirectoryLink> {
    let document = Html::parse_document(html);
    let anchors = match Selector::parse("a[href]") {
        Ok(s) => s,
        Err(_) => return Vec::new(),
    };

    let mut links = Vec::new();
    for element in document.select(&anchors) {
        let href = match element.value().attr("href") {
            Some(h) => h,
            None => continue,
        };

        // Parent/self navigation links common in listing indexes
        if matches!(href, "../" | "./" | "/") {
            continue;
        }

        // Directories end with '/', files do not. Files are never followed
        // or recorded.
        if !href.ends_with('/') {
            continue;
        }

        let resolved = match base_url.join(href) {
            Ok(u) => u,
            Err(_) => continue,
        };

        // Containment: never escape the seed site
        if !resolved.as_str().starts_with(seed_url) {
            continue;
        }

        let path = resolved.path().to_string();
        links.push(DirectoryLink {
            name: href.trim_matches('/').to_string(),
            path,
            url: resolved.into(),
        });
    }
    links
}
