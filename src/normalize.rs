//! URL normalization for visitation deduplication.

use std::fmt;

use serde::Serialize;
use url::Url;

/// Canonical deduplication key for a URL.
///
/// The key is lowercase host + path with the scheme, query, fragment, and a
/// trailing slash stripped, so URLs that differ only in those components map
/// to the same key. Path case is preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct NormalizedUrl(String);

impl NormalizedUrl {
    /// Returns the canonical key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalizes a URL into its canonical deduplication key.
///
/// Never fails: normalization classifies URLs, it does not validate them.
/// Input the URL parser rejects degrades to a best-effort key (scheme prefix
/// dropped, query and fragment dropped, host portion lowercased) so that
/// malformed hrefs still deduplicate consistently.
pub fn normalize_url(url: &str) -> NormalizedUrl {
    let key = match Url::parse(url) {
        Ok(parsed) => {
            // The url crate already lowercases registered domain names.
            let host = parsed.host_str().unwrap_or_default();
            let path = parsed.path();
            let path = path.strip_suffix('/').unwrap_or(path);
            format!("{host}{path}")
        }
        Err(_) => best_effort_key(url),
    };
    NormalizedUrl(key)
}

/// Fallback key derivation for input the URL parser rejects.
fn best_effort_key(url: &str) -> String {
    let without_scheme = url.split_once("://").map_or(url, |(_, rest)| rest);
    let without_query = without_scheme
        .split(['?', '#'])
        .next()
        .unwrap_or_default();
    let trimmed = without_query.strip_suffix('/').unwrap_or(without_query);
    match trimmed.split_once('/') {
        Some((host, path)) => format!("{}/{}", host.to_lowercase(), path),
        None => trimmed.to_lowercase(),
    }
}
