//! Data models for crawled pages.

use serde::Serialize;

/// Structured data extracted from one fetched page.
///
/// A `PageRecord` is immutable once created: the orchestrator builds it from
/// the fetched HTML, stores it in the ledger, and nothing mutates it
/// afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageRecord {
    /// The URL the page was fetched from, as originally requested.
    pub url: String,
    /// Text of the first `<h1>` in document order, or `""` if the page has none.
    pub h1: String,
    /// Text of the first paragraph, preferring one nested under `<main>`,
    /// or `""` if the page has no paragraphs.
    pub first_paragraph: String,
    /// Absolute URLs of every anchor with an href, in document order.
    pub outgoing_links: Vec<String>,
    /// Absolute URLs of every image with a src, in document order.
    pub image_urls: Vec<String>,
}
