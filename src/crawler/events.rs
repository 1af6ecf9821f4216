//! Structured crawl progress events.
//!
//! The core emits events, not formatted text: any sink (CLI printer, test
//! collector, metrics shipper) can subscribe through the callback without
//! the crawler knowing how the events are rendered.

use std::sync::Arc;

/// Why a URL was skipped without being fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The URL's host differs from the base URL's host
    OffDomain,
}

/// A progress event emitted by the crawl orchestrator.
#[derive(Debug, Clone)]
pub enum CrawlEvent {
    /// A task acquired a permit and is about to fetch the URL.
    Fetching {
        /// The URL being fetched
        url: String,
    },
    /// A page was fetched, extracted, and recorded.
    Crawled {
        /// The URL that was fetched
        url: String,
        /// Number of outgoing links found on the page
        links: usize,
        /// Number of image URLs found on the page
        images: usize,
    },
    /// A fetch failed; the URL is skipped for the rest of the run.
    FetchFailed {
        /// The URL whose fetch failed
        url: String,
        /// Human-readable failure description
        error: String,
    },
    /// A URL was skipped without touching the network.
    Skipped {
        /// The URL that was skipped
        url: String,
        /// Why it was skipped
        reason: SkipReason,
    },
}

/// Type alias for the optional crawl event callback.
///
/// The callback is invoked synchronously from crawl tasks, so it should be
/// cheap; hand anything expensive off to a channel.
pub type EventCallback = Option<Arc<dyn Fn(CrawlEvent) + Send + Sync>>;
