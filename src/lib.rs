//! site_crawler library: concurrent site crawling functionality
//!
//! This library crawls every page of a single site reachable from a base
//! URL, with bounded fetch concurrency and exactly-once visitation per
//! normalized URL, and accumulates per-page data (first heading, first
//! paragraph, outgoing links, image URLs) for reporting.
//!
//! # Example
//!
//! ```no_run
//! use site_crawler::{run_crawl, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     base_url: "https://example.com".to_string(),
//!     max_concurrency: 3,
//!     ..Default::default()
//! };
//!
//! let report = run_crawl(config).await?;
//! println!(
//!     "Crawled {} pages ({} fetches failed)",
//!     report.pages_crawled, report.fetch_failures
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your
//! application or ensure you're calling library functions within an async
//! context.

#![warn(missing_docs)]

mod app;
pub mod config;
mod crawler;
mod error_handling;
pub mod export;
mod fetch;
pub mod initialization;
mod ledger;
mod models;
mod normalize;
mod parse;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel, Opt};
pub use crawler::{run_crawl, CrawlEvent, CrawlReport, EventCallback, SkipReason};
pub use error_handling::{CrawlStats, ErrorType, FetchError, SkipType};
pub use fetch::fetch_html;
pub use ledger::VisitationLedger;
pub use models::PageRecord;
pub use normalize::{normalize_url, NormalizedUrl};
pub use parse::{
    extract_first_paragraph, extract_h1, extract_images, extract_links, extract_page_data,
};
