//! Error taxonomy and crawl statistics.
//!
//! Per-URL failures are contained within the task that owns the URL: they are
//! logged, counted, and never abort siblings or the crawl. Only
//! initialization errors (detected before any task starts) are fatal.

mod stats;
mod types;

pub use stats::CrawlStats;
pub use types::{ErrorType, FetchError, InitializationError, SkipType};
