//! Configuration constants.
//!
//! Defaults and operational parameters used throughout the crawler. All of
//! these can be overridden from the CLI where a matching flag exists.

// constants (used as defaults)
/// Maximum concurrent page fetches (semaphore limit).
/// Kept deliberately small: a recursive crawl hammers a single host, so the
/// polite default matters more than throughput.
pub const DEFAULT_MAX_CONCURRENCY: usize = 5;

/// Per-request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 10;

/// Interval between progress log lines, in seconds.
pub const PROGRESS_LOG_INTERVAL_SECS: u64 = 5;

/// Default path of the CSV report written by the CLI.
pub const DEFAULT_REPORT_PATH: &str = "report.csv";

/// Delimiter used to join list columns (outgoing links, image URLs) in the
/// CSV report.
pub const REPORT_LIST_DELIMITER: &str = ";";

/// Default User-Agent string for HTTP requests.
///
/// Identifies the crawler honestly so site operators can attribute the
/// traffic. Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str = concat!("site_crawler/", env!("CARGO_PKG_VERSION"));
