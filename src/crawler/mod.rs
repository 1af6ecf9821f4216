//! Crawl orchestration.
//!
//! `run_crawl` owns the whole lifecycle of a crawl: validate configuration,
//! initialize shared resources, seed the root task, wait for the traversal
//! to quiesce, and package the ledger snapshot into a report. The per-URL
//! state machine lives in [`task`]; everything here is fan-out plumbing.

mod events;
mod task;

pub use events::{CrawlEvent, EventCallback, SkipReason};

use std::collections::BTreeMap;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use log::info;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::app::{log_progress, print_error_statistics, shutdown_gracefully};
use crate::config::{Config, PROGRESS_LOG_INTERVAL_SECS};
use crate::error_handling::CrawlStats;
use crate::initialization::{init_client, init_semaphore};
use crate::ledger::VisitationLedger;
use crate::models::PageRecord;
use crate::normalize::NormalizedUrl;

use task::crawl_page;

/// Shared dependencies handed to every crawl task.
///
/// Passed explicitly as `Arc<CrawlContext>` rather than held as globals, so
/// tests can substitute any piece. No state outside this struct is shared
/// between tasks.
pub(crate) struct CrawlContext {
    /// Lowercased host of the base URL; the crawl never leaves it
    pub base_host: String,
    /// Shared HTTP client (fixed User-Agent and timeout)
    pub client: reqwest::Client,
    /// Visitation ledger providing the exactly-once guarantee
    pub ledger: VisitationLedger,
    /// Permit pool bounding simultaneous fetches
    pub semaphore: Arc<Semaphore>,
    /// Error and skip counters
    pub stats: Arc<CrawlStats>,
    /// Count of pages fetched and recorded
    pub completed_pages: Arc<AtomicUsize>,
    /// Count of pages whose fetch failed
    pub failed_pages: Arc<AtomicUsize>,
    /// Optional structured event sink
    pub events: EventCallback,
    /// Cancellation signal observed at every suspension point
    pub cancel: CancellationToken,
}

impl CrawlContext {
    /// Emits a structured event if a sink is subscribed.
    pub(crate) fn emit(&self, event: CrawlEvent) {
        if let Some(callback) = &self.events {
            callback(event);
        }
    }
}

/// Results of a completed crawl.
///
/// Contains the page snapshot and summary statistics. The snapshot holds
/// only pages that were fetched and extracted; URLs whose fetch failed are
/// visible through `fetch_failures`, not through `pages`.
#[derive(Debug, Clone)]
pub struct CrawlReport {
    /// The base URL the crawl was seeded with
    pub base_url: String,
    /// Completed pages keyed by normalized URL, sorted
    pub pages: BTreeMap<NormalizedUrl, PageRecord>,
    /// Number of pages fetched and recorded (equals `pages.len()`)
    pub pages_crawled: usize,
    /// Number of per-URL fetch failures (network, HTTP status, content type)
    pub fetch_failures: usize,
    /// Number of URLs skipped without a fetch (off-domain, duplicate, unparsable)
    pub pages_skipped: usize,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Crawls a site starting from the configured base URL.
///
/// This is the main entry point for the library. It traverses every page
/// reachable from the base URL without leaving its host, fetching at most
/// `max_concurrency` pages at a time, and returns the accumulated page data.
///
/// Per-URL failures never surface here: the crawl always completes with
/// partial results, and failures are reported through logs, events, and the
/// report's counters.
///
/// # Errors
///
/// Fails only on configuration errors detected before any task starts:
/// - the base URL does not parse, has no host, or is not http(s)
/// - `max_concurrency` is zero
/// - the HTTP client cannot be constructed
///
/// # Example
///
/// ```no_run
/// use site_crawler::{run_crawl, Config};
///
/// # async fn example() -> anyhow::Result<()> {
/// let config = Config {
///     base_url: "https://example.com".to_string(),
///     ..Default::default()
/// };
/// let report = run_crawl(config).await?;
/// println!("crawled {} pages", report.pages_crawled);
/// # Ok(())
/// # }
/// ```
pub async fn run_crawl(config: Config) -> Result<CrawlReport> {
    let base = Url::parse(&config.base_url)
        .with_context(|| format!("invalid base URL: {}", config.base_url))?;
    if !matches!(base.scheme(), "http" | "https") {
        bail!(
            "unsupported scheme '{}' in base URL: {}",
            base.scheme(),
            config.base_url
        );
    }
    let base_host = base
        .host_str()
        .with_context(|| format!("base URL has no host: {}", config.base_url))?
        .to_lowercase();
    if config.max_concurrency == 0 {
        bail!("max_concurrency must be at least 1");
    }

    let client = init_client(&config).context("Failed to initialize HTTP client")?;
    let semaphore = init_semaphore(config.max_concurrency);
    let stats = Arc::new(CrawlStats::new());
    let completed_pages = Arc::new(AtomicUsize::new(0));
    let failed_pages = Arc::new(AtomicUsize::new(0));
    let cancel = config.cancel.clone().unwrap_or_default();

    info!(
        "Starting crawl of {} (max concurrency: {})",
        config.base_url, config.max_concurrency
    );

    let start_time = std::time::Instant::now();

    // Periodic progress line, shut down once the traversal quiesces
    let logging_token = CancellationToken::new();
    let logging_child = logging_token.child_token();
    let completed_for_logging = Arc::clone(&completed_pages);
    let failed_for_logging = Arc::clone(&failed_pages);
    let logging_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(PROGRESS_LOG_INTERVAL_SECS));
        loop {
            tokio::select! {
                _ = interval.tick() => {
                    log_progress(start_time, &completed_for_logging, &failed_for_logging);
                }
                _ = logging_child.cancelled() => {
                    break;
                }
            }
        }
    });

    let ctx = Arc::new(CrawlContext {
        base_host,
        client,
        ledger: VisitationLedger::new(),
        semaphore,
        stats: Arc::clone(&stats),
        completed_pages: Arc::clone(&completed_pages),
        failed_pages: Arc::clone(&failed_pages),
        events: config.event_callback.clone(),
        cancel,
    });

    // The root task completes exactly when every descendant task has; this
    // await is the whole crawl
    crawl_page(Arc::clone(&ctx), config.base_url.clone()).await;

    shutdown_gracefully(logging_token, Some(logging_task)).await;
    log_progress(start_time, &completed_pages, &failed_pages);
    print_error_statistics(&stats);

    let pages = ctx.ledger.snapshot().await;
    let elapsed_seconds = start_time.elapsed().as_secs_f64();
    let pages_crawled = pages.len();

    Ok(CrawlReport {
        base_url: config.base_url,
        pages,
        pages_crawled,
        fetch_failures: stats.total_errors(),
        pages_skipped: stats.total_skips(),
        elapsed_seconds,
    })
}
