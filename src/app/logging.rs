//! Progress logging utilities.

use log::info;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Logs progress information about the running crawl.
///
/// # Arguments
///
/// * `start_time` - The start time of the crawl
/// * `completed_pages` - Atomic counter of pages fetched and recorded
/// * `failed_pages` - Atomic counter of pages whose fetch failed
pub fn log_progress(
    start_time: std::time::Instant,
    completed_pages: &Arc<AtomicUsize>,
    failed_pages: &Arc<AtomicUsize>,
) {
    let elapsed_secs = start_time.elapsed().as_secs_f64();
    let completed = completed_pages.load(Ordering::SeqCst);
    let failed = failed_pages.load(Ordering::SeqCst);
    let rate = if elapsed_secs > 0.0 {
        completed as f64 / elapsed_secs
    } else {
        0.0
    };
    info!(
        "Crawled {} pages ({} failed) in {:.2} seconds (~{:.2} pages/sec)",
        completed, failed, elapsed_secs, rate
    );
}
