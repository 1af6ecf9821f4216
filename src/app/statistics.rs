//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{CrawlStats, ErrorType, SkipType};

/// Prints error and skip statistics to the log.
///
/// Called once after the crawl quiesces; only nonzero counters are shown.
pub fn print_error_statistics(stats: &CrawlStats) {
    let total_errors = stats.total_errors();
    let total_skips = stats.total_skips();

    if total_errors > 0 {
        info!("Fetch failures ({} total):", total_errors);
        for error_type in ErrorType::iter() {
            let count = stats.get_error_count(error_type);
            if count > 0 {
                info!("   {}: {}", error_type.as_str(), count);
            }
        }
    }

    if total_skips > 0 {
        info!("Skipped URLs ({} total):", total_skips);
        for skip_type in SkipType::iter() {
            let count = stats.get_skip_count(skip_type);
            if count > 0 {
                info!("   {}: {}", skip_type.as_str(), count);
            }
        }
    }
}
