//! Crawl statistics tracking.
//!
//! This module provides thread-safe statistics tracking for per-URL errors
//! and skips during a crawl.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::{ErrorType, SkipType};

/// Thread-safe crawl statistics tracker.
///
/// Tracks fetch errors and traversal skips using atomic counters, allowing
/// concurrent access from every crawl task. All counters are initialized to
/// zero on creation, so incrementing never allocates.
///
/// # Thread Safety
///
/// This struct is thread-safe and is shared across tasks via `Arc`.
pub struct CrawlStats {
    errors: HashMap<ErrorType, AtomicUsize>,
    skips: HashMap<SkipType, AtomicUsize>,
}

impl CrawlStats {
    /// Creates a tracker with every counter initialized to zero.
    pub fn new() -> Self {
        let mut errors = HashMap::new();
        for error in ErrorType::iter() {
            errors.insert(error, AtomicUsize::new(0));
        }

        let mut skips = HashMap::new();
        for skip in SkipType::iter() {
            skips.insert(skip, AtomicUsize::new(0));
        }

        CrawlStats { errors, skips }
    }

    /// Increment an error counter.
    pub fn increment_error(&self, error: ErrorType) {
        if let Some(counter) = self.errors.get(&error) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment error counter for {:?} which is not in the map. \
                 This indicates a bug in CrawlStats initialization.",
                error
            );
        }
    }

    /// Increment a skip counter.
    pub fn increment_skip(&self, skip: SkipType) {
        if let Some(counter) = self.skips.get(&skip) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment skip counter for {:?} which is not in the map. \
                 This indicates a bug in CrawlStats initialization.",
                skip
            );
        }
    }

    /// Get the count for an error type.
    pub fn get_error_count(&self, error: ErrorType) -> usize {
        self.errors
            .get(&error)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get the count for a skip type.
    pub fn get_skip_count(&self, skip: SkipType) -> usize {
        self.skips
            .get(&skip)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total error count across all error types.
    pub fn total_errors(&self) -> usize {
        ErrorType::iter().map(|e| self.get_error_count(e)).sum()
    }

    /// Get total skip count across all skip types.
    pub fn total_skips(&self) -> usize {
        SkipType::iter().map(|s| self.get_skip_count(s)).sum()
    }
}

impl Default for CrawlStats {
    fn default() -> Self {
        Self::new()
    }
}
