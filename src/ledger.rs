//! Shared visitation ledger.
//!
//! The ledger is the crawl's single source of truth for "who owns which
//! URL". Tasks race `claim` on normalized keys; exactly one wins per key,
//! which is what makes each page fetched at most once per run.

use std::collections::hash_map::Entry;
use std::collections::{BTreeMap, HashMap};

use tokio::sync::Mutex;

use crate::models::PageRecord;
use crate::normalize::NormalizedUrl;

/// State of one normalized URL in the ledger.
#[derive(Debug, Clone)]
enum PageEntry {
    /// Claimed by a task; the fetch has not completed (or failed and will
    /// not be retried this run)
    Pending,
    /// Fetched and extracted
    Visited(PageRecord),
}

/// Mapping of normalized URLs to their crawl outcome, shared across tasks.
///
/// The ledger grows monotonically over a crawl session: entries are claimed,
/// then possibly completed, and never removed. `snapshot` is meant to be read
/// only after quiescence (every spawned task has finished).
#[derive(Debug, Default)]
pub struct VisitationLedger {
    entries: Mutex<HashMap<NormalizedUrl, PageEntry>>,
}

impl VisitationLedger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically claims a normalized URL for fetching.
    ///
    /// Returns `true` if the key was absent (the caller now owns fetching
    /// it), `false` if another task already claimed or completed it. For any
    /// set of tasks racing on the same key, exactly one sees `true`.
    pub async fn claim(&self, url: &NormalizedUrl) -> bool {
        let mut entries = self.entries.lock().await;
        match entries.entry(url.clone()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(PageEntry::Pending);
                true
            }
        }
    }

    /// Replaces the pending marker with the final page record.
    ///
    /// Single-writer per key by construction of [`claim`]: only the task
    /// that won the claim records here.
    ///
    /// [`claim`]: VisitationLedger::claim
    pub async fn record(&self, url: &NormalizedUrl, record: PageRecord) {
        let mut entries = self.entries.lock().await;
        entries.insert(url.clone(), PageEntry::Visited(record));
    }

    /// Number of pages with a completed record.
    pub async fn pages_recorded(&self) -> usize {
        let entries = self.entries.lock().await;
        entries
            .values()
            .filter(|entry| matches!(entry, PageEntry::Visited(_)))
            .count()
    }

    /// Returns the completed pages, sorted by normalized key.
    ///
    /// Claimed-but-unfetched entries (failed or cancelled fetches) are
    /// omitted: they carry no data a consumer could report. Read this only
    /// after the crawl has quiesced.
    pub async fn snapshot(&self) -> BTreeMap<NormalizedUrl, PageRecord> {
        let entries = self.entries.lock().await;
        entries
            .iter()
            .filter_map(|(key, entry)| match entry {
                PageEntry::Visited(record) => Some((key.clone(), record.clone())),
                PageEntry::Pending => None,
            })
            .collect()
    }
}
