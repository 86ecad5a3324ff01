//! In-memory scan history.
//!
//! Holds at most one record per URL, most recently upserted first. Nothing is
//! persisted; the store lives as long as the process.

mod recent;

use std::collections::VecDeque;
use std::sync::{Mutex, MutexGuard};

use crate::models::HistoryRecord;

pub use recent::fetch_recent_scans;

/// Ordered, URL-deduplicated collection of finalized scans.
///
/// Every mutation takes the internal lock once, so an upsert's
/// remove-then-insert is a single critical section even when scans complete
/// concurrently on a multi-threaded runtime.
#[derive(Debug, Default)]
pub struct HistoryStore {
    records: Mutex<VecDeque<HistoryRecord>>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes any record with the same URL (exact, case-sensitive match) and
    /// inserts `record` at the front.
    pub fn upsert(&self, record: HistoryRecord) {
        let mut records = self.lock();
        records.retain(|existing| existing.url != record.url);
        records.push_front(record);
    }

    /// Records in most-recently-upserted-first order, optionally truncated.
    pub fn list(&self, limit: Option<usize>) -> Vec<HistoryRecord> {
        let records = self.lock();
        let take = limit.unwrap_or(records.len());
        records.iter().take(take).cloned().collect()
    }

    /// Record for a URL, if one exists.
    pub fn get(&self, url: &str) -> Option<HistoryRecord> {
        self.lock().iter().find(|r| r.url == url).cloned()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Appends records that are already in most-recent-first order (e.g. from
    /// the recent-scans endpoint) behind the existing ones.
    ///
    /// URLs already present keep their existing record; within `records` the
    /// first occurrence of a URL wins. Returns the number of records added.
    pub fn seed(&self, records: impl IntoIterator<Item = HistoryRecord>) -> usize {
        let mut existing = self.lock();
        let mut added = 0;
        for record in records {
            if existing.iter().any(|r| r.url == record.url) {
                continue;
            }
            existing.push_back(record);
            added += 1;
        }
        added
    }

    fn lock(&self) -> MutexGuard<'_, VecDeque<HistoryRecord>> {
        // Records are only ever replaced whole, so a poisoned lock still guards valid data.
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
