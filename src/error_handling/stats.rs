//! Scan outcome statistics.
//!
//! This module provides thread-safe counters for completed and failed scans.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::FailureKind;

/// Thread-safe scan outcome tracker.
///
/// Counts successful scans and failures per [`FailureKind`] using atomic
/// counters, so it can be shared across concurrent scans through an `Arc`.
/// All failure kinds are initialized to zero on creation.
pub struct ScanStats {
    succeeded: AtomicUsize,
    failures: HashMap<FailureKind, AtomicUsize>,
}

impl ScanStats {
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in FailureKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }

        ScanStats {
            succeeded: AtomicUsize::new(0),
            failures,
        }
    }

    pub fn record_success(&self) {
        self.succeeded.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_failure(&self, kind: FailureKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in ScanStats initialization.",
                kind
            );
        }
    }

    pub fn success_count(&self) -> usize {
        self.succeeded.load(Ordering::Relaxed)
    }

    pub fn failure_count(&self, kind: FailureKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    pub fn total_failures(&self) -> usize {
        self.failures
            .values()
            .map(|c| c.load(Ordering::Relaxed))
            .sum()
    }

    pub fn total(&self) -> usize {
        self.success_count() + self.total_failures()
    }
}

impl Default for ScanStats {
    fn default() -> Self {
        Self::new()
    }
}
