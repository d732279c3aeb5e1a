//! Metrics hooks for filter matching
//!
//! Thread-safe counters for monitoring which strategy the selector picks
//! and how matches resolve. Useful when validating the cost calibration
//! against production traffic.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::domain::cost::MatchStrategy;

/// Metrics collector for match operations
#[derive(Default)]
pub struct Metrics {
    /// Batches resolved without running a matcher (empty query or filter)
    pub block_selected: AtomicU64,
    /// Batches dispatched to the merge-walk strategy
    pub zip_selected: AtomicU64,
    /// Batches dispatched to the hash-probe strategy
    pub hash_selected: AtomicU64,
    /// Batches that reported at least one match
    pub matches_found: AtomicU64,
    /// Streams that failed to decode
    pub decode_failures: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record which strategy the selector picked
    pub fn record_selection(&self, strategy: MatchStrategy) {
        let counter = match strategy {
            MatchStrategy::Block => &self.block_selected,
            MatchStrategy::Zip => &self.zip_selected,
            MatchStrategy::Hash => &self.hash_selected,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a batch that matched
    pub fn record_match(&self) {
        self.matches_found.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a stream that could not be decoded
    pub fn record_decode_failure(&self) {
        self.decode_failures.fetch_add(1, Ordering::Relaxed);
    }

    /// Take a point-in-time copy of all counters
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            block_selected: self.block_selected.load(Ordering::Relaxed),
            zip_selected: self.zip_selected.load(Ordering::Relaxed),
            hash_selected: self.hash_selected.load(Ordering::Relaxed),
            matches_found: self.matches_found.load(Ordering::Relaxed),
            decode_failures: self.decode_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub block_selected: u64,
    pub zip_selected: u64,
    pub hash_selected: u64,
    pub matches_found: u64,
    pub decode_failures: u64,
}
