//! Cache Statistics Module
//!
//! Point-in-time entry classification and running operation counters.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the store classified at a single instant.
///
/// `total == active + expired`, and `total` equals the structural size of the
/// cache at the time of the scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheStats {
    /// Number of entries in the store, live or not
    pub total: usize,
    /// Entries whose expiration is still in the future
    pub active: usize,
    /// Entries that are expired but not yet removed
    pub expired: usize,
    /// Configured capacity
    pub max_size: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates an empty snapshot for a cache of the given capacity.
    pub fn new(max_size: usize) -> Self {
        Self {
            max_size,
            ..Self::default()
        }
    }

    // == Record Active ==
    pub fn record_active(&mut self) {
        self.active += 1;
        self.total += 1;
    }

    // == Record Expired ==
    pub fn record_expired(&mut self) {
        self.expired += 1;
        self.total += 1;
    }
}

// == Cache Counters ==
/// Running totals of cache activity since construction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheCounters {
    /// Lookups that found a live entry
    pub hits: u64,
    /// Lookups that found nothing or an expired entry
    pub misses: u64,
    /// Entries removed to make room under the size cap
    pub evictions: u64,
    /// Expired entries removed by lookups or sweeps
    pub expirations: u64,
    /// Cleanup passes that ran
    pub sweeps: u64,
}

impl CacheCounters {
    // == Constructor ==
    /// Creates counters with everything at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Calculates the cache hit rate.
    ///
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    pub fn record_expirations(&mut self, count: usize) {
        self.expirations += count as u64;
    }

    pub fn record_sweep(&mut self) {
        self.sweeps += 1;
    }
}
