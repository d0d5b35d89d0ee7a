//! Cache Store Module
//!
//! Main cache engine combining the ordered LRU list with TTL expiration and
//! lazy cleanup.

use tracing::{debug, info};

use crate::cache::{CacheCounters, CacheRecord, CacheStats, Clock, LruList, SystemClock};
use crate::config::CacheOptions;

// == Bounded TTL Cache ==
/// Bounded key-value cache with per-entry TTL and LRU eviction.
///
/// Expired entries are removed when a lookup finds them, and by a sweep that
/// piggybacks on `get`/`set` at most once per cleanup interval. No background
/// thread is involved; see [`crate::SharedCache`] for concurrent use.
#[derive(Debug)]
pub struct BoundedTtlCache<T, C = SystemClock> {
    /// Records in LRU order
    records: LruList<CacheRecord<T>>,
    options: CacheOptions,
    /// Clock time of the last sweep
    last_cleanup: u64,
    counters: CacheCounters,
    clock: C,
}

impl<T> BoundedTtlCache<T, SystemClock> {
    // == Constructor ==
    /// Creates an empty cache using the system clock.
    pub fn new(options: CacheOptions) -> Self {
        Self::with_clock(options, SystemClock)
    }
}

impl<T> Default for BoundedTtlCache<T, SystemClock> {
    fn default() -> Self {
        Self::new(CacheOptions::default())
    }
}

impl<T, C: Clock> BoundedTtlCache<T, C> {
    /// Creates an empty cache reading time from `clock`.
    pub fn with_clock(options: CacheOptions, clock: C) -> Self {
        Self {
            records: LruList::new(),
            options,
            last_cleanup: 0,
            counters: CacheCounters::new(),
            clock,
        }
    }

    // == Get ==
    /// Looks up a live value.
    ///
    /// A hit moves the entry to the most recently used position. An expired
    /// entry is removed and reported as a miss.
    pub fn get(&mut self, key: &str) -> Option<&T> {
        let now = self.clock.now_ms();
        self.maybe_cleanup(now);

        let Some(record) = self.records.get(key) else {
            self.counters.record_miss();
            return None;
        };

        if record.is_expired_at(now) {
            self.records.remove(key);
            self.counters.record_expirations(1);
            self.counters.record_miss();
            return None;
        }

        self.records.touch(key);
        self.counters.record_hit();
        self.records.get(key).map(|record| &record.value)
    }

    // == Set ==
    /// Stores `value` under `key` for `ttl_ms` milliseconds.
    ///
    /// Overwriting a key makes it the most recently used. When the cache is
    /// full, the least recently used entry is evicted first. A negative TTL is
    /// treated as zero, so the entry is already expired.
    pub fn set(&mut self, key: impl Into<String>, value: T, ttl_ms: i64) {
        let now = self.clock.now_ms();
        self.maybe_cleanup(now);

        let key = key.into();
        self.records.remove(&key);

        // At most one slot is needed for one insertion
        if self.records.len() >= self.options.max_size && self.records.pop_oldest().is_some() {
            self.counters.record_eviction();
        }

        self.records.push_newest(key, CacheRecord::new(value, now, ttl_ms));
    }

    // == Delete ==
    /// Removes `key` if present. Returns whether an entry was removed.
    pub fn delete(&mut self, key: &str) -> bool {
        self.records.remove(key).is_some()
    }

    // == Clear ==
    /// Removes every entry. Sweep timing and counters are kept.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    // == Length ==
    /// Returns the number of stored entries, including expired ones that
    /// have not been swept yet.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    // == Stats ==
    /// Classifies every entry as active or expired at this instant.
    pub fn stats(&self) -> CacheStats {
        let now = self.clock.now_ms();
        let mut stats = CacheStats::new(self.options.max_size);

        for (_, record) in &self.records {
            if record.is_expired_at(now) {
                stats.record_expired();
            } else {
                stats.record_active();
            }
        }

        stats
    }

    // == Counters ==
    /// Returns running hit/miss/removal totals.
    pub fn counters(&self) -> CacheCounters {
        self.counters
    }

    /// Iterates stored entries from least to most recently used without
    /// touching them. Expired entries that have not been swept are included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.records.iter().map(|(key, record)| (key, &record.value))
    }

    pub fn options(&self) -> &CacheOptions {
        &self.options
    }

    // == Cleanup Expired ==
    /// Sweeps expired entries now, regardless of the cleanup interval.
    ///
    /// Returns the number of entries removed.
    pub fn cleanup_expired(&mut self) -> usize {
        let now = self.clock.now_ms();
        self.sweep(now)
    }

    fn maybe_cleanup(&mut self, now: u64) {
        if now.saturating_sub(self.last_cleanup) < self.options.cleanup_interval_ms {
            return;
        }
        self.sweep(now);
    }

    fn sweep(&mut self, now: u64) -> usize {
        self.last_cleanup = now;
        self.counters.record_sweep();

        let expired_keys: Vec<String> = self
            .records
            .iter()
            .filter(|(_, record)| record.is_expired_at(now))
            .map(|(key, _)| key.to_string())
            .collect();

        let count = expired_keys.len();
        for key in &expired_keys {
            self.records.remove(key);
        }
        self.counters.record_expirations(count);

        if count > 0 {
            info!(
                cache = %self.options.name,
                removed = count,
                size = self.records.len(),
                "Cleaned up {} expired entries. Current size: {}",
                count,
                self.records.len()
            );
        } else {
            debug!(cache = %self.options.name, "Cleanup sweep found no expired entries");
        }

        count
    }
}
