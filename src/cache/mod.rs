//! Cache Module
//!
//! Provides the bounded cache with TTL expiration, LRU eviction and lazy cleanup.

mod clock;
mod entry;
mod lru;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use clock::{Clock, ManualClock, SystemClock};
pub use entry::CacheRecord;
pub use lru::{Iter, LruList};
pub use stats::{CacheCounters, CacheStats};
pub use store::BoundedTtlCache;

// == Public Constants ==
/// Default maximum number of entries
pub const DEFAULT_MAX_SIZE: usize = 1000;

/// Default interval between lazy cleanup sweeps in milliseconds
pub const DEFAULT_CLEANUP_INTERVAL_MS: u64 = 5 * 60 * 1000; // 5 minutes

/// Default cache name used in log lines
pub const DEFAULT_CACHE_NAME: &str = "BoundedTtlCache";
