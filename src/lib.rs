//! Bounded TTL Cache - An embeddable in-process key-value cache
//!
//! Stores values under string keys with per-entry TTL expiration, LRU eviction
//! when full, and lazy cleanup piggybacked on normal traffic.

pub mod cache;
pub mod config;
pub mod error;
pub mod shared;
pub mod tasks;

pub use cache::{BoundedTtlCache, CacheCounters, CacheStats, Clock, ManualClock, SystemClock};
pub use config::CacheOptions;
pub use error::{CacheError, Result};
pub use shared::SharedCache;
pub use tasks::spawn_cleanup_task;
