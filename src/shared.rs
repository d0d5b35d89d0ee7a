//! Shared Cache Module
//!
//! Cloneable, lock-guarded handle for using one cache from many tasks.

use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use crate::cache::{BoundedTtlCache, CacheCounters, CacheStats, Clock, SystemClock};
use crate::config::CacheOptions;

// == Shared Cache ==
/// Handle to a [`BoundedTtlCache`] behind an async mutex.
///
/// Every method holds the lock for the whole operation. Use [`SharedCache::lock`]
/// to run several operations under one guard.
#[derive(Debug)]
pub struct SharedCache<T, C = SystemClock> {
    inner: Arc<Mutex<BoundedTtlCache<T, C>>>,
}

impl<T, C> Clone for SharedCache<T, C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T> SharedCache<T, SystemClock> {
    /// Creates a shared cache using the system clock.
    pub fn new(options: CacheOptions) -> Self {
        Self::from_cache(BoundedTtlCache::new(options))
    }
}

impl<T, C: Clock> SharedCache<T, C> {
    /// Wraps an existing cache.
    pub fn from_cache(cache: BoundedTtlCache<T, C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Acquires exclusive access to the underlying cache.
    pub async fn lock(&self) -> MutexGuard<'_, BoundedTtlCache<T, C>> {
        self.inner.lock().await
    }

    /// Looks up a live value and returns a clone of it.
    pub async fn get(&self, key: &str) -> Option<T>
    where
        T: Clone,
    {
        self.inner.lock().await.get(key).cloned()
    }

    pub async fn set(&self, key: impl Into<String>, value: T, ttl_ms: i64) {
        self.inner.lock().await.set(key, value, ttl_ms);
    }

    pub async fn delete(&self, key: &str) -> bool {
        self.inner.lock().await.delete(key)
    }

    pub async fn clear(&self) {
        self.inner.lock().await.clear();
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.is_empty()
    }

    pub async fn stats(&self) -> CacheStats {
        self.inner.lock().await.stats()
    }

    pub async fn counters(&self) -> CacheCounters {
        self.inner.lock().await.counters()
    }

    /// Sweeps expired entries now. Returns the number removed.
    pub async fn cleanup_expired(&self) -> usize {
        self.inner.lock().await.cleanup_expired()
    }
}
