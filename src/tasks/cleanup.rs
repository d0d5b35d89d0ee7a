//! TTL Cleanup Task
//!
//! Background task that periodically sweeps expired cache entries.

use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::Clock;
use crate::shared::SharedCache;

/// Spawns a background task that periodically removes expired entries.
///
/// The task runs in an infinite loop, sleeping for `interval` between sweeps
/// and holding the cache lock only while a sweep runs. The lazy cleanup done
/// by `get`/`set` stays active; both go through the same lock.
///
/// # Returns
/// A JoinHandle for the spawned task. Abort it to stop sweeping.
///
/// # Example
/// ```ignore
/// let cache: SharedCache<String> = SharedCache::new(CacheOptions::default());
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<T, C>(cache: SharedCache<T, C>, interval: Duration) -> JoinHandle<()>
where
    T: Send + 'static,
    C: Clock + 'static,
{
    tokio::spawn(async move {
        info!(
            "Starting TTL cleanup task with interval of {} ms",
            interval.as_millis()
        );

        loop {
            tokio::time::sleep(interval).await;

            let (removed, remaining) = {
                let mut cache_guard = cache.lock().await;
                let removed = cache_guard.cleanup_expired();
                (removed, cache_guard.len())
            };

            // The sweep itself logs removals at info level
            debug!(
                "TTL cleanup: removed {} expired entries, {} remaining",
                removed, remaining
            );
        }
    })
}
