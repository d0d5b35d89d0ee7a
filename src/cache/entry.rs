//! Cache Record Module
//!
//! Defines a stored value paired with its absolute expiration time.

// == Cache Record ==
/// A single cached value and the instant it stops being live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheRecord<T> {
    /// The stored value
    pub value: T,
    /// Expiration timestamp in clock milliseconds
    pub expire_at: u64,
}

impl<T> CacheRecord<T> {
    // == Constructor ==
    /// Creates a record expiring `ttl_ms` after `now`.
    ///
    /// Negative TTLs clamp to zero, so the record is already expired at `now`.
    pub fn new(value: T, now: u64, ttl_ms: i64) -> Self {
        let ttl = ttl_ms.max(0) as u64;
        Self {
            value,
            expire_at: now.saturating_add(ttl),
        }
    }

    // == Is Expired ==
    /// Checks whether the record is expired at `now`.
    ///
    /// Boundary condition: a record whose `expire_at` equals `now` is expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expire_at <= now
    }
}
