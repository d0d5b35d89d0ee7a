//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the cache against a simple reference model.

use proptest::prelude::*;
use std::collections::VecDeque;

use crate::cache::{BoundedTtlCache, Clock, ManualClock};
use crate::config::CacheOptions;

// == Test Configuration ==
const START: u64 = 1_000_000;
const TEST_CLEANUP_INTERVAL: u64 = 50;

// == Strategies ==
/// Small key space so sequences revisit keys often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-h]".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, value: u32, ttl: i64 },
    Get { key: String },
    Delete { key: String },
    Advance { ms: u64 },
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        (key_strategy(), any::<u32>(), -10i64..200)
            .prop_map(|(key, value, ttl)| CacheOp::Set { key, value, ttl }),
        key_strategy().prop_map(|key| CacheOp::Get { key }),
        key_strategy().prop_map(|key| CacheOp::Delete { key }),
        (0u64..60).prop_map(|ms| CacheOp::Advance { ms }),
    ]
}

fn new_cache(max_size: usize) -> (BoundedTtlCache<u32, ManualClock>, ManualClock) {
    let clock = ManualClock::new(START);
    let options = CacheOptions::new()
        .with_max_size(max_size)
        .with_cleanup_interval_ms(TEST_CLEANUP_INTERVAL);
    (BoundedTtlCache::with_clock(options, clock.clone()), clock)
}

// == Reference Model ==
/// Straightforward LRU + TTL model: front = oldest.
struct Model {
    entries: VecDeque<(String, u32, u64)>,
    max_size: usize,
    interval: u64,
    last_cleanup: u64,
}

impl Model {
    fn new(max_size: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            max_size,
            interval: TEST_CLEANUP_INTERVAL,
            last_cleanup: 0,
        }
    }

    fn position(&self, key: &str) -> Option<usize> {
        self.entries.iter().position(|(k, _, _)| k == key)
    }

    fn maybe_cleanup(&mut self, now: u64) {
        if now - self.last_cleanup < self.interval {
            return;
        }
        self.last_cleanup = now;
        self.entries.retain(|(_, _, expire_at)| *expire_at > now);
    }

    fn get(&mut self, key: &str, now: u64) -> Option<u32> {
        self.maybe_cleanup(now);
        let pos = self.position(key)?;
        let entry = self.entries.remove(pos)?;
        if entry.2 > now {
            let value = entry.1;
            self.entries.push_back(entry);
            Some(value)
        } else {
            None
        }
    }

    fn set(&mut self, key: &str, value: u32, ttl: i64, now: u64) {
        self.maybe_cleanup(now);
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
        if self.entries.len() >= self.max_size {
            self.entries.pop_front();
        }
        self.entries
            .push_back((key.to_string(), value, now + ttl.max(0) as u64));
    }

    fn delete(&mut self, key: &str) {
        if let Some(pos) = self.position(key) {
            self.entries.remove(pos);
        }
    }

    fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _, _)| k.clone()).collect()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    // Any interleaving of operations behaves exactly like the reference model,
    // including lookup results and LRU order.
    #[test]
    fn prop_matches_reference_model(
        max_size in 1usize..6,
        ops in prop::collection::vec(cache_op_strategy(), 1..80)
    ) {
        let (mut cache, clock) = new_cache(max_size);
        let mut model = Model::new(max_size);

        for op in ops {
            let now = clock.now_ms();
            match op {
                CacheOp::Set { key, value, ttl } => {
                    cache.set(key.clone(), value, ttl);
                    model.set(&key, value, ttl, now);
                }
                CacheOp::Get { key } => {
                    let actual = cache.get(&key).copied();
                    let expected = model.get(&key, now);
                    prop_assert_eq!(actual, expected, "Lookup mismatch for {}", key);
                }
                CacheOp::Delete { key } => {
                    cache.delete(&key);
                    model.delete(&key);
                }
                CacheOp::Advance { ms } => clock.advance(ms),
            }

            let actual_keys: Vec<String> = cache.iter().map(|(k, _)| k.to_string()).collect();
            prop_assert_eq!(actual_keys, model.keys(), "LRU order mismatch");
        }
    }

    // After every set, the number of entries never exceeds the capacity.
    #[test]
    fn prop_capacity_enforcement(
        max_size in 1usize..20,
        entries in prop::collection::vec((key_strategy(), -5i64..500), 1..200)
    ) {
        let (mut cache, clock) = new_cache(max_size);

        for (key, ttl) in entries {
            cache.set(key, 0, ttl);
            clock.advance(3);
            prop_assert!(
                cache.len() <= max_size,
                "Cache size {} exceeds max {}",
                cache.len(),
                max_size
            );
        }
    }

    // total == active + expired == len() for any reachable state.
    #[test]
    fn prop_stats_consistency(ops in prop::collection::vec(cache_op_strategy(), 1..80)) {
        let (mut cache, clock) = new_cache(4);

        for op in ops {
            match op {
                CacheOp::Set { key, value, ttl } => cache.set(key, value, ttl),
                CacheOp::Get { key } => { cache.get(&key); }
                CacheOp::Delete { key } => { cache.delete(&key); }
                CacheOp::Advance { ms } => clock.advance(ms),
            }

            let stats = cache.stats();
            prop_assert_eq!(stats.total, stats.active + stats.expired);
            prop_assert_eq!(stats.total, cache.len());
            prop_assert_eq!(stats.max_size, 4);
        }
    }

    // Deleting an absent key leaves contents and order untouched.
    #[test]
    fn prop_delete_absent_is_noop(
        keys in prop::collection::vec("[a-d]", 0..10),
        absent in "[x-z]"
    ) {
        let (mut cache, _) = new_cache(8);
        for (i, key) in keys.iter().enumerate() {
            cache.set(key.clone(), i as u32, 1_000);
        }
        let before: Vec<(String, u32)> =
            cache.iter().map(|(k, v)| (k.to_string(), *v)).collect();

        prop_assert!(!cache.delete(&absent));

        let after: Vec<(String, u32)> =
            cache.iter().map(|(k, v)| (k.to_string(), *v)).collect();
        prop_assert_eq!(before, after);
    }

    // A key that was touched by get just before the cache fills up is never
    // the one evicted.
    #[test]
    fn prop_lru_access_tracking(capacity in 2usize..8, touched in 0usize..8) {
        prop_assume!(touched < capacity);
        let (mut cache, _) = new_cache(capacity);

        for i in 0..capacity {
            cache.set(format!("k{}", i), i as u32, 1_000);
        }
        let touched_key = format!("k{}", touched);
        prop_assert!(cache.get(&touched_key).is_some());

        cache.set("new", 99, 1_000);

        let expected_evicted = if touched == 0 { "k1" } else { "k0" };
        prop_assert!(cache.get(expected_evicted).is_none());
        prop_assert!(cache.get(&touched_key).is_some());
        prop_assert_eq!(cache.len(), capacity);
    }
}
