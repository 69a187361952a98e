//! In-memory response cache with per-cache TTL.
//!
//! One entry per key; a write is a full replacement (last writer wins).
//! Expiry is checked lazily on lookup — stale entries sit in the map until
//! they are overwritten or the process restarts. There is no request
//! coalescing: two concurrent misses for the same key will each trigger
//! their own upstream fetch, and both writes land.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::hash::Hash;
use std::time::{Duration, Instant};

/// A cached value plus the moment it was fetched.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    pub value: V,
    pub fetched_at: Instant,
}

impl<V> CacheEntry<V> {
    /// Freshness = `now - fetched_at < ttl`. Equality is stale.
    pub fn is_fresh(&self, now: Instant, ttl: Duration) -> bool {
        now.duration_since(self.fetched_at) < ttl
    }
}

/// Map from key to [`CacheEntry`], guarded by a `parking_lot` `RwLock`.
///
/// Growth is unbounded; in practice keys are drawn from the small, fixed
/// set of configured agencies and coordinates.
#[derive(Debug)]
pub struct TtlCache<K, V> {
    ttl: Duration,
    entries: RwLock<HashMap<K, CacheEntry<V>>>,
}

impl<K, V> TtlCache<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Returns a clone of the cached value if the entry is still fresh.
    pub fn get(&self, key: &K) -> Option<V> {
        self.get_at(key, Instant::now())
    }

    /// Lookup with an explicit clock, for freshness tests.
    pub fn get_at(&self, key: &K, now: Instant) -> Option<V> {
        let entries = self.entries.read();
        let entry = entries.get(key)?;
        entry.is_fresh(now, self.ttl).then(|| entry.value.clone())
    }

    /// Replaces any existing entry for `key` wholesale.
    pub fn insert(&self, key: K, value: V) {
        self.insert_at(key, value, Instant::now());
    }

    /// Insert with an explicit clock, for freshness tests.
    pub fn insert_at(&self, key: K, value: V, now: Instant) {
        self.entries.write().insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }
}
