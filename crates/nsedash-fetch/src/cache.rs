//! Time-to-live cache.

use chrono::{DateTime, TimeDelta, Utc};
use std::collections::HashMap;
use std::hash::Hash;

/// Default validity of a cached fetch, in seconds.
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// A cached value with the time it was stored.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The cached value.
    pub value: V,
    /// When the value was stored.
    pub fetched_at: DateTime<Utc>,
}

impl<V> CacheEntry<V> {
    /// Returns true once `ttl` has fully elapsed since the entry was stored.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>, ttl: TimeDelta) -> bool {
        now - self.fetched_at >= ttl
    }
}

/// Map whose entries expire a fixed duration after insertion.
///
/// Time is passed in by the caller, so the cache itself never reads a clock.
#[derive(Debug, Clone)]
pub struct TtlCache<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    ttl: TimeDelta,
}

impl<K: Eq + Hash, V> TtlCache<K, V> {
    /// Creates an empty cache with the given time-to-live.
    #[must_use]
    pub fn new(ttl: TimeDelta) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
        }
    }

    /// Returns the configured time-to-live.
    #[must_use]
    pub const fn ttl(&self) -> TimeDelta {
        self.ttl
    }

    /// Returns the value for `key` if it has not expired at `now`.
    #[must_use]
    pub fn get(&self, key: &K, now: DateTime<Utc>) -> Option<&V> {
        self.entries
            .get(key)
            .filter(|entry| !entry.is_expired(now, self.ttl))
            .map(|entry| &entry.value)
    }

    /// Returns the full entry for `key`, expired or not.
    #[must_use]
    pub fn entry(&self, key: &K) -> Option<&CacheEntry<V>> {
        self.entries.get(key)
    }

    /// Stores `value` under `key`, stamped with `now`.
    pub fn insert(&mut self, key: K, value: V, now: DateTime<Utc>) {
        self.entries.insert(
            key,
            CacheEntry {
                value,
                fetched_at: now,
            },
        );
    }

    /// Removes the entry for `key`.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.entries.remove(key).map(|entry| entry.value)
    }

    /// Drops every entry expired at `now`, returning how many were removed.
    pub fn evict_expired(&mut self, now: DateTime<Utc>) -> usize {
        let before = self.entries.len();
        let ttl = self.ttl;
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));
        before - self.entries.len()
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the number of stored entries, including expired ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for TtlCache<K, V> {
    fn default() -> Self {
        Self::new(TimeDelta::seconds(DEFAULT_TTL_SECS))
    }
}
