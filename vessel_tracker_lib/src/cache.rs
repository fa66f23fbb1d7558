//! In-memory TTL cache backed by `DashMap` for concurrent access.

use dashmap::DashMap;
use serde::Serialize;
use std::time::{Duration, Instant};

/// A single cached value with the time it was stored.
struct CacheEntry<V> {
    value: V,
    stored_at: Instant,
}

/// Diagnostic snapshot of the cache contents. Expired entries that have
/// not been overwritten yet are included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub size: usize,
    pub entries: Vec<String>,
}

/// Thread-safe in-memory cache with time-to-live expiration.
///
/// Validity is checked lazily on `get`; expired entries are never purged
/// proactively and stay in the map until overwritten or cleared.
pub struct TtlCache<V> {
    store: DashMap<String, CacheEntry<V>>,
    ttl: Duration,
}

impl<V: Clone> TtlCache<V> {
    /// Creates a new cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<V> {
        let entry = self.store.get(key)?;
        if entry.stored_at.elapsed() >= self.ttl {
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites a cache entry, stamping it with the current time.
    pub fn set(&self, key: String, value: V) {
        self.store.insert(
            key,
            CacheEntry {
                value,
                stored_at: Instant::now(),
            },
        );
    }

    /// Removes all entries from the cache.
    pub fn clear(&self) {
        self.store.clear();
    }

    /// Entry count and keys, sorted for stable output.
    pub fn stats(&self) -> CacheStats {
        let mut entries: Vec<String> = self.store.iter().map(|e| e.key().clone()).collect();
        entries.sort();
        CacheStats {
            size: entries.len(),
            entries,
        }
    }
}
