//! Read-Through Cache Module
//!
//! Thread-safe bounded LRU cache that falls back to a [`Resolver`] on a miss.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::cache::{CacheStats, LruMap, Resolver};
use crate::error::{LookupError, Result};

// == Inner State ==
/// Map, recency order and counters, always mutated together.
#[derive(Debug)]
struct Inner<K, V> {
    entries: LruMap<K, V>,
    stats: CacheStats,
    /// Bumped by every invalidation; a load that started under an older
    /// generation must not be cached.
    generation: u64,
}

impl<K: Hash + Eq + Clone + Debug, V> Inner<K, V> {
    fn store(&mut self, key: K, value: V) {
        if let Some((evicted, _)) = self.entries.insert(key, value) {
            self.stats.record_eviction();
            debug!(key = ?evicted, "evicted least recently used entry");
        }
        self.stats.set_total_entries(self.entries.len());
    }
}

// == Bounded Read-Through Cache ==
/// Holds up to `capacity` most recently used values; on a miss, asks the
/// resolver and caches what it finds.
///
/// Shared by reference (typically behind an `Arc`) between threads. A single
/// mutex guards the map, the access order and the statistics, so an eviction
/// and the insert that caused it are one step. The resolver runs outside the
/// lock: two threads missing on the same key may both resolve it, and the
/// later insert wins. A load that overlaps `invalidate` or `clear` is returned
/// to its caller but not cached, since it may predate the invalidation.
#[derive(Debug)]
pub struct BoundedReadThroughCache<K, V, R> {
    inner: Mutex<Inner<K, V>>,
    resolver: R,
}

impl<K, V, R> BoundedReadThroughCache<K, V, R>
where
    K: Hash + Eq + Clone + Debug,
    V: Clone,
    R: Resolver<K, V>,
{
    // == Constructor ==
    /// Creates an empty cache over `resolver`.
    ///
    /// # Errors
    /// `LookupError::InvalidCapacity` if `capacity` is zero.
    pub fn new(capacity: usize, resolver: R) -> Result<Self> {
        if capacity == 0 {
            return Err(LookupError::InvalidCapacity(capacity));
        }

        Ok(Self {
            inner: Mutex::new(Inner {
                entries: LruMap::new(capacity),
                stats: CacheStats::new(),
                generation: 0,
            }),
            resolver,
        })
    }

    // == Get ==
    /// Returns the value for `key`, resolving and caching it on a miss.
    ///
    /// - hit: the entry becomes most recently used, the resolver is not called
    /// - miss, resolved: the value is cached (evicting the LRU entry when full)
    /// - miss, not found: `Ok(None)`, nothing is cached
    /// - miss, resolver error: the error is returned, nothing is cached
    /// - miss overlapping an invalidation: the value is returned, not cached
    pub fn get(&self, key: &K) -> Result<Option<V>> {
        let generation = {
            let mut inner = self.lock();
            if let Some(value) = inner.entries.get(key).cloned() {
                inner.stats.record_hit();
                debug!(?key, "cache hit");
                return Ok(Some(value));
            }
            inner.stats.record_miss();
            inner.generation
        };

        debug!(?key, "cache miss, consulting resolver");
        match self.resolver.resolve(key) {
            Ok(Some(value)) => {
                let mut inner = self.lock();
                inner.stats.record_load();
                if inner.generation == generation {
                    inner.store(key.clone(), value.clone());
                } else {
                    debug!(?key, "invalidated while loading, not caching");
                }
                Ok(Some(value))
            }
            Ok(None) => {
                debug!(?key, "resolver found nothing");
                Ok(None)
            }
            Err(err) => {
                self.lock().stats.record_load_failure();
                warn!(?key, error = %err, "resolver failed");
                Err(err)
            }
        }
    }

    // == Peek ==
    /// Returns a cached value without touching recency or the resolver.
    pub fn peek(&self, key: &K) -> Option<V> {
        self.lock().entries.peek(key).cloned()
    }

    // == Insert ==
    /// Places a value in the cache directly, as the most recently used entry.
    pub fn insert(&self, key: K, value: V) {
        self.lock().store(key, value);
    }

    // == Invalidate ==
    /// Drops `key` from the cache; the next `get` resolves it again.
    pub fn invalidate(&self, key: &K) -> Option<V> {
        let mut inner = self.lock();
        inner.generation = inner.generation.wrapping_add(1);
        let removed = inner.entries.remove(key);
        let len = inner.entries.len();
        inner.stats.set_total_entries(len);
        removed
    }

    // == Clear ==
    /// Drops every cached entry. Statistics counters are kept.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.generation = inner.generation.wrapping_add(1);
        inner.entries.clear();
        inner.stats.set_total_entries(0);
    }

    pub fn contains(&self, key: &K) -> bool {
        self.lock().entries.contains(key)
    }

    /// Cached keys, most recently used first.
    pub fn keys(&self) -> Vec<K> {
        self.lock().entries.iter().map(|(k, _)| k.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.lock().entries.capacity()
    }

    // == Stats ==
    /// Returns a snapshot of the cache statistics.
    pub fn stats(&self) -> CacheStats {
        let inner = self.lock();
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        // Every mutation leaves the map consistent before any call that can
        // panic, so a poisoned guard is still safe to use.
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
