//! Cache Store Module
//!
//! Named key-value cache where every entry expires a fixed TTL after insertion.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use std::time::Duration;

use tokio::sync::RwLock;
use tracing::trace;

use crate::cache::{CacheEntry, CacheStats};

/// Entries and counters guarded together so every operation is one critical section.
#[derive(Debug)]
struct Inner<K, V> {
    entries: HashMap<K, CacheEntry<V>>,
    stats: CacheStats,
}

// == Cache Store ==
/// Expiring cache store with no capacity bound.
///
/// Synchronisation is internal: share it behind an `Arc` and call it from any
/// number of tasks. Expired entries are never returned, whether or not the
/// background sweep has reclaimed them yet. Keys only match keys of the same
/// value, so callers that index one namespace several ways should use a key
/// type that keeps those ways apart.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    name: String,
    ttl: Duration,
    inner: RwLock<Inner<K, V>>,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Debug,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache namespace whose entries live for `ttl`.
    pub fn new(name: impl Into<String>, ttl: Duration) -> Self {
        Self {
            name: name.into(),
            ttl,
            inner: RwLock::new(Inner {
                entries: HashMap::new(),
                stats: CacheStats::new(),
            }),
        }
    }

    /// Namespace name, e.g. `users`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Put ==
    /// Inserts or replaces the entry for `key`, restarting its TTL.
    pub async fn put(&self, key: impl Into<K>, value: V) {
        let key = key.into();
        let mut inner = self.inner.write().await;
        trace!(cache = %self.name, ?key, "put");
        inner.entries.insert(key, CacheEntry::new(value, self.ttl));
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
    }

    // == Get ==
    /// Returns a copy of the live value for `key`.
    ///
    /// Absent and expired keys are both a plain miss; an expired entry found
    /// here is dropped on the spot.
    pub async fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + Debug + ?Sized,
    {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;

        let expired = match inner.entries.get(key) {
            Some(entry) if !entry.is_expired() => {
                let value = entry.value.clone();
                inner.stats.record_hit();
                return Some(value);
            }
            Some(_) => true,
            None => false,
        };

        if expired {
            inner.entries.remove(key);
            inner.stats.record_expirations(1);
            let count = inner.entries.len();
            inner.stats.set_total_entries(count);
            trace!(cache = %self.name, ?key, "expired on read");
        }
        inner.stats.record_miss();
        None
    }

    // == Contains Key ==
    /// Returns true if a live entry exists for `key`. Does not touch statistics.
    pub async fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let inner = self.inner.read().await;
        inner
            .entries
            .get(key)
            .is_some_and(|entry| !entry.is_expired())
    }

    // == Remove ==
    /// Drops the entry for `key`. Missing keys are a no-op.
    ///
    /// Returns true if a live entry was removed.
    pub async fn remove<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut guard = self.inner.write().await;
        let inner = &mut *guard;
        let removed = match inner.entries.remove(key) {
            Some(entry) if !entry.is_expired() => {
                inner.stats.record_eviction();
                true
            }
            Some(_) => {
                inner.stats.record_expirations(1);
                false
            }
            None => false,
        };
        let count = inner.entries.len();
        inner.stats.set_total_entries(count);
        removed
    }

    // == Cleanup Expired ==
    /// Physically removes every expired entry.
    ///
    /// Returns the number of entries removed.
    pub async fn cleanup_expired(&self) -> usize {
        let mut inner = self.inner.write().await;
        let before = inner.entries.len();
        inner.entries.retain(|_, entry| !entry.is_expired());
        let count = before - inner.entries.len();

        inner.stats.record_expirations(count);
        let remaining = inner.entries.len();
        inner.stats.set_total_entries(remaining);
        count
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub async fn stats(&self) -> CacheStats {
        let inner = self.inner.read().await;
        let mut stats = inner.stats.clone();
        stats.set_total_entries(inner.entries.len());
        stats
    }

    // == Length ==
    /// Number of entries physically held, including expired ones not yet swept.
    pub async fn len(&self) -> usize {
        self.inner.read().await.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no entries, live or expired.
    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.entries.is_empty()
    }
}
