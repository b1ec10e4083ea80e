//! Cache Entry Module
//!
//! Defines a single cached value together with its insertion time and TTL.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// A cached value with the moment it was inserted.
///
/// Expiry is measured from insertion, never from last access.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value
    pub value: V,
    /// Monotonic insertion timestamp
    pub inserted_at: Instant,
    /// Lifetime of the entry, counted from `inserted_at`
    pub ttl: Duration,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry stamped with the current instant.
    pub fn new(value: V, ttl: Duration) -> Self {
        Self {
            value,
            inserted_at: Instant::now(),
            ttl,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is visible only while `elapsed < ttl`; once the full TTL has
    /// elapsed it is expired.
    pub fn is_expired(&self) -> bool {
        self.inserted_at.elapsed() >= self.ttl
    }

    // == Time To Live ==
    /// Returns the remaining lifetime, `Duration::ZERO` once expired.
    pub fn ttl_remaining(&self) -> Duration {
        self.ttl.saturating_sub(self.inserted_at.elapsed())
    }
}
