//! Response DTOs for the user API
//!
//! Defines the structure of outgoing HTTP response bodies. Users themselves
//! are returned as [`crate::users::User`].

use serde::Serialize;

use crate::cache::CacheStats;

/// Response body for the delete endpoints
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    /// Success message
    pub message: String,
    /// The deleted user id
    pub id: u64,
    /// Whether the id-keyed cache entry was evicted as part of the delete
    pub evicted: bool,
}

impl DeleteResponse {
    pub fn new(id: u64, evicted: bool) -> Self {
        Self {
            message: format!("User {} deleted successfully", id),
            id,
            evicted,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Cache namespace
    pub cache: String,
    /// Entry TTL in milliseconds
    pub ttl_ms: u64,
    pub hits: u64,
    pub misses: u64,
    pub expirations: u64,
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(cache: impl Into<String>, ttl_ms: u64, stats: &CacheStats) -> Self {
        Self {
            cache: cache.into(),
            ttl_ms,
            hits: stats.hits,
            misses: stats.misses,
            expirations: stats.expirations,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            hit_rate: stats.hit_rate(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
