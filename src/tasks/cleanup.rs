//! TTL Cleanup Task
//!
//! Background task that periodically reclaims expired cache entries.
//! Reads never depend on it; it only bounds memory held by dead entries.

use std::fmt::Debug;
use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps `cache` every `interval`.
///
/// Returns the task handle so it can be aborted during graceful shutdown.
///
/// # Example
/// ```ignore
/// let cache = Arc::new(UserCache::new("users", Duration::from_secs(1)));
/// let cleanup_handle = spawn_cleanup_task(cache.clone(), Duration::from_secs(1));
/// // Later, during shutdown:
/// cleanup_handle.abort();
/// ```
pub fn spawn_cleanup_task<K, V>(cache: Arc<CacheStore<K, V>>, interval: Duration) -> JoinHandle<()>
where
    K: Hash + Eq + Debug + Send + Sync + 'static,
    V: Clone + Send + Sync + 'static,
{
    tokio::spawn(async move {
        info!(
            cache = %cache.name(),
            "Starting TTL cleanup task with interval of {:?}", interval
        );

        loop {
            tokio::time::sleep(interval).await;

            let removed = cache.cleanup_expired().await;

            if removed > 0 {
                info!(cache = %cache.name(), "TTL cleanup: removed {} expired entries", removed);
            } else {
                debug!(cache = %cache.name(), "TTL cleanup: no expired entries found");
            }
        }
    })
}
