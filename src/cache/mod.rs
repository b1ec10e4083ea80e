//! Cache Module
//!
//! In-memory caching with expiry measured from insertion time.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Public Constants ==
/// Namespace used for cached users
pub const USERS_CACHE: &str = "users";
