//! User Cache - a user CRUD service behind a time-expiring cache
//!
//! Reads can go through the cache, writes can refresh it, deletes can evict
//! from it. The durable store always stays the source of truth.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod tasks;
pub mod users;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ServiceError};
pub use tasks::spawn_cleanup_task;
pub use users::{
    InMemoryUserRepository, User, UserCache, UserCacheKey, UserRepository, UserService,
};
