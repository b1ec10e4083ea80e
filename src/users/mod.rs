//! Users Module
//!
//! The user entity, its durable store contract, and the caching service in front of it.

mod keys;
mod model;
mod repository;
mod service;

pub use keys::{UserCache, UserCacheKey};
pub use model::User;
pub use repository::{InMemoryUserRepository, UserRepository};
pub use service::UserService;
