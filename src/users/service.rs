//! User Service
//!
//! The only entry point for user operations. Each method decides whether to
//! read through the cache, refresh it, evict from it, or leave it alone; the
//! repository always stays the source of truth.
//!
//! | method | cache | key |
//! |---|---|---|
//! | [`create`](UserService::create) | untouched | - |
//! | [`create_with`](UserService::create_with) | read-through | name |
//! | [`get`](UserService::get) | read-through | id |
//! | [`create_or_return_cached`](UserService::create_or_return_cached) | read-through | name |
//! | [`create_and_refresh_cache`](UserService::create_and_refresh_cache) | write-through | name |
//! | [`delete`](UserService::delete) | untouched | - |
//! | [`delete_and_evict`](UserService::delete_and_evict) | evict | id |
//! | [`get_all`](UserService::get_all) | untouched | - |
//!
//! Id-keyed and name-keyed entries are independent ([`UserCacheKey`]), so a
//! user named `"1"` never answers for id 1. Deleting a user never
//! touches a copy cached under its name, so that copy stays readable until
//! its TTL runs out.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::{Result, ServiceError};
use crate::users::{User, UserCache, UserCacheKey, UserRepository};

// == User Service ==
/// Cache-coordinating front for a [`UserRepository`].
///
/// Cheap to clone; clones share the repository and the cache.
#[derive(Clone)]
pub struct UserService {
    repository: Arc<dyn UserRepository>,
    cache: Arc<UserCache>,
}

impl UserService {
    // == Constructor ==
    /// Wraps `repository` with `cache`.
    pub fn new(repository: Arc<dyn UserRepository>, cache: Arc<UserCache>) -> Self {
        Self { repository, cache }
    }

    /// Shared handle to the backing cache.
    pub fn cache(&self) -> &Arc<UserCache> {
        &self.cache
    }

    // == Create ==
    /// Saves `user` without consulting or populating the cache.
    pub async fn create(&self, user: User) -> Result<User> {
        self.repository.save(user).await
    }

    // == Create With ==
    /// Read-through on `name`: a live entry is returned as is and nothing is
    /// saved, otherwise a new user is saved and cached under `name`.
    pub async fn create_with(&self, name: &str, email: &str) -> Result<User> {
        let key = UserCacheKey::name(name);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(%name, "create_with served from cache");
            return Ok(cached);
        }

        info!("creating user with parameters: {}, {}", name, email);
        let saved = self.repository.save(User::new(name, email)).await?;
        self.cache.put(key, saved.clone()).await;
        Ok(saved)
    }

    // == Get ==
    /// Read-through on `id`. Fails with [`ServiceError::NotFound`] when the
    /// store has no such user, in which case nothing is cached.
    pub async fn get(&self, id: u64) -> Result<User> {
        let key = UserCacheKey::Id(id);
        if let Some(cached) = self.cache.get(&key).await {
            debug!(id, "get served from cache");
            return Ok(cached);
        }

        info!("getting user by id: {}", id);
        let user = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound(id))?;
        self.cache.put(key, user.clone()).await;
        Ok(user)
    }

    // == Create Or Return Cached ==
    /// Read-through on `user.name`.
    ///
    /// A hit skips the save entirely, so a different user with an already
    /// cached name is never stored and the caller gets the cached one back.
    /// Two concurrent misses on the same name both save.
    pub async fn create_or_return_cached(&self, user: User) -> Result<User> {
        let key = UserCacheKey::name(user.name.as_str());
        if let Some(cached) = self.cache.get(&key).await {
            debug!(name = %user.name, "create_or_return_cached served from cache");
            return Ok(cached);
        }

        info!("creating user: {:?}", user);
        let saved = self.repository.save(user).await?;
        self.cache.put(key, saved.clone()).await;
        Ok(saved)
    }

    // == Create And Refresh Cache ==
    /// Write-through on `user.name`: always saves, then overwrites the cached entry.
    pub async fn create_and_refresh_cache(&self, user: User) -> Result<User> {
        info!("creating user: {:?}", user);
        let key = UserCacheKey::name(user.name.as_str());
        let saved = self.repository.save(user).await?;
        self.cache.put(key, saved.clone()).await;
        Ok(saved)
    }

    // == Delete ==
    /// Deletes from the store only; cached copies stay until they expire.
    pub async fn delete(&self, id: u64) -> Result<()> {
        info!("deleting user by id: {}", id);
        self.repository.delete_by_id(id).await
    }

    // == Delete And Evict ==
    /// Deletes from the store, then evicts the id-keyed entry.
    ///
    /// A failed delete leaves the cache as it was. Name-keyed copies are not evicted.
    pub async fn delete_and_evict(&self, id: u64) -> Result<()> {
        info!("deleting user by id: {}", id);
        self.repository.delete_by_id(id).await?;
        self.cache.remove(&UserCacheKey::Id(id)).await;
        Ok(())
    }

    // == Get All ==
    /// Reads every user from the store; never cached.
    pub async fn get_all(&self) -> Result<Vec<User>> {
        self.repository.find_all().await
    }
}
