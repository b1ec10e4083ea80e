//! Durable user store.
//!
//! The service only depends on [`UserRepository`]; [`InMemoryUserRepository`]
//! is the backend the server ships with.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::Result;
use crate::users::User;

// == Repository Contract ==
/// Source of truth for users.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persists `user`, assigning an identifier if it has none, and returns the stored row.
    async fn save(&self, user: User) -> Result<User>;

    /// Looks up a user by identifier.
    async fn find_by_id(&self, id: u64) -> Result<Option<User>>;

    /// Returns every stored user.
    async fn find_all(&self) -> Result<Vec<User>>;

    /// Deletes the user with `id`, if any.
    async fn delete_by_id(&self, id: u64) -> Result<()>;
}

// == In-Memory Repository ==
/// Process-local repository with identity-style id generation starting at 1.
#[derive(Debug)]
pub struct InMemoryUserRepository {
    rows: RwLock<BTreeMap<u64, User>>,
    next_id: AtomicU64,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    /// Number of stored rows.
    pub async fn count(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl Default for InMemoryUserRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn save(&self, mut user: User) -> Result<User> {
        let mut rows = self.rows.write().await;

        // Known ids are updated in place; anything else gets a fresh id
        let id = match user.id {
            Some(id) if rows.contains_key(&id) => id,
            _ => self.next_id.fetch_add(1, Ordering::Relaxed),
        };
        user.id = Some(id);
        rows.insert(id, user.clone());

        debug!(id, "saved user row");
        Ok(user)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<User>> {
        Ok(self.rows.read().await.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>> {
        Ok(self.rows.read().await.values().cloned().collect())
    }

    async fn delete_by_id(&self, id: u64) -> Result<()> {
        if self.rows.write().await.remove(&id).is_some() {
            debug!(id, "deleted user row");
        }
        Ok(())
    }
}
