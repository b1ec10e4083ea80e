//! User entity.

use serde::{Deserialize, Serialize};

// == User ==
/// A user row as held by the durable store.
///
/// `id` is `None` until the store assigns one on first save and never
/// changes afterwards. Caches hold independent copies of this value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates an unsaved user.
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
        }
    }

    /// Returns a copy carrying the given identifier.
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }
}
