//! Cache keys for the users namespace.

use crate::cache::CacheStore;
use crate::users::User;

// == User Cache Key ==
/// Key of an entry in the users cache.
///
/// Id-keyed and name-keyed entries share one namespace but never match each
/// other: `Id(1)` and `Name("1")` are different keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum UserCacheKey {
    /// Entry cached by store-assigned identifier
    Id(u64),
    /// Entry cached by the caller-supplied name
    Name(String),
}

impl UserCacheKey {
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

impl From<u64> for UserCacheKey {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

/// The cache the user service reads through, refreshes and evicts from.
pub type UserCache = CacheStore<UserCacheKey, User>;
