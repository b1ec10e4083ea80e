//! Request DTOs for the user API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;

use crate::users::User;

/// Request body for every user-creating endpoint.
///
/// `id` is only meaningful for `PUT /users/cached`, where a known id updates
/// the stored row.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRequest {
    #[serde(default)]
    pub id: Option<u64>,
    pub name: String,
    pub email: String,
}

impl UserRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        if self.name.is_empty() {
            return Some("Name cannot be empty".to_string());
        }
        None
    }
}

impl From<UserRequest> for User {
    fn from(req: UserRequest) -> Self {
        User {
            id: req.id,
            name: req.name,
            email: req.email,
        }
    }
}
