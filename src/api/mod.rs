//! API Module
//!
//! HTTP handlers and routing for the user service REST API.
//!
//! # Endpoints
//! - `POST /users` - Create a user, bypassing the cache
//! - `POST /users/by-name` - Create a user, read-through on name
//! - `POST /users/cached` - Create or return the user cached under the name
//! - `PUT /users/cached` - Save a user and refresh the name-keyed entry
//! - `GET /users` - List all users
//! - `GET /users/:id` - Fetch a user, read-through on id
//! - `DELETE /users/:id` - Delete a user, cache untouched
//! - `DELETE /users/:id/cached` - Delete a user and evict the id-keyed entry
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
