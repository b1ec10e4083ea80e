//! API Handlers
//!
//! HTTP request handlers, one per user service operation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::Config;
use crate::error::{Result, ServiceError};
use crate::models::{DeleteResponse, HealthResponse, StatsResponse, UserRequest};
use crate::users::{InMemoryUserRepository, User, UserCache, UserRepository, UserService};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Caching user service
    pub users: UserService,
}

impl AppState {
    /// Creates a new AppState around an already wired service.
    pub fn new(users: UserService) -> Self {
        Self { users }
    }

    /// Wires the given repository to a fresh cache configured from `config`.
    pub fn with_repository(config: &Config, repository: Arc<dyn UserRepository>) -> Self {
        let cache = Arc::new(UserCache::new(config.cache_name.clone(), config.cache_ttl()));
        Self::new(UserService::new(repository, cache))
    }

    /// Creates a new AppState backed by an in-memory repository.
    pub fn from_config(config: &Config) -> Self {
        Self::with_repository(config, Arc::new(InMemoryUserRepository::new()))
    }

    /// Shared handle to the user cache, e.g. for the cleanup task.
    pub fn cache(&self) -> Arc<UserCache> {
        self.users.cache().clone()
    }
}

fn validated(req: UserRequest) -> Result<UserRequest> {
    match req.validate() {
        Some(error_msg) => Err(ServiceError::InvalidRequest(error_msg)),
        None => Ok(req),
    }
}

/// Handler for POST /users
pub async fn create_handler(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>> {
    let req = validated(req)?;
    let user = state.users.create(User::new(req.name, req.email)).await?;
    Ok(Json(user))
}

/// Handler for POST /users/by-name
pub async fn create_with_handler(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>> {
    let req = validated(req)?;
    let user = state.users.create_with(&req.name, &req.email).await?;
    Ok(Json(user))
}

/// Handler for POST /users/cached
pub async fn create_or_return_cached_handler(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>> {
    let user: User = validated(req)?.into();
    let user = state.users.create_or_return_cached(user).await?;
    Ok(Json(user))
}

/// Handler for PUT /users/cached
pub async fn create_and_refresh_handler(
    State(state): State<AppState>,
    Json(req): Json<UserRequest>,
) -> Result<Json<User>> {
    let user: User = validated(req)?.into();
    let user = state.users.create_and_refresh_cache(user).await?;
    Ok(Json(user))
}

/// Handler for GET /users
pub async fn list_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.users.get_all().await?))
}

/// Handler for GET /users/:id
pub async fn get_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<User>> {
    Ok(Json(state.users.get(id).await?))
}

/// Handler for DELETE /users/:id
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.users.delete(id).await?;
    Ok(Json(DeleteResponse::new(id, false)))
}

/// Handler for DELETE /users/:id/cached
pub async fn delete_and_evict_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Result<Json<DeleteResponse>> {
    state.users.delete_and_evict(id).await?;
    Ok(Json(DeleteResponse::new(id, true)))
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.users.cache();
    let stats = cache.stats().await;
    let ttl_ms = u64::try_from(cache.ttl().as_millis()).unwrap_or(u64::MAX);

    Json(StatsResponse::new(cache.name(), ttl_ms, &stats))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
