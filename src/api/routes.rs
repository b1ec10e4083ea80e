//! API Routes
//!
//! Configures the Axum router with all user service endpoints.

use axum::{
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    create_and_refresh_handler, create_handler, create_or_return_cached_handler,
    create_with_handler, delete_and_evict_handler, delete_handler, get_handler, health_handler,
    list_handler, stats_handler, AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/users", post(create_handler).get(list_handler))
        .route("/users/by-name", post(create_with_handler))
        .route(
            "/users/cached",
            post(create_or_return_cached_handler).put(create_and_refresh_handler),
        )
        .route("/users/:id", get(get_handler).delete(delete_handler))
        .route("/users/:id/cached", delete(delete_and_evict_handler))
        .route("/stats", get(stats_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
