//! Integration Tests for API Endpoints
//!
//! Tests the full request/response cycle for each endpoint.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;
use user_cache::{api::create_router, AppState, Config};

// == Helper Functions ==

fn create_test_app() -> Router {
    create_router(AppState::from_config(&Config::default()))
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    (status, body_to_json(response.into_body()).await)
}

// == Create Endpoints ==

#[tokio::test]
async fn test_create_endpoint_assigns_id() {
    let app = create_test_app();

    let (status, json) = send(
        &app,
        "POST",
        "/users",
        Some(r#"{"name":"alice","email":"a@x.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["id"], 1);
    assert_eq!(json["name"], "alice");
    assert_eq!(json["email"], "a@x.com");
}

#[tokio::test]
async fn test_create_endpoint_rejects_empty_name() {
    let app = create_test_app();

    let (status, json) = send(&app, "POST", "/users", Some(r#"{"name":"","email":"a@x.com"}"#)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(json["error"].as_str().unwrap().contains("Name"));
}

#[tokio::test]
async fn test_create_by_name_returns_cached_row() {
    let app = create_test_app();

    let (_, first) = send(
        &app,
        "POST",
        "/users/by-name",
        Some(r#"{"name":"alice","email":"a@x.com"}"#),
    )
    .await;
    let (status, second) = send(
        &app,
        "POST",
        "/users/by-name",
        Some(r#"{"name":"alice","email":"other@x.com"}"#),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(second, first);

    let (_, all) = send(&app, "GET", "/users", None).await;
    assert_eq!(all.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_cached_then_refresh() {
    let app = create_test_app();

    let (_, first) = send(
        &app,
        "POST",
        "/users/cached",
        Some(r#"{"name":"bob","email":"1@x.com"}"#),
    )
    .await;
    let (_, refreshed) = send(
        &app,
        "PUT",
        "/users/cached",
        Some(r#"{"name":"bob","email":"2@x.com"}"#),
    )
    .await;
    assert_ne!(refreshed["id"], first["id"]);

    // Read-through under the name now sees the refreshed row
    let (_, cached) = send(
        &app,
        "POST",
        "/users/cached",
        Some(r#"{"name":"bob","email":"3@x.com"}"#),
    )
    .await;
    assert_eq!(cached, refreshed);
}

// == Read Endpoints ==

#[tokio::test]
async fn test_get_endpoint_success() {
    let app = create_test_app();
    send(
        &app,
        "POST",
        "/users",
        Some(r#"{"name":"alice","email":"a@x.com"}"#),
    )
    .await;

    let (status, json) = send(&app, "GET", "/users/1", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["name"], "alice");
}

#[tokio::test]
async fn test_get_endpoint_not_found() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/users/42", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "User not found by id 42");
}

#[tokio::test]
async fn test_list_endpoint() {
    let app = create_test_app();
    for name in ["a", "b", "c"] {
        let body = format!(r#"{{"name":"{}","email":"{}@x.com"}}"#, name, name);
        send(&app, "POST", "/users", Some(&body)).await;
    }

    let (status, json) = send(&app, "GET", "/users", None).await;

    assert_eq!(status, StatusCode::OK);
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, ["a", "b", "c"]);
}

// == Delete Endpoints ==

#[tokio::test]
async fn test_delete_serves_stale_cached_copy() {
    let app = create_test_app();
    send(&app, "POST", "/users", Some(r#"{"name":"alice","email":"a@x.com"}"#)).await;
    send(&app, "GET", "/users/1", None).await;

    let (status, json) = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["evicted"], false);

    // Cached under the id, so still readable until it expires
    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_delete_and_evict_endpoint() {
    let app = create_test_app();
    send(&app, "POST", "/users", Some(r#"{"name":"alice","email":"a@x.com"}"#)).await;
    send(&app, "GET", "/users/1", None).await;

    let (status, json) = send(&app, "DELETE", "/users/1/cached", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["evicted"], true);

    let (status, _) = send(&app, "GET", "/users/1", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// == Stats & Health ==

#[tokio::test]
async fn test_stats_endpoint_counts_hits_and_misses() {
    let app = create_test_app();
    send(&app, "POST", "/users", Some(r#"{"name":"alice","email":"a@x.com"}"#)).await;
    send(&app, "GET", "/users/1", None).await; // miss, then cached
    send(&app, "GET", "/users/1", None).await; // hit

    let (status, json) = send(&app, "GET", "/stats", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["cache"], "users");
    assert_eq!(json["hits"], 1);
    assert_eq!(json["misses"], 1);
    assert_eq!(json["total_entries"], 1);
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json.get("timestamp").is_some());
}
