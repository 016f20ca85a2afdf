//! Common test utilities for integration tests.
//!
//! Every test builds its own router on top of a fresh in-memory storage, so
//! tests never share content or the admin flag.

// Helpers are shared by several test binaries; not every binary uses all of them.
#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    response::Response,
    Router,
};
use mk_events_api::{app::create_app, config::Config};
use persistence::{KeyValueStorage, MemoryStorage};
use serde_json::Value;
use tower::ServiceExt;

pub const ADMIN_EMAIL: &str = "admin@mkevents.com";
pub const ADMIN_PASSWORD: &str = "admin123";

/// Test configuration: memory backend, default admin credentials.
pub fn test_config() -> Config {
    Config::load_for_test(&[]).expect("Failed to load test config")
}

/// Create a test application router over fresh in-memory storage.
pub fn create_test_app() -> Router {
    create_test_app_with_storage(Arc::new(MemoryStorage::new()))
}

/// Create a test application router over the given storage.
pub fn create_test_app_with_storage(storage: Arc<dyn KeyValueStorage>) -> Router {
    create_app(test_config(), storage)
}

/// Helper to create a JSON request.
pub fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

/// Helper to create a GET request.
pub fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to create a bodyless request with any method.
pub fn empty_request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Helper to parse JSON response body.
pub async fn parse_response_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body).unwrap_or(Value::Null)
}

/// Helper to read a response body as text.
pub async fn response_text(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(body.to_vec()).unwrap()
}

/// Send one request through a clone of the router.
pub async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

/// Log in with the default credentials and assert success.
pub async fn login(app: &Router) {
    let response = send(
        app,
        json_request(
            Method::POST,
            "/api/v1/admin/login",
            serde_json::json!({ "email": ADMIN_EMAIL, "password": ADMIN_PASSWORD }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

/// Router with the admin flag already set.
pub async fn create_admin_app() -> Router {
    let app = create_test_app();
    login(&app).await;
    app
}
