//! Integration tests for the admin access gate.

mod common;

use std::sync::Arc;

use axum::http::{header, Method, StatusCode};
use common::{
    create_test_app, create_test_app_with_storage, empty_request, get_request, json_request,
    login, parse_response_body, send,
};
use persistence::{KeyValueStorage, MemoryStorage};
use serde_json::json;

#[tokio::test]
async fn test_admin_routes_redirect_to_login_without_session() {
    let app = create_test_app();

    for uri in [
        "/api/v1/admin",
        "/api/v1/admin/inquiries",
        "/api/v1/admin/settings",
        "/api/v1/admin/export/backup",
    ] {
        let response = send(&app, get_request(uri)).await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER, "{}", uri);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/api/v1/admin/login"
        );
    }
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected() {
    let app = create_test_app();

    let response = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/admin/login",
            json!({ "email": "admin@mkevents.com", "password": "admin1234" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let body = parse_response_body(response).await;
    assert_eq!(
        body["message"],
        "Invalid credentials. (Try: admin@mkevents.com / admin123)"
    );

    let session = parse_response_body(send(&app, get_request("/api/v1/admin/session")).await).await;
    assert_eq!(session["authenticated"], false);

    let response = send(&app, get_request("/api/v1/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_then_logout() {
    let app = create_test_app();

    let screen = parse_response_body(send(&app, get_request("/api/v1/admin/login")).await).await;
    assert_eq!(screen["authenticated"], false);
    assert_eq!(screen["loginPath"], "/api/v1/admin/login");

    login(&app).await;

    let session = parse_response_body(send(&app, get_request("/api/v1/admin/session")).await).await;
    assert_eq!(session["authenticated"], true);
    let response = send(&app, get_request("/api/v1/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, empty_request(Method::POST, "/api/v1/admin/logout")).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, get_request("/api/v1/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_flag_is_read_from_storage() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    storage.set_item("isAdminAuthenticated", "true").unwrap();
    let app = create_test_app_with_storage(storage.clone());

    let response = send(&app, get_request("/api/v1/admin")).await;
    assert_eq!(response.status(), StatusCode::OK);

    storage.set_item("isAdminAuthenticated", "false").unwrap();
    let response = send(&app, get_request("/api/v1/admin")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
}

#[tokio::test]
async fn test_login_persists_flag() {
    let storage: Arc<dyn KeyValueStorage> = Arc::new(MemoryStorage::new());
    let app = create_test_app_with_storage(storage.clone());

    login(&app).await;
    assert_eq!(
        storage.get_item("isAdminAuthenticated").unwrap().as_deref(),
        Some("true")
    );

    send(&app, empty_request(Method::POST, "/api/v1/admin/logout")).await;
    assert_eq!(storage.get_item("isAdminAuthenticated").unwrap(), None);
}
