//! Integration tests for CSV export, backup and reset.

mod common;

use axum::http::{header, Method, StatusCode};
use common::{
    create_admin_app, empty_request, get_request, json_request, parse_response_body,
    response_text, send,
};
use serde_json::{json, Value};

#[tokio::test]
async fn test_export_listing() {
    let app = create_admin_app().await;

    let body = parse_response_body(send(&app, get_request("/api/v1/admin/export")).await).await;
    let collections = body["collections"].as_array().unwrap();
    assert_eq!(collections.len(), 7);
    assert_eq!(collections[0]["collection"], "inquiries");
    assert_eq!(collections[0]["records"], 3);
    assert_eq!(collections[0]["path"], "/api/v1/admin/export/inquiries.csv");
    assert_eq!(body["backupPath"], "/api/v1/admin/export/backup");
}

#[tokio::test]
async fn test_csv_download() {
    let app = create_admin_app().await;

    let response = send(&app, get_request("/api/v1/admin/export/inquiries.csv")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "text/csv; charset=utf-8"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.starts_with("attachment; filename=\"inquiries_"));
    assert!(disposition.ends_with(".csv\""));

    let csv = response_text(response).await;
    let lines: Vec<&str> = csv.split("\r\n").filter(|l| !l.is_empty()).collect();
    assert_eq!(lines.len(), 4);
    assert!(lines[0].starts_with("id,name,phone,email,type"));
    assert!(lines[1].contains("Amit Patel"));

    let notice =
        parse_response_body(send(&app, get_request("/api/v1/admin/notification")).await).await;
    assert_eq!(notice["message"], "inquiries exported successfully!");
    assert_eq!(notice["kind"], "success");
}

#[tokio::test]
async fn test_csv_quotes_fields_with_commas() {
    let app = create_admin_app().await;

    send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/admin/faqs",
            json!({ "q": "Veg, or non-veg?", "a": "Both, \"your\" choice.", "cat": "Food" }),
        ),
    )
    .await;

    let csv = response_text(send(&app, get_request("/api/v1/admin/export/faqs.csv")).await).await;
    assert!(csv.contains("\"Veg, or non-veg?\""));
    assert!(csv.contains("\"Both, \"\"your\"\" choice.\""));
}

#[tokio::test]
async fn test_empty_collection_export_fails() {
    let app = create_admin_app().await;

    send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/admin/team/bulk-delete",
            json!({ "ids": [1, 2] }),
        ),
    )
    .await;

    let response = send(&app, get_request("/api/v1/admin/export/team.csv")).await;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = parse_response_body(response).await;
    assert_eq!(body["message"], "No data available to export for team.");

    let notice =
        parse_response_body(send(&app, get_request("/api/v1/admin/notification")).await).await;
    assert_eq!(notice["message"], "No data available to export for team.");
    assert_eq!(notice["kind"], "error");
}

#[tokio::test]
async fn test_unknown_export_is_not_found() {
    let app = create_admin_app().await;

    for uri in [
        "/api/v1/admin/export/users.csv",
        "/api/v1/admin/export/inquiries",
    ] {
        let response = send(&app, get_request(uri)).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "{}", uri);
    }
}

#[tokio::test]
async fn test_backup_download() {
    let app = create_admin_app().await;

    let response = send(&app, get_request("/api/v1/admin/export/backup")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CONTENT_TYPE).unwrap(),
        "application/json"
    );
    let disposition = response
        .headers()
        .get(header::CONTENT_DISPOSITION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert!(disposition.contains("mk_event_backup_"));

    let backup: Value = parse_response_body(response).await;
    assert_eq!(backup["meta"]["version"], "1.0");
    assert!(backup["meta"]["timestamp"].is_string());
    assert_eq!(backup["data"]["inquiries"].as_array().unwrap().len(), 3);
    assert_eq!(backup["data"]["gallery"].as_array().unwrap().len(), 9);
    assert!(backup["data"].get("settings").is_none());

    let notice =
        parse_response_body(send(&app, get_request("/api/v1/admin/notification")).await).await;
    assert_eq!(notice["message"], "Full system backup downloaded!");
}

#[tokio::test]
async fn test_reset_is_disabled() {
    let app = create_admin_app().await;

    let response = send(&app, empty_request(Method::POST, "/api/v1/admin/export/reset")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = parse_response_body(response).await;
    assert_eq!(body["data"], false);
    assert_eq!(
        body["notice"]["message"],
        "Reset functionality is disabled in demo mode."
    );
    assert_eq!(body["notice"]["kind"], "error");

    let dashboard = parse_response_body(send(&app, get_request("/api/v1/admin")).await).await;
    assert_eq!(dashboard["totalInquiries"], 3);
}
