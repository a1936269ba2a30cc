//! HTTP Integration Tests
//!
//! Drives the full router in-process and checks that fragment endpoints
//! return HTML, API endpoints return JSON, and entry edits show up in the
//! next render.
//!
//! Run with: cargo test --test http_integration
#![cfg(feature = "server")]

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use portal_nav::api::{self, AppState};
use portal_nav::nav::{NavigationConfig, PathTable};

fn create_test_app() -> Router {
    api::router(AppState::new(
        NavigationConfig::default(),
        PathTable::canonical(),
    ))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, String) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), 1024 * 1024)
        .await
        .unwrap();
    (status, String::from_utf8_lossy(&body).to_string())
}

async fn get_body(app: &Router, uri: &str) -> (StatusCode, String) {
    send(app, Method::GET, uri, None).await
}

async fn get_json(app: &Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get_body(app, uri).await;
    let value = serde_json::from_str(&body)
        .unwrap_or_else(|e| panic!("{} did not return JSON ({}): {}", uri, e, body));
    (status, value)
}

#[tokio::test]
async fn status_reports_service_and_counts() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/status").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["service"], "portal-nav");
    assert_eq!(body["entries"]["main"], 14);
    assert_eq!(body["entries"]["faculty"], 9);
    assert_eq!(body["routes"], 25);
}

#[tokio::test]
async fn page_endpoint_resolves_locations() {
    let app = create_test_app();

    let (_, body) = get_json(&app, "/nav/page?path=/internal-datesheet/").await;
    assert_eq!(body["page"], "examination");

    let (_, body) = get_json(&app, "/nav/page?path=/unknown-path/").await;
    assert_eq!(body["page"], "home");

    let (_, body) = get_json(&app, "/nav/page").await;
    assert_eq!(body["path"], "/");
    assert_eq!(body["page"], "home");
}

#[tokio::test]
async fn nav_endpoint_renders_every_container() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/nav?path=/library/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["page"], "library");
    for id in ["moduleTabs", "navMenu", "adminTabs", "facultyTabs"] {
        assert!(body["containers"][id].is_string(), "missing container {}", id);
    }
    let main = body["containers"]["moduleTabs"].as_str().unwrap();
    assert!(main.contains(">LIBRARY</span>"));
    let faculty = body["containers"]["facultyTabs"].as_str().unwrap();
    assert!(!faculty.contains("<span"));
}

#[tokio::test]
async fn group_fragment_is_html() {
    let app = create_test_app();
    let (status, body) = get_body(&app, "/nav/admin?path=/admin-student-registration/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<li class=\"nav-item\">"));
    assert!(body.contains("<span class=\"btn btn-danger text-white\""));
}

#[tokio::test]
async fn unknown_group_is_not_found() {
    let app = create_test_app();
    let (status, body) = get_json(&app, "/nav/sidebar").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["error"].as_str().unwrap().contains("sidebar"));
}

#[tokio::test]
async fn entry_lifecycle_through_api() {
    let app = create_test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/nav/main",
        Some(json!({
            "id": "syllabus",
            "title": "SYLLABUS",
            "href": "syllabus.html",
            "icon": "bi-journal",
            "order": 15
        })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = get_json(&app, "/api/nav/main/syllabus").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["title"], "SYLLABUS");

    let (_, fragment) = get_body(&app, "/nav/main?path=/fees/").await;
    assert!(fragment.contains(r#"href="/syllabus/""#));

    let (status, body) = send(
        &app,
        Method::PATCH,
        "/api/nav/main/syllabus",
        Some(json!({"title": "COURSE SYLLABUS"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let patched: Value = serde_json::from_str(&body).unwrap();
    assert_eq!(patched["title"], "COURSE SYLLABUS");
    assert_eq!(patched["order"], 15);

    let (status, _) = send(&app, Method::DELETE, "/api/nav/main/syllabus", None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = get_json(&app, "/api/nav/main/syllabus").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn patch_of_missing_entry_is_not_found() {
    let app = create_test_app();
    let (status, _) = send(
        &app,
        Method::PATCH,
        "/api/nav/public/missing-id",
        Some(json!({"title": "x"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, list) = get_json(&app, "/api/nav/public").await;
    assert_eq!(list.as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn admin_and_faculty_are_read_only() {
    let app = create_test_app();

    let (status, _) = get_json(&app, "/api/nav/admin").await;
    assert_eq!(status, StatusCode::FORBIDDEN);

    let (status, _) = send(
        &app,
        Method::POST,
        "/api/nav/faculty",
        Some(json!({"id": "x", "title": "X", "href": "/x/", "order": 1})),
    )
    .await;
    assert_eq!(status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn preview_page_is_html() {
    let app = create_test_app();
    let (status, body) = get_body(&app, "/preview?path=/faculty-portal/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with("<!DOCTYPE html>"));
    assert!(body.contains(r#"<ul id="facultyTabs""#));
    assert!(body.contains("<code>faculty-portal</code>"));
}
