//! HTTP 표면 통합 테스트.
//!
//! 서버를 띄우지 않고 `Router`를 `oneshot()`으로 직접 호출합니다.
//! Mock API는 지연 없이(`Latency::None`) 만듭니다.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use timesheet_backend::{
    routes::{app, AppState},
    services::{Latency, MockApi},
};
use tower::ServiceExt;

fn test_app() -> Router {
    let state = AppState {
        api: MockApi::in_memory(Latency::None),
    };
    app(state, None)
}

fn request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    builder.body(body).unwrap()
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

async fn login_token(app: &Router) -> String {
    let (_, body) = send(
        app,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "demo@example.com", "password": "password" })),
        ),
    )
    .await;
    body["data"]["token"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_login_with_demo_credentials() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "demo@example.com", "password": "password" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(
        body["data"]["user"],
        json!({ "id": "1", "email": "demo@example.com", "name": "John Doe" })
    );
    assert!(!body["data"]["token"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn test_login_with_wrong_password_is_401() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/auth/login",
            None,
            Some(json!({ "email": "demo@example.com", "password": "wrong" })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "message": "Invalid credentials" }));
}

#[tokio::test]
async fn test_login_with_malformed_body_is_500() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request(Method::POST, "/api/auth/login", None, Some(json!({ "email": 7 }))),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_logout_succeeds() {
    let app = test_app();
    let (status, body) = send(&app, request(Method::POST, "/api/auth/logout", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Logged out successfully");
}

#[tokio::test]
async fn test_list_requires_bearer_header() {
    let app = test_app();
    let (status, body) = send(&app, request(Method::GET, "/api/timesheets", None, None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "success": false, "message": "Unauthorized" }));

    // 토큰 내용은 검증하지 않습니다.
    let (status, body) = send(
        &app,
        request(Method::GET, "/api/timesheets", Some("anything"), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
}

#[tokio::test]
async fn test_create_entry_without_auth() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/timesheets",
            None,
            Some(json!({ "weekNumber": 6, "date": "2024-02-01", "hours": 10 })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let created = &body["data"];
    assert_eq!(created["status"], "incomplete");
    assert_eq!(created["userId"], "1");
    assert_eq!(created["weekNumber"], 6);
    assert_eq!(created["date"], "2024-02-01");

    let token = login_token(&app).await;
    let (_, list) = send(&app, request(Method::GET, "/api/timesheets", Some(&token), None)).await;
    let entries = list["data"].as_array().unwrap();
    assert_eq!(entries.len(), 6);
    assert!(entries.iter().any(|e| e["id"] == created["id"]));
}

#[tokio::test]
async fn test_create_with_malformed_body_is_500() {
    let app = test_app();
    let (status, body) = send(
        &app,
        request(
            Method::POST,
            "/api/timesheets",
            None,
            Some(json!({ "weekNumber": "six", "date": "2024-02-01", "hours": 10 })),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["success"], false);

    let bad = Request::builder()
        .method(Method::POST)
        .uri("/api/timesheets")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, _) = send(&app, bad).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_update_then_delete_entry() {
    let app = test_app();
    let token = login_token(&app).await;

    let (status, body) = send(
        &app,
        request(
            Method::PATCH,
            "/api/timesheets/3",
            Some(&token),
            Some(json!({ "status": "completed" })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "completed");
    assert_eq!(body["data"]["hours"], 42.0);
    assert_eq!(body["data"]["createdAt"], "2024-01-15T00:00:00Z");

    let (status, body) = send(
        &app,
        request(Method::DELETE, "/api/timesheets/3", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["message"], "Timesheet deleted successfully");

    let (status, body) = send(
        &app,
        request(Method::GET, "/api/timesheets/3", Some(&token), None),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Timesheet not found");
}

#[tokio::test]
async fn test_patch_unknown_entry_is_404() {
    let app = test_app();
    let (status, _) = send(
        &app,
        request(
            Method::PATCH,
            "/api/timesheets/999",
            Some("t"),
            Some(json!({ "hours": 1 })),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_health_reports_collection_size() {
    let app = test_app();
    let (status, body) = send(&app, request(Method::GET, "/api/health", None, None)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "ok", "entries": 5, "latencyMs": 0 }));
}
