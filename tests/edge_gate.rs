//! Edge gate integration tests
//!
//! These exercise the gate and handler validation paths that reject a
//! request before any database access, so they run without PostgreSQL.

mod common;

use axum::http::StatusCode;
use chrono::Utc;
use uuid::Uuid;

use common::{create_offline_server, TEST_JWT_SECRET};
use reqmarket::backend::auth::sessions::issue_token;
use reqmarket::backend::auth::users::User;

fn valid_token() -> String {
    let user = User {
        id: Uuid::new_v4(),
        username: "gatekeeper".to_string(),
        email: "gate@example.com".to_string(),
        password_hash: "irrelevant".to_string(),
        avatar: None,
        created_at: Utc::now(),
    };
    issue_token(TEST_JWT_SECRET, &user).unwrap()
}

#[tokio::test]
async fn test_api_route_without_header_is_unauthorized() {
    let server = create_offline_server();

    let response = server.get("/api/requirements").await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn test_api_route_with_garbage_token_is_invalid_token() {
    let server = create_offline_server();

    let response = server
        .get("/api/requirements")
        .add_header("Authorization", "Bearer not.a.token")
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INVALID_TOKEN");
}

#[tokio::test]
async fn test_auth_prefix_is_exempt_from_the_gate() {
    let server = create_offline_server();

    // No Authorization header, yet the register handler runs and rejects
    // the empty body itself.
    let response = server
        .post("/api/auth/register")
        .json(&serde_json::json!({}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_FIELDS");
}

#[tokio::test]
async fn test_analyze_requires_fields() {
    let server = create_offline_server();

    let response = server
        .post("/api/requirements/analyze")
        .add_header("Authorization", format!("Bearer {}", valid_token()))
        .json(&serde_json::json!({"title": "only a title"}))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "MISSING_FIELDS");
}

#[tokio::test]
async fn test_analyze_without_configuration_is_internal_error() {
    let server = create_offline_server();

    let response = server
        .post("/api/requirements/analyze")
        .add_header("Authorization", format!("Bearer {}", valid_token()))
        .json(&serde_json::json!({
            "title": "a marketplace",
            "description": "somewhere to post requirements"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
}

#[tokio::test]
async fn test_page_route_without_cookie_redirects_to_login() {
    let server = create_offline_server();

    let response = server.get("/requirements").await;

    assert_eq!(response.status_code(), StatusCode::TEMPORARY_REDIRECT);
    let location = response
        .headers()
        .get("location")
        .and_then(|v| v.to_str().ok())
        .unwrap()
        .to_string();
    assert_eq!(location, "/login?from=/requirements");
}

#[tokio::test]
async fn test_page_route_with_valid_cookie_passes_the_gate() {
    let server = create_offline_server();

    let response = server
        .get("/dashboard")
        .add_header("Cookie", format!("token={}", valid_token()))
        .await;

    // Past the gate there is only the 404 fallback
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_public_paths_skip_the_gate() {
    let server = create_offline_server();

    for path in ["/", "/login", "/register", "/forgot-password"] {
        let response = server.get(path).await;
        assert_ne!(
            response.status_code(),
            StatusCode::TEMPORARY_REDIRECT,
            "{path} must not bounce to login"
        );
    }
}
