//! Handler tests for the registration domain.
//!
//! These verify the HTTP surface in isolation: request deserialization,
//! outcome-to-status mapping, and response body shapes. They test only the
//! registration router, not the full application with docs and middleware.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use domain_registration::{
    handlers, Argon2PasswordHasher, InMemoryUserDirectory, RegistrationWorkflow, UserDirectory,
    UserResponse,
};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt; // For oneshot()

fn app(directory: InMemoryUserDirectory) -> Router {
    handlers::router(RegistrationWorkflow::new(directory, Argon2PasswordHasher))
}

// Helper to parse JSON response body
async fn json_body<T: serde::de::DeserializeOwned>(body: Body) -> T {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn register_request(payload: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(payload).unwrap()))
        .unwrap()
}

#[tokio::test]
async fn test_register_returns_201_and_user_body() {
    let directory = InMemoryUserDirectory::new();
    let app = app(directory.clone());

    let response = app
        .oneshot(register_request(&json!({
            "username": "alice",
            "password": "secret",
            "display_name": "Alice"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let user: UserResponse = json_body(response.into_body()).await;
    assert_eq!(user.username, "alice");
    assert_eq!(user.display_name.as_deref(), Some("Alice"));

    assert!(directory.exists("alice").await.unwrap());
}

#[tokio::test]
async fn test_register_response_never_leaks_password() {
    let app = app(InMemoryUserDirectory::new());

    let response = app
        .oneshot(register_request(&json!({
            "username": "alice",
            "password": "secret"
        })))
        .await
        .unwrap();

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn test_register_invalid_input_returns_400_with_violations() {
    let app = app(InMemoryUserDirectory::new());

    let response = app
        .oneshot(register_request(&json!({
            "username": "",
            "password": "x"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["violations"], json!(["username is required"]));
}

#[tokio::test]
async fn test_register_reports_all_violations_at_once() {
    let app = app(InMemoryUserDirectory::new());

    let response = app
        .oneshot(register_request(&json!({
            "username": "",
            "password": "",
            "email": "not-an-address"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    let violations = body["violations"].as_array().unwrap();
    assert_eq!(violations.len(), 3);
}

#[tokio::test]
async fn test_register_missing_body_returns_400_with_empty_violations() {
    let app = app(InMemoryUserDirectory::new());

    // No body, no content-type: the workflow's absent-input branch
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["violations"], json!([]));
}

#[tokio::test]
async fn test_register_duplicate_username_returns_409() {
    let directory = InMemoryUserDirectory::new();

    let payload = json!({
        "username": "alice",
        "password": "secret"
    });

    let response = app(directory.clone())
        .oneshot(register_request(&payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app(directory.clone())
        .oneshot(register_request(&payload))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let body: serde_json::Value = json_body(response.into_body()).await;
    assert_eq!(body["error"], "conflict");
}

#[tokio::test]
async fn test_register_conflict_is_case_insensitive() {
    let directory = InMemoryUserDirectory::new();

    let response = app(directory.clone())
        .oneshot(register_request(&json!({
            "username": "Alice",
            "password": "secret"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = app(directory)
        .oneshot(register_request(&json!({
            "username": "alice",
            "password": "secret"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}
