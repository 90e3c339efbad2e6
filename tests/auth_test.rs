//! Integration tests for signup, login, and token enforcement

mod common;

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use common::{signup_user, spawn_app};

#[tokio::test]
async fn signup_returns_token_and_user() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body = response.json::<serde_json::Value>();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "alice");
    assert_eq!(body["user"]["email"], "alice@example.com");
    // Password material never leaves the server
    assert!(body["user"].get("password_hash").is_none());
}

#[tokio::test]
async fn signup_rejects_duplicate_username() {
    let app = spawn_app().await;
    signup_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "other@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn signup_rejects_short_password() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "alice@example.com",
            "password": "short",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn signup_rejects_invalid_email() {
    let app = spawn_app().await;

    let response = app
        .server
        .post("/auth/signup")
        .json(&serde_json::json!({
            "username": "alice",
            "email": "not-an-email",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn login_round_trip() {
    let app = spawn_app().await;
    signup_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert!(!body["token"].as_str().unwrap().is_empty());
    assert_eq!(body["user"]["username"], "alice");
}

#[tokio::test]
async fn login_accepts_email_as_username() {
    let app = spawn_app().await;
    signup_user(&app.server, "alice").await;

    let response = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "alice@example.com",
            "password": "password123",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;
    signup_user(&app.server, "alice").await;

    let wrong_password = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "alice",
            "password": "wrong-password",
        }))
        .await;

    let unknown_user = app
        .server
        .post("/auth/login")
        .json(&serde_json::json!({
            "username": "nobody",
            "password": "password123",
        }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.text(), unknown_user.text());
}

#[tokio::test]
async fn me_returns_authenticated_user() {
    let app = spawn_app().await;
    let token = signup_user(&app.server, "alice").await;

    let response = app.server.get("/auth/me").authorization_bearer(&token).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<serde_json::Value>();
    assert_eq!(body["username"], "alice");
}

#[tokio::test]
async fn protected_routes_require_token() {
    let app = spawn_app().await;

    let response = app.server.get("/documents").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_garbage_token() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/documents")
        .authorization_bearer("not.a.token")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn protected_routes_reject_malformed_header() {
    let app = spawn_app().await;

    let response = app
        .server
        .get("/documents")
        .add_header("Authorization", "Token abc")
        .await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}
