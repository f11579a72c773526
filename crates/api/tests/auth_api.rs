//! HTTP-level integration tests for the auth endpoints.
//!
//! Covers registration, login, token refresh with rotation, logout, and
//! account lockout after repeated failures.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json, post_json_auth};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Register a user via the API and return the auth response JSON.
async fn register_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@test.com"),
        "password": password,
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await
}

/// Log in via the API and return the auth response JSON.
async fn login_user(app: axum::Router, username: &str, password: &str) -> serde_json::Value {
    let body = serde_json::json!({ "username": username, "password": password });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}

// ---------------------------------------------------------------------------
// Registration
// ---------------------------------------------------------------------------

/// Registration returns 201 with tokens and user info.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_success(pool: PgPool) {
    let app = common::build_test_app(pool);

    let json = register_user(app, "newreader", "a-long-password").await;

    assert!(json["access_token"].is_string());
    assert!(json["refresh_token"].is_string());
    assert!(json["expires_in"].is_number());
    assert_eq!(json["user"]["username"], "newreader");
    assert_eq!(json["user"]["email"], "newreader@test.com");
    assert_eq!(json["user"]["role"], "user");
}

/// Registering a taken username returns 409 CONFLICT.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_duplicate_username(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "taken", "a-long-password").await;

    let body = serde_json::json!({
        "username": "taken",
        "email": "other@test.com",
        "password": "a-long-password",
    });
    let response = post_json(app, "/api/v1/auth/register", body).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}

/// Malformed usernames and short passwords are rejected with 400.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_register_validation(pool: PgPool) {
    let app = common::build_test_app(pool);

    let bad_username = serde_json::json!({
        "username": "has spaces",
        "email": "x@test.com",
        "password": "a-long-password",
    });
    let response = post_json(app.clone(), "/api/v1/auth/register", bad_username).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let short_password = serde_json::json!({
        "username": "okname",
        "email": "ok@test.com",
        "password": "short",
    });
    let response = post_json(app, "/api/v1/auth/register", short_password).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Login / lockout
// ---------------------------------------------------------------------------

/// Login succeeds with the registered credentials.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_success(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "reader", "a-long-password").await;

    let json = login_user(app, "reader", "a-long-password").await;
    assert!(json["access_token"].is_string());
    assert_eq!(json["user"]["username"], "reader");
}

/// Wrong password and unknown username both return 401 with the same shape.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_login_rejections(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "reader", "a-long-password").await;

    let body = serde_json::json!({ "username": "reader", "password": "wrong" });
    let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let body = serde_json::json!({ "username": "ghost", "password": "whatever" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Five failed attempts lock the account; the next correct login gets 403.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_account_lockout(pool: PgPool) {
    let app = common::build_test_app(pool);
    register_user(app.clone(), "lockme", "a-long-password").await;

    for _ in 0..5 {
        let body = serde_json::json!({ "username": "lockme", "password": "wrong" });
        let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    let body = serde_json::json!({ "username": "lockme", "password": "a-long-password" });
    let response = post_json(app, "/api/v1/auth/login", body).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

// ---------------------------------------------------------------------------
// Refresh / logout
// ---------------------------------------------------------------------------

/// A refresh token is single-use: it yields new tokens once, then 401.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_rotates_tokens(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = register_user(app.clone(), "refresher", "a-long-password").await;
    let refresh_token = json["refresh_token"].as_str().unwrap().to_string();

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app.clone(), "/api/v1/auth/refresh", body.clone()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let rotated = body_json(response).await;
    assert_ne!(rotated["refresh_token"].as_str().unwrap(), refresh_token);

    // Replaying the old token must fail.
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Logout revokes the user's sessions, so refresh stops working.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_logout_revokes_sessions(pool: PgPool) {
    let app = common::build_test_app(pool);
    let json = register_user(app.clone(), "leaver", "a-long-password").await;
    let access_token = json["access_token"].as_str().unwrap();
    let refresh_token = json["refresh_token"].as_str().unwrap();

    let response = post_json_auth(
        app.clone(),
        "/api/v1/auth/logout",
        access_token,
        serde_json::json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let body = serde_json::json!({ "refresh_token": refresh_token });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A garbage refresh token is rejected.
#[sqlx::test(migrations = "../db/migrations")]
async fn test_refresh_with_unknown_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let body = serde_json::json!({ "refresh_token": "not-a-real-token" });
    let response = post_json(app, "/api/v1/auth/refresh", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
