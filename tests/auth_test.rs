//! Account endpoint tests
//!
//! Register, login, logout and profile flows over the full router, with
//! in-memory stores standing in for the database.

mod common;

use axum::http::header::{COOKIE, SET_COOKIE};
use axum::http::StatusCode;
use common::helpers::{cookie, register_and_login, session_cookie, test_server, test_server_with, test_state};
use common::memory::UnavailableUserStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;

#[tokio::test]
async fn test_health_answers_ok() {
    let (server, _uploads) = test_server();

    let response = server.get("/api/health").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_register_creates_account() {
    let (server, _uploads) = test_server();

    let response = server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["name"], "Ann");
    assert_eq!(body["email"], "ann@example.com");
    assert!(body["_id"].is_string());
    // the credential hash never leaves the server
    assert!(body.get("password").is_none());
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_is_rejected() {
    let (server, _uploads) = test_server();

    let first = server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;
    assert_eq!(first.status_code(), StatusCode::CREATED);

    let second = server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "Imposter",
            "email": "ann@example.com",
            "password": "something-else"
        }))
        .await;
    assert_eq!(second.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    let body: serde_json::Value = second.json();
    assert_eq!(body["message"], "User registration failed");

    // the original account is the one the email still resolves to
    let login = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;
    assert_eq!(login.status_code(), StatusCode::OK);
    let user: serde_json::Value = login.json();
    assert_eq!(user["name"], "Ann");
}

#[tokio::test]
async fn test_login_sets_http_only_session_cookie() {
    let (server, _uploads) = test_server();

    server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "ann@example.com");

    let raw = response.header(SET_COOKIE);
    let raw = raw.to_str().unwrap();
    assert!(raw.starts_with("token="));
    assert!(raw.contains("HttpOnly"));
    assert!(raw.contains("SameSite=Lax"));
    assert!(!session_cookie(&response).is_empty());
}

#[tokio::test]
async fn test_login_unknown_email_and_wrong_password_answer_alike() {
    let (server, _uploads) = test_server();

    server
        .post("/api/register")
        .json(&serde_json::json!({
            "name": "Ann",
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    let unknown = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "nobody@example.com",
            "password": "hunter2hunter2"
        }))
        .await;
    let wrong = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "not-the-password"
        }))
        .await;

    assert_eq!(unknown.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong.status_code(), StatusCode::UNAUTHORIZED);
    // indistinguishable bodies, so the endpoint cannot probe for accounts
    assert_eq!(unknown.text(), wrong.text());
    // and no session cookie on either
    assert!(unknown.maybe_header(SET_COOKIE).is_none());
    assert!(wrong.maybe_header(SET_COOKIE).is_none());
}

#[tokio::test]
async fn test_profile_answers_null_when_anonymous() {
    let (server, _uploads) = test_server();

    let response = server.get("/api/profile").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert!(body.is_null());
}

#[tokio::test]
async fn test_profile_answers_user_with_session() {
    let (server, _uploads) = test_server();
    let token = register_and_login(&server, "Ann", "ann@example.com", "hunter2hunter2").await;

    let response = server
        .get("/api/profile")
        .add_header(COOKIE, cookie(&token))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["email"], "ann@example.com");
    assert_eq!(body["name"], "Ann");
}

#[tokio::test]
async fn test_profile_rejects_forged_token() {
    let (server, _uploads) = test_server();

    let response = server
        .get("/api/profile")
        .add_header(COOKIE, cookie("not.a.token"))
        .await;

    assert_eq!(response.status_code(), StatusCode::FORBIDDEN);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Invalid token");
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let (server, _uploads) = test_server();

    let response = server.post("/api/logout").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let raw = response.header(SET_COOKIE);
    let raw = raw.to_str().unwrap();
    assert!(raw.starts_with("token=;"));
    assert!(raw.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_update_profile_requires_session() {
    let (server, _uploads) = test_server();

    let response = server
        .put("/api/profile")
        .json(&serde_json::json!({ "name": "Nobody" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_update_profile_changes_name() {
    let (server, _uploads) = test_server();
    let token = register_and_login(&server, "Ann", "ann@example.com", "hunter2hunter2").await;

    let response = server
        .put("/api/profile")
        .add_header(COOKIE, cookie(&token))
        .json(&serde_json::json!({ "name": "Ann B." }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Profile updated successfully");
    assert_eq!(body["user"]["name"], "Ann B.");
    assert_eq!(body["user"]["email"], "ann@example.com");
}

#[tokio::test]
async fn test_update_profile_ignores_empty_fields() {
    let (server, _uploads) = test_server();
    let token = register_and_login(&server, "Ann", "ann@example.com", "hunter2hunter2").await;

    // untouched form fields arrive as empty strings
    let response = server
        .put("/api/profile")
        .add_header(COOKIE, cookie(&token))
        .json(&serde_json::json!({ "name": "", "email": "", "password": "" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["user"]["name"], "Ann");
    assert_eq!(body["user"]["email"], "ann@example.com");
}

#[tokio::test]
async fn test_password_change_requires_matching_current_password() {
    let (server, _uploads) = test_server();
    let token = register_and_login(&server, "Ann", "ann@example.com", "hunter2hunter2").await;

    let response = server
        .put("/api/profile")
        .add_header(COOKIE, cookie(&token))
        .json(&serde_json::json!({
            "password": "brand-new-password",
            "currentPassword": "wrong-guess"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Current password is incorrect");
}

#[tokio::test]
async fn test_password_change_takes_effect_on_next_login() {
    let (server, _uploads) = test_server();
    let token = register_and_login(&server, "Ann", "ann@example.com", "hunter2hunter2").await;

    let response = server
        .put("/api/profile")
        .add_header(COOKIE, cookie(&token))
        .json(&serde_json::json!({
            "password": "brand-new-password",
            "currentPassword": "hunter2hunter2"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let old = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;
    assert_eq!(old.status_code(), StatusCode::UNAUTHORIZED);

    let fresh = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "brand-new-password"
        }))
        .await;
    assert_eq!(fresh.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_unavailable_store_maps_to_503() {
    let (mut state, _uploads) = test_state();
    state.stores.users = Arc::new(UnavailableUserStore);
    let server = test_server_with(state);

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({
            "email": "ann@example.com",
            "password": "hunter2hunter2"
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    let body: serde_json::Value = response.json();
    assert_eq!(body["message"], "Service unavailable");
}

#[tokio::test]
async fn test_unknown_route_answers_404() {
    let (server, _uploads) = test_server();

    let response = server.get("/api/no-such-endpoint").await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_preflight_echoes_client_origin_with_credentials() {
    let (server, _uploads) = test_server();

    let response = server
        .method(axum::http::Method::OPTIONS, "/api/login")
        .add_header(axum::http::header::ORIGIN, common::helpers::TEST_ORIGIN)
        .add_header(
            axum::http::header::ACCESS_CONTROL_REQUEST_METHOD,
            "POST",
        )
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let allow_origin = response.header(axum::http::header::ACCESS_CONTROL_ALLOW_ORIGIN);
    assert_eq!(allow_origin.to_str().unwrap(), common::helpers::TEST_ORIGIN);
    let allow_credentials = response.header(axum::http::header::ACCESS_CONTROL_ALLOW_CREDENTIALS);
    assert_eq!(allow_credentials.to_str().unwrap(), "true");
}
