//! Test server construction and request helpers

use axum::http::header::SET_COOKIE;
use axum::http::{HeaderValue, StatusCode};
use axum_test::{TestResponse, TestServer};
use std::sync::Arc;
use tempfile::TempDir;

use staybook::backend::auth::SessionSigner;
use staybook::backend::routes::create_router;
use staybook::backend::server::state::{AppState, Stores};
use staybook::backend::uploads::PhotoStorage;

use super::memory::{MemoryBookingStore, MemoryPlaceStore, MemoryUserStore};

pub const TEST_ORIGIN: &str = "http://localhost:5173";
pub const TEST_SECRET: &str = "test-secret";

/// State over in-memory stores; keep the TempDir alive as long as the server
pub fn test_state() -> (AppState, TempDir) {
    let uploads = TempDir::new().expect("create uploads dir");
    let storage = PhotoStorage::create(uploads.path()).expect("open photo storage");
    let state = AppState {
        stores: Stores {
            users: Arc::new(MemoryUserStore::default()),
            places: Arc::new(MemoryPlaceStore::default()),
            bookings: Arc::new(MemoryBookingStore::default()),
        },
        signer: SessionSigner::new(TEST_SECRET, 1),
        storage,
    };
    (state, uploads)
}

/// Full router over in-memory stores
pub fn test_server() -> (TestServer, TempDir) {
    let (state, uploads) = test_state();
    let server = TestServer::new(create_router(state, TEST_ORIGIN)).expect("start test server");
    (server, uploads)
}

/// Same, but over caller-supplied state (e.g. an unavailable store)
pub fn test_server_with(state: AppState) -> TestServer {
    TestServer::new(create_router(state, TEST_ORIGIN)).expect("start test server")
}

/// Session token from a response's Set-Cookie header
pub fn session_cookie(response: &TestResponse) -> String {
    let raw = response.header(SET_COOKIE);
    let raw = raw.to_str().expect("cookie header is ascii");
    let (name, rest) = raw.split_once('=').expect("cookie has a value");
    assert_eq!(name, "token");
    rest.split(';').next().unwrap_or("").trim().to_string()
}

/// Cookie header value carrying a session token
pub fn cookie(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("token={}", token)).expect("token is ascii")
}

/// Register an account and sign in, answering the session token
pub async fn register_and_login(
    server: &TestServer,
    name: &str,
    email: &str,
    password: &str,
) -> String {
    let response = server
        .post("/api/register")
        .json(&serde_json::json!({ "name": name, "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);

    let response = server
        .post("/api/login")
        .json(&serde_json::json!({ "email": email, "password": password }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    session_cookie(&response)
}
