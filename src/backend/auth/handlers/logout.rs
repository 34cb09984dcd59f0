/**
 * Logout Handler
 *
 * POST /api/logout clears the session cookie. The token itself stays valid
 * until it expires; the server keeps no session table to revoke it from.
 */
use axum::{
    http::header,
    response::{AppendHeaders, IntoResponse},
    Json,
};

use crate::backend::auth::cookies;

/// Logout handler
pub async fn logout() -> impl IntoResponse {
    let headers = AppendHeaders([(header::SET_COOKIE, cookies::clear_session_cookie())]);
    (headers, Json(serde_json::json!({ "message": "Logged out" })))
}
