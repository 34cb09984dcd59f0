/**
 * Login Handler
 *
 * This module implements credential verification for POST /api/login.
 *
 * # Authentication Process
 *
 * 1. Look up the account by email
 * 2. Verify the password against the stored bcrypt hash
 * 3. Issue a session token and set it as an HTTP-only cookie
 * 4. Return the user document
 *
 * # Security
 *
 * - Unknown email and wrong password answer the same 401, so the endpoint
 *   cannot be used to probe which addresses have accounts
 * - No Set-Cookie header is emitted on failure
 */
use axum::{
    extract::State,
    http::header,
    response::{AppendHeaders, IntoResponse},
    Json,
};
use bcrypt::verify;

use crate::backend::auth::cookies;
use crate::backend::auth::sessions::SessionUser;
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;
use crate::shared::users::LoginRequest;

use super::public_user;

/// Login handler
///
/// # Errors
///
/// * `401 Unauthorized` - unknown email or wrong password
/// * `503 Service Unavailable` - store did not answer in time
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let record = state
        .stores
        .users
        .find_by_email(&request.email)
        .await?
        .ok_or(ApiError::InvalidCredentials)?;

    let password_ok = verify(&request.password, &record.password_hash).map_err(|err| {
        tracing::error!("password verification failed: {}", err);
        ApiError::internal("Login failed")
    })?;
    if !password_ok {
        return Err(ApiError::InvalidCredentials);
    }

    let session_user = SessionUser {
        id: record.id.clone(),
        email: record.email.clone(),
        name: record.name.clone(),
    };
    let token = state.signer.issue(&session_user).map_err(|err| {
        tracing::error!("session token issue failed: {}", err);
        ApiError::internal("Login failed")
    })?;

    tracing::info!("user {} logged in", record.id);

    let headers = AppendHeaders([(header::SET_COOKIE, cookies::session_cookie(&token))]);
    Ok((headers, Json(public_user(record))))
}
