/**
 * Registration Handler
 *
 * This module implements account creation for POST /api/register.
 *
 * # Registration Process
 *
 * 1. Hash the password with bcrypt
 * 2. Insert the account; the unique email index arbitrates races
 * 3. Return the created user with 201
 *
 * # Security
 *
 * - Only the bcrypt hash is stored; the response carries no credential
 * - A taken email answers 422 with the same message regardless of cause
 */
use axum::{extract::State, http::StatusCode, Json};

use crate::backend::auth::users::NewUser;
use crate::backend::db::StoreError;
use crate::backend::error::ApiError;
use crate::backend::server::state::Stores;
use crate::shared::users::{RegisterRequest, User};

use super::public_user;

/// Registration handler
///
/// # Errors
///
/// * `422 Unprocessable Entity` - email already registered
/// * `503 Service Unavailable` - store did not answer in time
pub async fn register(
    State(stores): State<Stores>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let password_hash = bcrypt::hash(&request.password, bcrypt::DEFAULT_COST).map_err(|err| {
        tracing::error!("password hashing failed: {}", err);
        ApiError::internal("User registration failed")
    })?;

    let created = stores
        .users
        .create(NewUser {
            name: request.name,
            email: request.email,
            password_hash,
        })
        .await
        .map_err(|err| match err {
            StoreError::Duplicate => ApiError::validation("User registration failed"),
            other => ApiError::from(other),
        })?;

    tracing::info!("registered user {}", created.id);
    Ok((StatusCode::CREATED, Json(public_user(created))))
}
