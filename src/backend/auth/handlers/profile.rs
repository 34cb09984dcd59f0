/**
 * Profile Handlers
 *
 * GET /api/profile reads the session cookie directly instead of going through
 * the auth extractor: an anonymous request is a normal occurrence here (the
 * client probes this endpoint on page load) and answers `200 null` rather
 * than 401. A cookie that is present but fails verification is still a 403.
 *
 * PUT /api/profile updates name, email and password for the signed-in user.
 * Changing the password requires the current one.
 */
use axum::{extract::State, http::HeaderMap, Json};
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::backend::auth::cookies;
use crate::backend::auth::users::ProfilePatch;
use crate::backend::error::ApiError;
use crate::backend::middleware::AuthUser;
use crate::backend::server::state::AppState;
use crate::shared::users::{ProfileUpdate, UpdateProfileRequest, User};

use super::public_user;

/// Current-user lookup
///
/// Answers `null` when no session cookie is present, the user document when
/// one is. A cookie that fails verification is rejected with 403.
pub async fn get_profile(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Json<Option<User>>, ApiError> {
    let token = match cookies::session_token(&headers) {
        Some(token) => token,
        None => return Ok(Json(None)),
    };
    let session = state.signer.verify(&token)?;

    let user = state.stores.users.find_by_id(&session.id).await?;
    Ok(Json(user.map(public_user)))
}

/// Profile update handler
///
/// Empty strings are treated as "leave unchanged", matching how the client
/// submits untouched form fields.
///
/// # Errors
///
/// * `400 Bad Request` - current password does not match
/// * `404 Not Found` - the session references a deleted account
pub async fn update_profile(
    State(state): State<AppState>,
    AuthUser(session): AuthUser,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileUpdate>, ApiError> {
    let record = state
        .stores
        .users
        .find_by_id(&session.id)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    let mut patch = ProfilePatch {
        name: request.name.filter(|name| !name.is_empty()),
        email: request.email.filter(|email| !email.is_empty()),
        ..ProfilePatch::default()
    };

    if let Some(password) = request.password.filter(|password| !password.is_empty()) {
        let current = request.current_password.unwrap_or_default();
        let current_ok = verify(&current, &record.password_hash).map_err(|err| {
            tracing::error!("password verification failed: {}", err);
            ApiError::internal("Profile update failed")
        })?;
        if !current_ok {
            return Err(ApiError::CredentialMismatch);
        }

        let password_hash = hash(&password, DEFAULT_COST).map_err(|err| {
            tracing::error!("password hashing failed: {}", err);
            ApiError::internal("Profile update failed")
        })?;
        patch.password_hash = Some(password_hash);
    }

    let updated = state
        .stores
        .users
        .update_profile(&session.id, patch)
        .await?
        .ok_or_else(|| ApiError::not_found("User"))?;

    tracing::info!("user {} updated their profile", session.id);

    Ok(Json(ProfileUpdate {
        message: "Profile updated successfully".to_string(),
        user: public_user(updated),
    }))
}
