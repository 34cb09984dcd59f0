//! Account Data Structures
//!
//! Request and response bodies for registration, login and profile
//! management. The stored credential hash never appears in any of these.

use serde::{Deserialize, Serialize};

/// A user as the API exposes it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    /// Document id (hex ObjectId)
    #[serde(rename = "_id")]
    pub id: String,
    /// Display name
    pub name: String,
    /// Login email, unique across accounts
    pub email: String,
}

/// Body of `POST /api/register`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Body of `PUT /api/profile`
///
/// `name` and `email` replace the stored values when present. A credential
/// change requires both `password` (the new one) and `current_password`,
/// which must match the stored hash before anything is written.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub current_password: Option<String>,
}

/// Response of `PUT /api/profile`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProfileUpdate {
    pub message: String,
    pub user: User,
}
