/**
 * Session Management and JWT Tokens
 *
 * Issues and verifies the signed tokens that ride in the session cookie.
 * The signer is built once from configuration and injected through app
 * state, so nothing here reads the environment at request time.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Email
    pub email: String,
    /// Display name
    pub name: String,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
}

/// Identity carried by a verified session token
///
/// Holding a value of this type means signature and expiry checks already
/// passed; handlers never re-verify.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionUser {
    pub id: String,
    pub email: String,
    pub name: String,
}

/// Verification failure: missing pieces, wrong signature, garbage input,
/// or an expired token. Callers treat it as "no session", never as a
/// server fault.
#[derive(Debug, Error)]
#[error("session token invalid")]
pub struct SessionInvalid;

/// Issues and verifies session tokens with a single HS256 secret
#[derive(Clone)]
pub struct SessionSigner {
    secret: String,
    ttl_secs: u64,
}

impl SessionSigner {
    /// # Arguments
    /// * `secret` - HS256 signing secret
    /// * `ttl_days` - how long issued tokens stay valid
    pub fn new(secret: impl Into<String>, ttl_days: u64) -> Self {
        Self {
            secret: secret.into(),
            ttl_secs: ttl_days * 24 * 60 * 60,
        }
    }

    /// Create a signed token embedding the user's identity
    pub fn issue(&self, user: &SessionUser) -> Result<String, jsonwebtoken::errors::Error> {
        let now = unix_now();

        let claims = Claims {
            sub: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            exp: now + self.ttl_secs,
            iat: now,
        };

        let key = EncodingKey::from_secret(self.secret.as_ref());
        encode(&Header::default(), &claims, &key)
    }

    /// Verify signature and expiry, returning the embedded identity
    pub fn verify(&self, token: &str) -> Result<SessionUser, SessionInvalid> {
        let key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        let data = decode::<Claims>(token, &key, &validation).map_err(|_| SessionInvalid)?;

        Ok(SessionUser {
            id: data.claims.sub,
            email: data.claims.email,
            name: data.claims.name,
        })
    }
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
