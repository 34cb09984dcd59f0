/**
 * Authorization Gate
 *
 * Protects routes that require a logged-in user. The gate reads the session
 * cookie, verifies the token, and hands the embedded identity to the
 * handler as an extractor value. A request with no cookie stops at 401, a
 * request with a bad token stops at 403, and in either case the handler
 * body never runs, so no store access or side effect happens first.
 */

use axum::extract::FromRequestParts;
use axum::http::{request::Parts, HeaderMap};

use crate::backend::auth::cookies;
use crate::backend::auth::sessions::{SessionSigner, SessionUser};
use crate::backend::error::ApiError;
use crate::backend::server::state::AppState;

/// Run the gate against a set of request headers
pub fn authorize(headers: &HeaderMap, signer: &SessionSigner) -> Result<SessionUser, ApiError> {
    let token = cookies::session_token(headers).ok_or(ApiError::Unauthorized)?;
    signer.verify(&token).map_err(|_| ApiError::InvalidToken)
}

/// Verified identity of the requesting user
///
/// Use as a handler argument on any route that requires a session.
#[derive(Clone, Debug)]
pub struct AuthUser(pub SessionUser);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = authorize(&parts.headers, &state.signer).map_err(|err| {
            tracing::warn!("rejected request to protected route: {}", err);
            err
        })?;

        Ok(AuthUser(user))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header, HeaderValue};

    fn signer() -> SessionSigner {
        SessionSigner::new("test-secret", 30)
    }

    fn ann() -> SessionUser {
        SessionUser {
            id: "651f1f77bcf86cd799439011".to_string(),
            email: "ann@example.com".to_string(),
            name: "Ann".to_string(),
        }
    }

    #[test]
    fn test_missing_cookie_is_unauthorized() {
        let result = authorize(&HeaderMap::new(), &signer());
        assert!(matches!(result, Err(ApiError::Unauthorized)));
    }

    #[test]
    fn test_bad_token_is_forbidden() {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_static("token=not.a.jwt"));

        let result = authorize(&headers, &signer());
        assert!(matches!(result, Err(ApiError::InvalidToken)));
    }

    #[test]
    fn test_valid_token_yields_identity() {
        let token = signer().issue(&ann()).unwrap();
        let mut headers = HeaderMap::new();
        headers.insert(
            header::COOKIE,
            HeaderValue::from_str(&format!("token={}", token)).unwrap(),
        );

        let user = authorize(&headers, &signer()).unwrap();
        assert_eq!(user, ann());
    }
}
