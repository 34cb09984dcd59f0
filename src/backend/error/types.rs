/**
 * Backend Error Types
 *
 * One variant per failure the API can hand to a client. Each maps to a
 * fixed HTTP status and a message safe to put on the wire; anything
 * internal stays in the logs.
 */

use axum::http::StatusCode;
use thiserror::Error;

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session cookie on an endpoint that requires one
    #[error("Unauthorized")]
    Unauthorized,

    /// Login with an unknown email or a wrong password
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// A session cookie was presented but failed verification
    #[error("Invalid token")]
    InvalidToken,

    /// The session is valid but does not own the target resource
    #[error("Forbidden")]
    Forbidden,

    /// Lookup miss on a path or body id
    #[error("{resource} not found")]
    NotFound {
        /// Resource noun as it appears in the response message
        resource: &'static str,
    },

    /// Credential rotation attempted with a wrong current password
    #[error("Current password is incorrect")]
    CredentialMismatch,

    /// Malformed or empty request where a usable body was required
    #[error("{message}")]
    BadRequest { message: String },

    /// The request body failed a store-level or handler-level constraint
    #[error("{message}")]
    Validation { message: String },

    /// The document store did not answer within bounds
    #[error("Service unavailable")]
    StoreUnavailable,

    /// Anything the client cannot act on
    #[error("{message}")]
    Internal { message: String },
}

impl ApiError {
    /// Lookup miss for the given resource noun ("User", "Place", ...)
    pub fn not_found(resource: &'static str) -> Self {
        Self::NotFound { resource }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Unauthorized | Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::InvalidToken | Self::Forbidden => StatusCode::FORBIDDEN,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::CredentialMismatch | Self::BadRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::StoreUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message placed in the JSON response body
    pub fn message(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_code_mapping() {
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::InvalidCredentials.status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ApiError::InvalidToken.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(ApiError::Forbidden.status_code(), StatusCode::FORBIDDEN);
        assert_eq!(
            ApiError::not_found("Place").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::CredentialMismatch.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::bad_request("No files uploaded").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::validation("bad").status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::StoreUnavailable.status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
        assert_eq!(
            ApiError::internal("boom").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_not_found_message_names_the_resource() {
        assert_eq!(ApiError::not_found("Booking").message(), "Booking not found");
    }

    #[test]
    fn test_wire_messages_match_api_contract() {
        assert_eq!(ApiError::Unauthorized.message(), "Unauthorized");
        assert_eq!(ApiError::InvalidCredentials.message(), "Invalid credentials");
        assert_eq!(ApiError::InvalidToken.message(), "Invalid token");
        assert_eq!(
            ApiError::CredentialMismatch.message(),
            "Current password is incorrect"
        );
    }
}
