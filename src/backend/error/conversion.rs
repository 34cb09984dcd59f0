/**
 * Error Conversion
 *
 * IntoResponse for `ApiError` plus the From impls that funnel lower-level
 * failures into the API taxonomy. Driver errors are logged here and leave
 * only a generic message for the client.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::backend::auth::sessions::SessionInvalid;
use crate::backend::db::StoreError;
use crate::backend::error::types::ApiError;

impl IntoResponse for ApiError {
    /// Render the error as `{"message": "..."}` with its fixed status
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("internal error returned to client: {}", self);
        }
        let body = serde_json::json!({ "message": self.message() });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => ApiError::validation("Duplicate value for a unique field"),
            StoreError::Unavailable(detail) => {
                tracing::warn!("store unavailable: {}", detail);
                ApiError::StoreUnavailable
            }
            StoreError::Driver(driver) => {
                tracing::error!("store operation failed: {}", driver);
                ApiError::internal("Internal server error")
            }
        }
    }
}

impl From<SessionInvalid> for ApiError {
    fn from(_: SessionInvalid) -> Self {
        ApiError::InvalidToken
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::bad_request(format!("Malformed upload: {}", err))
    }
}
