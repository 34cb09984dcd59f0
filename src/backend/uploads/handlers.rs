//! HTTP handlers for photo uploads
//!
//! Both endpoints are public like the rest of the unauthenticated surface;
//! they write files but never touch identity-scoped data.

use axum::extract::{Multipart, State};
use axum::Json;

use crate::backend::error::ApiError;
use crate::backend::uploads::storage::PhotoStorage;
use crate::shared::uploads::{UploadByLinkRequest, UploadResponse};

/// Multipart field name the client sends photo files under
const PHOTOS_FIELD: &str = "photos";

/// Most photos accepted in one request
const MAX_PHOTOS: usize = 100;

/// POST /api/upload — save multipart photos, respond with their filenames
pub async fn upload_photos(
    State(storage): State<PhotoStorage>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(PHOTOS_FIELD) {
            continue;
        }
        if files.len() == MAX_PHOTOS {
            return Err(ApiError::bad_request("Too many files"));
        }

        let original_name = field.file_name().unwrap_or_default().to_string();
        let data = field.bytes().await?;

        let saved = storage.save_photo(&original_name, &data).await.map_err(|err| {
            tracing::error!("failed to store uploaded photo: {}", err);
            ApiError::internal("Failed to store uploaded file")
        })?;
        files.push(saved);
    }

    if files.is_empty() {
        return Err(ApiError::bad_request("No files uploaded"));
    }

    tracing::info!("stored {} uploaded photo(s)", files.len());
    Ok(Json(UploadResponse {
        status: "success".to_string(),
        files,
    }))
}

/// POST /api/upload-by-link — fetch an image URL and store it
///
/// Responds with the bare filename as a JSON string, the shape the photo
/// picker consumes.
pub async fn upload_by_link(
    State(storage): State<PhotoStorage>,
    Json(request): Json<UploadByLinkRequest>,
) -> Result<Json<String>, ApiError> {
    let link = request.link.trim();
    if !(link.starts_with("http://") || link.starts_with("https://")) {
        return Err(ApiError::validation("Link must be an http(s) URL"));
    }

    let data = fetch_image(link).await.map_err(|err| {
        tracing::warn!("image download failed for {}: {}", link, err);
        ApiError::internal("Failed to download image")
    })?;

    let saved = storage.save_linked_photo(&data).await.map_err(|err| {
        tracing::error!("failed to store downloaded photo: {}", err);
        ApiError::internal("Failed to download image")
    })?;

    Ok(Json(saved))
}

async fn fetch_image(link: &str) -> Result<Vec<u8>, reqwest::Error> {
    let client = reqwest::Client::new();
    let response = client.get(link).send().await?.error_for_status()?;
    Ok(response.bytes().await?.to_vec())
}
