//! Photo Upload Data Structures

use serde::{Deserialize, Serialize};

/// Response of `POST /api/upload`: saved filenames, servable under `/uploads`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    pub status: String,
    pub files: Vec<String>,
}

/// Body of `POST /api/upload-by-link`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadByLinkRequest {
    pub link: String,
}
