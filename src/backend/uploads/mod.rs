//! Uploads Module
//!
//! Photo ingestion: multipart uploads and by-link downloads. Files land in
//! the configured uploads directory and are served statically under
//! `/uploads/{filename}`.

pub mod handlers;
pub mod storage;

pub use storage::PhotoStorage;
