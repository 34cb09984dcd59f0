/**
 * Photo Storage
 *
 * Writes uploaded photo bytes into the configured directory and mints the
 * filenames they are served under. Names embed a timestamp plus a UUID so
 * concurrent uploads cannot collide; the only client-controlled part is a
 * sanitized extension.
 */

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Disk-backed photo storage
#[derive(Clone, Debug)]
pub struct PhotoStorage {
    dir: PathBuf,
}

impl PhotoStorage {
    /// Open storage at `dir`, creating the directory if needed
    pub fn create(dir: &Path) -> std::io::Result<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Directory the files live in; `/uploads` serves from here
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Save one uploaded photo, returning the filename it is served under
    pub async fn save_photo(&self, original_name: &str, data: &[u8]) -> std::io::Result<String> {
        let filename = format!(
            "{}-{}{}",
            unix_millis(),
            Uuid::new_v4().simple(),
            sanitized_extension(original_name)
        );
        tokio::fs::write(self.dir.join(&filename), data).await?;
        Ok(filename)
    }

    /// Save a photo fetched from a link; those are always stored as jpg
    pub async fn save_linked_photo(&self, data: &[u8]) -> std::io::Result<String> {
        let filename = format!("photo{}.jpg", unix_millis());
        tokio::fs::write(self.dir.join(&filename), data).await?;
        Ok(filename)
    }
}

fn unix_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default()
}

/// Keep only a plain alphanumeric extension from the client's filename
fn sanitized_extension(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .map(|ext| format!(".{}", ext.to_ascii_lowercase()))
        .unwrap_or_default()
}
