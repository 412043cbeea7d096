use std::path::{Path, PathBuf};

use actix_multipart::form::tempfile::TempFile;
use chrono::Utc;
use rand::Rng;
use tokio::fs;
use tracing::debug;

use crate::{
    constants::{ALLOWED_IMAGE_TYPES, MAX_UPLOAD_BYTES},
    errors::AppError,
};

/// Persists accepted profile images under the upload directory and hands
/// back the relative reference that goes into the employee row. Stored files
/// are never deleted, even when superseded by a later upload.
#[derive(Debug, Clone)]
pub struct MediaStore {
    dir: String,
}

impl MediaStore {
    pub fn new(dir: impl Into<String>) -> Self {
        MediaStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        Path::new(&self.dir)
    }

    /// Validates the declared MIME type and size, then moves the spooled
    /// bytes into the upload directory under a collision-resistant name.
    /// Rejection happens before anything lands in the directory.
    pub async fn store(&self, upload: TempFile) -> Result<String, AppError> {
        let declared = upload.content_type.as_ref().map(|m| m.essence_str());
        validate_upload(declared, upload.size)?;

        fs::create_dir_all(&self.dir).await?;

        let original = upload.file_name.as_deref().unwrap_or("upload");
        let name = generate_name(original);
        let dest: PathBuf = Path::new(&self.dir).join(&name);

        // The temp file may live on another filesystem, so copy instead of
        // rename.
        fs::copy(upload.file.path(), &dest).await?;
        debug!(file = %dest.display(), size = upload.size, "stored profile image");

        Ok(format!("{}/{}", self.dir, name))
    }
}

pub fn validate_upload(declared_mime: Option<&str>, size: usize) -> Result<(), AppError> {
    match declared_mime {
        Some(mime) if ALLOWED_IMAGE_TYPES.contains(&mime) => {}
        Some(mime) => return Err(AppError::UnsupportedMediaType(mime.to_string())),
        None => return Err(AppError::UnsupportedMediaType("unknown".to_string())),
    }
    if size > MAX_UPLOAD_BYTES {
        return Err(AppError::PayloadTooLarge);
    }
    Ok(())
}

/// `<millis>-<random>-<original-name>`, with the caller-supplied name
/// reduced to its final path component.
fn generate_name(original: &str) -> String {
    let base = Path::new(original)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("upload");
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    format!("{}-{}-{}", Utc::now().timestamp_millis(), suffix, base)
}
