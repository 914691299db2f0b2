//! Photo Store
//!
//! Employee photos live under `<web_root>/images/` as
//! `<uuid-v4>_<original-filename>`. The database only keeps the bare
//! filename.

use std::path::{Path, PathBuf};

use axum::body::Bytes;
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::utils::{AppError, AppResult, ErrorCode};

/// Maximum file size (5MB)
pub const MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// Supported image formats
pub const SUPPORTED_FORMATS: &[&str] = &["png", "jpg", "jpeg", "webp"];

/// Images directory, relative to the web root
pub const IMAGES_DIR: &str = "images";

/// A photo received from a form submission
#[derive(Debug, Clone)]
pub struct PhotoUpload {
    /// Filename as sent by the client (may carry a path)
    pub file_name: String,
    pub data: Bytes,
}

impl PhotoUpload {
    pub fn new(file_name: impl Into<String>, data: impl Into<Bytes>) -> Self {
        Self {
            file_name: file_name.into(),
            data: data.into(),
        }
    }

    /// Final path component of the client filename
    pub fn base_name(&self) -> &str {
        base_name(&self.file_name)
    }
}

/// Strips both `/` and `\` separators, browsers on Windows may send either
fn base_name(name: &str) -> &str {
    name.rsplit(['/', '\\']).next().unwrap_or(name).trim()
}

/// Filesystem photo store rooted at the configured web root
#[derive(Debug, Clone)]
pub struct PhotoStore {
    images_dir: PathBuf,
}

impl PhotoStore {
    pub fn new(web_root: impl AsRef<Path>) -> Self {
        Self {
            images_dir: web_root.as_ref().join(IMAGES_DIR),
        }
    }

    pub fn images_dir(&self) -> &Path {
        &self.images_dir
    }

    /// Create the images directory if missing
    pub async fn ensure_dir(&self) -> std::io::Result<()> {
        tokio::fs::create_dir_all(&self.images_dir).await
    }

    /// Validate size, extension, and that the bytes decode as an image
    pub fn validate(upload: &PhotoUpload) -> AppResult<()> {
        let name = upload.base_name();
        if name.is_empty() || name == "." || name == ".." {
            return Err(AppError::new(ErrorCode::NoFilename));
        }

        // Check file size
        if upload.data.len() > MAX_FILE_SIZE {
            return Err(AppError::with_message(
                ErrorCode::FileTooLarge,
                format!(
                    "File too large. Maximum size is {} bytes ({}MB)",
                    MAX_FILE_SIZE,
                    MAX_FILE_SIZE / 1024 / 1024
                ),
            )
            .with_detail("size", upload.data.len()));
        }

        // Check file extension
        let ext = Path::new(name)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_lowercase)
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::InvalidFileExtension,
                    format!("Invalid file extension for: {}", name),
                )
            })?;
        if !SUPPORTED_FORMATS.contains(&ext.as_str()) {
            return Err(AppError::with_message(
                ErrorCode::UnsupportedFileFormat,
                format!(
                    "Unsupported file format '{}'. Supported: {}",
                    ext,
                    SUPPORTED_FORMATS.join(", ")
                ),
            ));
        }

        // Verify it's actually an image by trying to load it
        if let Err(e) = image::load_from_memory(&upload.data) {
            return Err(AppError::with_message(
                ErrorCode::InvalidImageFile,
                format!("Invalid image file ({}): {}", ext, e),
            ));
        }

        Ok(())
    }

    /// Write the photo under a fresh unique name
    ///
    /// `None` in, `None` out. The upload is expected to have passed
    /// [`PhotoStore::validate`]. A partially written file is removed.
    pub async fn store(&self, upload: Option<&PhotoUpload>) -> AppResult<Option<String>> {
        let Some(upload) = upload else {
            return Ok(None);
        };

        let file_name = format!("{}_{}", Uuid::new_v4(), upload.base_name());
        let file_path = self.images_dir.join(&file_name);

        self.ensure_dir()
            .await
            .map_err(|e| AppError::file_storage(format!("Failed to create images directory: {}", e)))?;

        if let Err(e) = write_file(&file_path, &upload.data).await {
            let _ = tokio::fs::remove_file(&file_path).await;
            return Err(AppError::file_storage(format!("Failed to save file: {}", e)));
        }

        tracing::info!(
            original_name = %upload.file_name,
            file_name = %file_name,
            size = upload.data.len(),
            "Photo stored"
        );

        Ok(Some(file_name))
    }

    /// Remove a stored photo; a file that is already gone only logs a warning
    pub async fn delete(&self, file_name: &str) -> AppResult<()> {
        let path = self.resolve(file_name)?;
        match tokio::fs::remove_file(&path).await {
            Ok(()) => {
                tracing::info!(file_name = %file_name, "Photo deleted");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(file_name = %file_name, "Photo to delete does not exist");
                Ok(())
            }
            Err(e) => Err(AppError::file_storage(format!(
                "Failed to delete photo {}: {}",
                file_name, e
            ))),
        }
    }

    /// Map a stored filename to its path, rejecting anything that is not a bare name
    pub fn resolve(&self, file_name: &str) -> AppResult<PathBuf> {
        // Security check: a single path component, never `.` or `..`
        if file_name.is_empty()
            || file_name == "."
            || file_name == ".."
            || file_name.contains(['/', '\\', '\0'])
        {
            return Err(AppError::invalid_request("Invalid filename"));
        }
        Ok(self.images_dir.join(file_name))
    }

    /// Read a stored photo
    pub async fn read(&self, file_name: &str) -> AppResult<Bytes> {
        let path = self.resolve(file_name)?;
        match tokio::fs::read(&path).await {
            Ok(content) => Ok(content.into()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                Err(AppError::new(ErrorCode::PhotoNotFound).with_detail("file_name", file_name))
            }
            Err(e) => Err(AppError::file_storage(format!(
                "Failed to read photo {}: {}",
                file_name, e
            ))),
        }
    }
}

/// The handle is dropped on every path out of this function
async fn write_file(path: &Path, data: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(path).await?;
    file.write_all(data).await?;
    file.flush().await?;
    Ok(())
}
