use std::path::Path;

use anyhow::{Context, Result};

/// A file picked for upload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileSelection {
    pub name: String,
    pub mime: String,
    pub size: u64,
    pub bytes: Vec<u8>,
}

impl FileSelection {
    pub fn new(name: &str, mime: &str, bytes: Vec<u8>) -> Self {
        Self {
            name: name.to_string(),
            mime: mime.to_string(),
            size: bytes.len() as u64,
            bytes,
        }
    }

    /// Read a file from disk. The MIME type comes from the extension.
    ///
    /// Files over the size limit are not read into memory; validation rejects them by
    /// `size` alone.
    pub fn from_path(path: &Path) -> Result<Self> {
        let meta =
            std::fs::metadata(path).with_context(|| format!("stat {}", path.display()))?;
        if !meta.is_file() {
            anyhow::bail!("{} is not a file", path.display());
        }
        let size = meta.len();
        let bytes = if size <= super::MAX_FILE_BYTES {
            std::fs::read(path).with_context(|| format!("read {}", path.display()))?
        } else {
            Vec::new()
        };
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "image".to_string());

        Ok(Self {
            name,
            mime: mime_for_path(path).to_string(),
            size,
            bytes,
        })
    }
}

pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" | "pjpeg" | "pjp" => "image/jpeg",
        "png" => "image/png",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}
