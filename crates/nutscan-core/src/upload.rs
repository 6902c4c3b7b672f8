use std::path::{Path, PathBuf};

use crate::consts::ACCEPTED_EXTENSIONS;
use crate::error::Result;

/// The single image picked for analysis.
#[derive(Clone, Debug)]
pub struct SelectedFile {
    pub path: PathBuf,
    pub name: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

impl SelectedFile {
    /// Read the file into memory. Callers filter with [`is_accepted_image`]
    /// first; an unknown extension falls back to `image/png`.
    pub fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)?;
        Ok(Self::from_bytes(path, bytes))
    }

    pub fn from_bytes(path: &Path, bytes: Vec<u8>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path: path.to_path_buf(),
            name,
            mime: mime_for(path).unwrap_or("image/png"),
            bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    /// Size in megabytes with two decimals, e.g. `1.25 MB`.
    pub fn size_label(&self) -> String {
        format!("{:.2} MB", self.size_bytes() as f64 / 1024.0 / 1024.0)
    }
}

fn lowercase_extension(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

/// MIME type for an accepted image path.
pub fn mime_for(path: &Path) -> Option<&'static str> {
    match lowercase_extension(path)?.as_str() {
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        _ => None,
    }
}

/// True for png/jpg/jpeg paths, case-insensitively.
pub fn is_accepted_image(path: &Path) -> bool {
    lowercase_extension(path)
        .map(|ext| ACCEPTED_EXTENSIONS.contains(&ext.as_str()))
        .unwrap_or(false)
}

/// Pick the file to use from a drop or picker result.
///
/// Only the first path is considered; if it is not an accepted image the
/// whole drop is ignored.
pub fn first_accepted<P: AsRef<Path>>(paths: &[P]) -> Option<PathBuf> {
    let first = paths.first()?.as_ref();
    if is_accepted_image(first) {
        Some(first.to_path_buf())
    } else {
        tracing::debug!("Ignoring non-image file: {}", first.display());
        None
    }
}
