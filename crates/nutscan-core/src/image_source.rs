//! Turning the service's image references into pixels for display.

use std::path::Path;

use base64::Engine as _;
use image::DynamicImage;

use crate::error::{NutscanError, Result};

/// Raw payload of a `data:` URL. Base64 payloads are decoded; plain payloads
/// are returned as their bytes.
pub fn data_url_bytes(url: &str) -> Result<Vec<u8>> {
    let rest = url
        .strip_prefix("data:")
        .ok_or_else(|| NutscanError::InvalidDataUrl("missing 'data:' scheme".into()))?;
    let (meta, payload) = rest
        .split_once(',')
        .ok_or_else(|| NutscanError::InvalidDataUrl("missing ',' separator".into()))?;

    if meta.ends_with(";base64") {
        base64::engine::general_purpose::STANDARD
            .decode(payload.trim().as_bytes())
            .map_err(|e| NutscanError::InvalidDataUrl(e.to_string()))
    } else {
        Ok(payload.as_bytes().to_vec())
    }
}

/// Decode an image reference: a `data:` URL, or else a local file path.
pub fn decode_image(reference: &str) -> Result<DynamicImage> {
    if reference.starts_with("data:") {
        let bytes = data_url_bytes(reference)?;
        return Ok(image::load_from_memory(&bytes)?);
    }

    let path = Path::new(reference);
    if path.is_file() {
        Ok(image::open(path)?)
    } else {
        Err(NutscanError::InvalidDataUrl(format!(
            "unsupported image reference '{}'",
            truncate(reference, 48)
        )))
    }
}

/// Build a `data:image/png;base64,...` URL from PNG bytes.
pub fn png_data_url(png: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(png)
    )
}

fn truncate(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &s[..idx]),
        None => s.to_string(),
    }
}
