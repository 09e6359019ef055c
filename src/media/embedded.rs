// Embedded (data-URI) image reference handling
// Author: kelexine (https://github.com/kelexine)

use crate::error::{FieldbookError, Result};
use crate::media::models::{validate_image_size, ImageFormat};
use base64::Engine;

/// A decoded embedded image reference.
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub format: ImageFormat,
    pub bytes: Vec<u8>,
}

/// An embedded reference carries its full pixel data inline and needs no
/// network fetch. These are displayed as-is and never resolved or cached.
pub fn is_embedded(reference: &str) -> bool {
    reference.starts_with("data:")
}

/// Decode a `data:<mime>;base64,<payload>` reference.
///
/// The MIME type is trusted when present and recognized; otherwise the
/// format is sniffed from the decoded magic bytes.
pub fn decode(reference: &str) -> Result<EmbeddedImage> {
    let rest = reference
        .strip_prefix("data:")
        .ok_or_else(|| FieldbookError::InvalidImage("Not a data URI".to_string()))?;

    let (header, payload) = rest
        .split_once(',')
        .ok_or_else(|| FieldbookError::InvalidImage("Data URI has no payload".to_string()))?;

    let (mime, is_base64) = match header.strip_suffix(";base64") {
        Some(mime) => (mime, true),
        None => (header, false),
    };
    if !is_base64 {
        return Err(FieldbookError::InvalidImage(
            "Only base64 data URIs are supported".to_string(),
        ));
    }

    let bytes = base64::engine::general_purpose::STANDARD
        .decode(payload)
        .map_err(|e| FieldbookError::InvalidImage(format!("Invalid base64 image data: {}", e)))?;

    validate_image_size(bytes.len())?;

    let format = ImageFormat::from_mime_type(mime)
        .or_else(|| ImageFormat::sniff(&bytes))
        .ok_or_else(|| {
            FieldbookError::InvalidImage(format!("Unsupported image format: {}", mime))
        })?;

    Ok(EmbeddedImage { format, bytes })
}
