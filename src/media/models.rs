// Image formats and validation constraints
// Author: kelexine (https://github.com/kelexine)

use crate::error::{FieldbookError, Result};

/// Supported capture photo formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Jpeg,
    Png,
    WebP,
    Gif,
    Heic,
}

impl ImageFormat {
    /// Get MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::WebP => "image/webp",
            ImageFormat::Gif => "image/gif",
            ImageFormat::Heic => "image/heic",
        }
    }

    /// Try to detect format from MIME type
    pub fn from_mime_type(mime: &str) -> Option<Self> {
        match mime.to_lowercase().as_str() {
            "image/jpeg" | "image/jpg" => Some(ImageFormat::Jpeg),
            "image/png" => Some(ImageFormat::Png),
            "image/webp" => Some(ImageFormat::WebP),
            "image/gif" => Some(ImageFormat::Gif),
            "image/heic" | "image/heif" => Some(ImageFormat::Heic),
            _ => None,
        }
    }

    /// Detect format from magic bytes at the start of image data
    pub fn sniff(data: &[u8]) -> Option<Self> {
        if data.len() < 12 {
            return None;
        }

        if data.starts_with(b"\xFF\xD8\xFF") {
            Some(ImageFormat::Jpeg)
        } else if data.starts_with(b"\x89PNG\r\n\x1a\n") {
            Some(ImageFormat::Png)
        } else if data.starts_with(b"GIF87a") || data.starts_with(b"GIF89a") {
            Some(ImageFormat::Gif)
        } else if data.starts_with(b"RIFF") && data[8..12] == *b"WEBP" {
            Some(ImageFormat::WebP)
        } else if data[4..12] == *b"ftypheic" || data[4..12] == *b"ftypheix" {
            Some(ImageFormat::Heic)
        } else {
            None
        }
    }
}

/// Upload limit enforced before a photo leaves the device
pub const MAX_IMAGE_SIZE_BYTES: usize = 10 * 1024 * 1024; // 10MB

/// Validate capture photo size
pub fn validate_image_size(data_len: usize) -> Result<()> {
    if data_len > MAX_IMAGE_SIZE_BYTES {
        return Err(FieldbookError::InvalidImage(format!(
            "Image size {} bytes exceeds maximum of {} bytes (10MB)",
            data_len, MAX_IMAGE_SIZE_BYTES
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_round_trip() {
        for format in [
            ImageFormat::Jpeg,
            ImageFormat::Png,
            ImageFormat::WebP,
            ImageFormat::Gif,
            ImageFormat::Heic,
        ] {
            assert_eq!(ImageFormat::from_mime_type(format.mime_type()), Some(format));
        }
        assert_eq!(ImageFormat::from_mime_type("image/jpg"), Some(ImageFormat::Jpeg));
        assert_eq!(ImageFormat::from_mime_type("application/pdf"), None);
    }

    #[test]
    fn test_sniff_png() {
        let mut data = b"\x89PNG\r\n\x1a\n".to_vec();
        data.extend_from_slice(&[0u8; 8]);
        assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Png));
    }

    #[test]
    fn test_sniff_jpeg() {
        let mut data = b"\xFF\xD8\xFF\xE0".to_vec();
        data.extend_from_slice(&[0u8; 12]);
        assert_eq!(ImageFormat::sniff(&data), Some(ImageFormat::Jpeg));
    }

    #[test]
    fn test_sniff_rejects_short_or_unknown() {
        assert_eq!(ImageFormat::sniff(b"\xFF\xD8"), None);
        assert_eq!(ImageFormat::sniff(&[0u8; 16]), None);
    }

    #[test]
    fn test_size_limit() {
        assert!(validate_image_size(1024).is_ok());
        assert!(validate_image_size(MAX_IMAGE_SIZE_BYTES).is_ok());
        assert!(validate_image_size(MAX_IMAGE_SIZE_BYTES + 1).is_err());
    }
}
