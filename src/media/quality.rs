// Capture photo quality heuristics
// Author: kelexine (https://github.com/kelexine)

use crate::error::{FieldbookError, Result};
use image::GenericImageView;

/// Smallest side length the classifier accepts without upscaling
pub const MIN_DIMENSION: u32 = 224;

/// Mean-luma bounds for a usable exposure (0..=255)
pub const MIN_MEAN_LUMA: f32 = 30.0;
pub const MAX_MEAN_LUMA: f32 = 225.0;

/// Outcome of the pre-upload quality check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityVerdict {
    Good,
    TooSmall,
    TooDark,
    TooBright,
}

impl QualityVerdict {
    pub fn as_str(&self) -> &'static str {
        match self {
            QualityVerdict::Good => "good",
            QualityVerdict::TooSmall => "too small",
            QualityVerdict::TooDark => "too dark",
            QualityVerdict::TooBright => "too bright",
        }
    }
}

/// Measurements backing a quality verdict.
#[derive(Debug, Clone)]
pub struct QualityReport {
    pub width: u32,
    pub height: u32,
    pub mean_luma: f32,
    pub verdict: QualityVerdict,
}

/// Assess a capture photo before it is uploaded and classified.
///
/// Checks resolution first (an undersized photo is rejected regardless of
/// exposure), then mean luminance against the exposure bounds.
pub fn assess(bytes: &[u8]) -> Result<QualityReport> {
    let image = image::load_from_memory(bytes)
        .map_err(|e| FieldbookError::InvalidImage(format!("Undecodable image: {}", e)))?;

    let (width, height) = image.dimensions();
    let luma = image.to_luma8();
    let total: u64 = luma.pixels().map(|p| p.0[0] as u64).sum();
    let pixel_count = (width as u64 * height as u64).max(1);
    let mean_luma = total as f32 / pixel_count as f32;

    let verdict = if width.min(height) < MIN_DIMENSION {
        QualityVerdict::TooSmall
    } else if mean_luma < MIN_MEAN_LUMA {
        QualityVerdict::TooDark
    } else if mean_luma > MAX_MEAN_LUMA {
        QualityVerdict::TooBright
    } else {
        QualityVerdict::Good
    };

    Ok(QualityReport {
        width,
        height,
        mean_luma,
        verdict,
    })
}
