// GPS accuracy classification and formatting
// Author: kelexine (https://github.com/kelexine)

/// Qualitative bucket for a horizontal accuracy radius.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GpsAccuracy {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl GpsAccuracy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GpsAccuracy::Excellent => "excellent",
            GpsAccuracy::Good => "good",
            GpsAccuracy::Fair => "fair",
            GpsAccuracy::Poor => "poor",
        }
    }
}

/// Bucket an accuracy radius in meters.
pub fn classify(accuracy_m: f64) -> GpsAccuracy {
    if accuracy_m <= 5.0 {
        GpsAccuracy::Excellent
    } else if accuracy_m <= 15.0 {
        GpsAccuracy::Good
    } else if accuracy_m <= 50.0 {
        GpsAccuracy::Fair
    } else {
        GpsAccuracy::Poor
    }
}

/// Render an accuracy radius for display, e.g. `±8 m (good)`.
/// A missing radius renders as `unknown`.
pub fn format_accuracy(accuracy_m: Option<f64>) -> String {
    match accuracy_m {
        Some(radius) => format!("±{} m ({})", radius.round() as i64, classify(radius).as_str()),
        None => "unknown".to_string(),
    }
}
