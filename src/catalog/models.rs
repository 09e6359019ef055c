// Capture catalogue models
// Author: kelexine (https://github.com/kelexine)

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One species capture in the user's logbook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capture {
    /// Stable capture id.
    pub id: Uuid,

    /// Common species name from the classifier.
    pub species: String,

    /// Scientific (binomial) name, when the classifier provided one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scientific_name: Option<String>,

    /// Classifier confidence in `0.0..=1.0`.
    pub confidence: f32,

    /// Image reference for the capture photo: a bucket-relative storage
    /// path, a legacy public URL, or an embedded data URI.
    pub photo: String,

    /// Where the photo was taken, if location was available.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GpsFix>,

    /// When the capture was made.
    pub captured_at: DateTime<Utc>,

    /// Free-form user notes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A GPS fix recorded alongside a capture.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GpsFix {
    pub latitude: f64,
    pub longitude: f64,

    /// Horizontal accuracy radius in meters, when the device reported one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accuracy_m: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_deserializes_minimal_record() {
        let raw = r#"{
            "id": "3fa85f64-5717-4562-b3fc-2c963f66afa6",
            "species": "Red Admiral",
            "confidence": 0.93,
            "photo": "u1/img.jpg",
            "captured_at": "2026-08-30T10:15:00Z"
        }"#;

        let capture: Capture = serde_json::from_str(raw).unwrap();
        assert_eq!(capture.species, "Red Admiral");
        assert!(capture.scientific_name.is_none());
        assert!(capture.location.is_none());
        assert!(capture.notes.is_none());
    }

    #[test]
    fn test_capture_round_trips_full_record() {
        let capture = Capture {
            id: Uuid::new_v4(),
            species: "European Robin".to_string(),
            scientific_name: Some("Erithacus rubecula".to_string()),
            confidence: 0.88,
            photo: "u1/robin.jpg".to_string(),
            location: Some(GpsFix {
                latitude: 51.5,
                longitude: -0.12,
                accuracy_m: Some(8.0),
            }),
            captured_at: Utc::now(),
            notes: Some("Seen at the feeder".to_string()),
        };

        let json = serde_json::to_string(&capture).unwrap();
        let back: Capture = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, capture.id);
        assert_eq!(back.scientific_name, capture.scientific_name);
        assert_eq!(back.location.unwrap().accuracy_m, Some(8.0));
    }
}
