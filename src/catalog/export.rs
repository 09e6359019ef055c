// Catalogue export to CSV and JSON
// Author: kelexine (https://github.com/kelexine)

use crate::catalog::gps::format_accuracy;
use crate::catalog::models::Capture;
use crate::error::Result;

const CSV_HEADER: &str = "id,species,scientific_name,confidence,photo,latitude,longitude,accuracy,captured_at,notes";

/// Serialize a catalogue to CSV with a stable header row.
///
/// Fields follow RFC 4180 escaping: anything containing a comma, quote, or
/// newline is quoted, with embedded quotes doubled.
pub fn to_csv(captures: &[Capture]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');

    for capture in captures {
        let (latitude, longitude) = match capture.location {
            Some(fix) => (fix.latitude.to_string(), fix.longitude.to_string()),
            None => (String::new(), String::new()),
        };
        let accuracy = match capture.location {
            Some(fix) => format_accuracy(fix.accuracy_m),
            None => String::new(),
        };

        let row = [
            capture.id.to_string(),
            capture.species.clone(),
            capture.scientific_name.clone().unwrap_or_default(),
            format!("{:.2}", capture.confidence),
            capture.photo.clone(),
            latitude,
            longitude,
            accuracy,
            capture.captured_at.to_rfc3339(),
            capture.notes.clone().unwrap_or_default(),
        ];

        let line: Vec<String> = row.iter().map(|field| escape_csv(field)).collect();
        out.push_str(&line.join(","));
        out.push('\n');
    }

    out
}

/// Serialize a catalogue to pretty-printed JSON.
pub fn to_json(captures: &[Capture]) -> Result<String> {
    Ok(serde_json::to_string_pretty(captures)?)
}

fn escape_csv(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
