// Catalogue loading and export tests
// Author: kelexine (https://github.com/kelexine)

use chrono::{TimeZone, Utc};
use fieldbook::catalog::{self, export, Capture, GpsFix};
use std::io::Write;
use uuid::Uuid;

fn sample_captures() -> Vec<Capture> {
    vec![
        Capture {
            id: Uuid::parse_str("3fa85f64-5717-4562-b3fc-2c963f66afa6").unwrap(),
            species: "Red Admiral".to_string(),
            scientific_name: Some("Vanessa atalanta".to_string()),
            confidence: 0.93,
            photo: "u1/admiral.jpg".to_string(),
            location: Some(GpsFix {
                latitude: 51.5074,
                longitude: -0.1278,
                accuracy_m: Some(8.0),
            }),
            captured_at: Utc.with_ymd_and_hms(2026, 8, 30, 10, 15, 0).unwrap(),
            notes: Some("On the buddleia, wings open".to_string()),
        },
        Capture {
            id: Uuid::parse_str("aaaaaaaa-bbbb-cccc-dddd-eeeeeeeeeeee").unwrap(),
            species: "European Robin".to_string(),
            scientific_name: None,
            confidence: 0.71,
            photo: "u1/robin.jpg".to_string(),
            location: None,
            captured_at: Utc.with_ymd_and_hms(2026, 8, 29, 7, 2, 0).unwrap(),
            notes: Some("Singing, then flew off".to_string()),
        },
    ]
}

#[test]
fn csv_export_has_header_and_one_row_per_capture() {
    let rendered = export::to_csv(&sample_captures());
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("id,species,scientific_name,confidence"));
    assert!(lines[1].contains("Red Admiral"));
    assert!(lines[1].contains("Vanessa atalanta"));
    assert!(lines[1].contains("51.5074"));
    assert!(lines[1].contains("±8 m (good)"));
    assert!(lines[2].contains("European Robin"));
}

#[test]
fn csv_export_escapes_commas_in_notes() {
    let rendered = export::to_csv(&sample_captures());
    assert!(rendered.contains("\"On the buddleia, wings open\""));
    // Unquoted fields stay unquoted
    assert!(rendered.contains(",Red Admiral,"));
}

#[test]
fn csv_export_leaves_missing_fields_empty() {
    let rendered = export::to_csv(&sample_captures());
    let robin_row = rendered.lines().nth(2).unwrap();
    // No scientific name and no location: empty cells, not placeholders
    assert!(robin_row.contains(",European Robin,,0.71,"));
    assert!(robin_row.contains("u1/robin.jpg,,,,"));
}

#[test]
fn json_export_round_trips() {
    let captures = sample_captures();
    let rendered = export::to_json(&captures).unwrap();
    let back: Vec<Capture> = serde_json::from_str(&rendered).unwrap();

    assert_eq!(back.len(), 2);
    assert_eq!(back[0].id, captures[0].id);
    assert_eq!(back[0].scientific_name, captures[0].scientific_name);
    assert_eq!(back[1].location.is_none(), true);
}

#[test]
fn catalogue_loads_from_json_file() {
    let rendered = export::to_json(&sample_captures()).unwrap();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(rendered.as_bytes()).unwrap();

    let loaded = catalog::load_catalog(file.path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].species, "Red Admiral");
}

#[test]
fn malformed_catalogue_file_is_an_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not a catalogue").unwrap();

    let result = catalog::load_catalog(file.path());
    assert!(result.is_err());
}
