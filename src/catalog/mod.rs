//! Capture catalogue: models, loading, and export.
//!
//! A catalogue is the user's personal list of species captures. It is
//! synced as JSON by the app; this module loads that JSON and exports it
//! to CSV or pretty JSON for sharing.
//!
//! # Submodules
//!
//! - `models`: Capture records and GPS fixes.
//! - `gps`: GPS accuracy classification and display formatting.
//! - `export`: CSV and JSON serialization of a catalogue.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod export;
pub mod gps;
pub mod models;

pub use models::{Capture, GpsFix};

use crate::error::{FieldbookError, Result};
use std::path::Path;

/// Load a catalogue from a JSON file (an array of captures).
pub fn load_catalog(path: &Path) -> Result<Vec<Capture>> {
    let raw = std::fs::read_to_string(path)?;
    serde_json::from_str(&raw)
        .map_err(|e| FieldbookError::Catalog(format!("Unreadable catalogue {}: {}", path.display(), e)))
}
