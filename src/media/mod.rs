//! Image handling for capture photos.
//!
//! This module covers the two client-side concerns around a capture photo:
//! embedded (data-URI) references that carry their pixel data inline, and
//! the pre-upload quality heuristics the app runs before a photo is sent to
//! the classifier.
//!
//! # Submodules
//!
//! - `models`: Image formats, MIME detection, and validation constraints.
//! - `embedded`: Detection and decoding of data-URI image references.
//! - `quality`: Resolution and exposure heuristics.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod embedded;
pub mod models;
pub mod quality;

pub use embedded::is_embedded;
