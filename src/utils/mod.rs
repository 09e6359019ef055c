//! Utility functions and helpers for the fieldbook client.
//!
//! This module provides cross-cutting concerns like structured logging,
//! token sanitization, retry logic with backoff, and display-URL cache
//! busting.
//!
//! # Submodules
//!
//! - `logging`: Tracing and logging initialization with security filters.
//! - `retry`: Config-driven retry with exponential backoff.
//! - `version`: Version-based cache busting for display URLs.
//!
//! Author: kelexine (<https://github.com/kelexine>)

pub mod logging;
pub mod retry;
pub mod version;
