//! Configuration data structures for the fieldbook client.
//!
//! This module defines the schema for the application settings, including
//! the storage backend connection, signed-URL cache tuning, retry behavior,
//! and local rate limits.
//!
//! Author: kelexine (<https://github.com/kelexine>)

use serde::{Deserialize, Serialize};

/// The root configuration object for the application.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Object storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Signed-URL resolver cache settings.
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Retry behavior for backend calls.
    #[serde(default)]
    pub retry: RetryConfig,

    /// Local rate limits.
    #[serde(default)]
    pub limits: LimitsConfig,

    /// Logging and observability settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Settings for the object storage backend holding capture photos.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Base URL of the storage API, e.g. `https://<project>.supabase.co/storage/v1`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Bucket holding capture photos.
    /// Default: `captures`
    #[serde(default = "default_bucket")]
    pub bucket: String,

    /// API key sent as `apikey` and bearer token.
    /// Default: empty (anonymous access)
    #[serde(default)]
    pub api_key: String,

    /// Connection and request timeout in seconds.
    /// Default: `30`
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// How long a minted signed URL stays valid at the backend, in seconds.
    /// Default: `3600` (1 hour)
    #[serde(default = "default_validity")]
    pub signed_url_validity_seconds: u64,
}

/// Settings for the in-memory signed-URL cache.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolverConfig {
    /// How long a cached signed URL may be served, in seconds.
    /// Must stay below `signed_url_validity_seconds` so a cached entry is
    /// never handed out after the backend URL could have expired.
    /// Default: `3000` (50 minutes)
    #[serde(default = "default_cache_ttl")]
    pub cache_ttl_seconds: u64,

    /// Maximum number of cached signed URLs to keep.
    /// Default: `256`
    #[serde(default = "default_cache_entries")]
    pub max_cache_entries: usize,
}

/// Settings for retrying failed backend calls.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts per backend call.
    /// Default: `3`
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Initial backoff interval in milliseconds.
    /// Default: `500`
    #[serde(default = "default_initial_interval_ms")]
    pub initial_interval_ms: u64,

    /// Upper bound on a single backoff interval in milliseconds.
    /// Default: `30000`
    #[serde(default = "default_max_interval_ms")]
    pub max_interval_ms: u64,
}

/// Settings for client-side rate limiting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Maximum signed-URL mints per minute; `0` disables the limit.
    /// Default: `120`
    #[serde(default = "default_signing_per_minute")]
    pub signing_per_minute: u32,
}

/// Settings for application logging and output format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum log level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `info`
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format for logs (`pretty`, `json`, `compact`).
    /// Default: `pretty`
    #[serde(default = "default_log_format")]
    pub format: String,

    /// Whether to mask API keys and bearer tokens in logs.
    /// Default: `true`
    #[serde(default = "default_true")]
    pub sanitize_tokens: bool,
}

// Default trait implementations linking to custom logic

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            bucket: default_bucket(),
            api_key: String::new(),
            timeout_seconds: default_timeout(),
            signed_url_validity_seconds: default_validity(),
        }
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            cache_ttl_seconds: default_cache_ttl(),
            max_cache_entries: default_cache_entries(),
        }
    }
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_interval_ms: default_initial_interval_ms(),
            max_interval_ms: default_max_interval_ms(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            signing_per_minute: default_signing_per_minute(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            sanitize_tokens: true,
        }
    }
}

// Helper functions for serde defaults and shared constants

fn default_base_url() -> String {
    "http://127.0.0.1:54321/storage/v1".to_string()
}

fn default_bucket() -> String {
    "captures".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_validity() -> u64 {
    3600
}

fn default_cache_ttl() -> u64 {
    3000 // 50 minutes of a 60-minute validity window
}

fn default_cache_entries() -> usize {
    256
}

fn default_max_attempts() -> u32 {
    3
}

fn default_initial_interval_ms() -> u64 {
    500
}

fn default_max_interval_ms() -> u64 {
    30_000
}

fn default_signing_per_minute() -> u32 {
    120
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

fn default_true() -> bool {
    true
}
