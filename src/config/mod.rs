// Configuration module
// Author: kelexine (https://github.com/kelexine)

mod models;

pub use models::*;

use crate::error::{FieldbookError, Result};
use config::{Config, Environment, File};
use std::path::PathBuf;

impl AppConfig {
    /// Load configuration from multiple sources with precedence:
    /// 1. Environment variables (highest)
    /// 2. Config file
    /// 3. Defaults (lowest)
    pub fn load() -> Result<Self> {
        let config = Config::builder()
            // Start with defaults
            .add_source(Config::try_from(&Self::default())?)
            // Load from config file if it exists
            .add_source(File::with_name(&Self::default_config_path()).required(false))
            // Override with environment variables (prefix: FIELDBOOK_)
            .add_source(Environment::with_prefix("FIELDBOOK").separator("_"))
            .build()
            .map_err(|e| FieldbookError::Config(e.to_string()))?;

        let loaded: Self = config
            .try_deserialize()
            .map_err(|e| FieldbookError::Config(e.to_string()))?;

        loaded.validate()?;
        Ok(loaded)
    }

    /// Reject settings that would break the cache safety margin.
    ///
    /// A cached signed URL must never outlive the URL itself, so the cache
    /// TTL has to stay strictly below the backend validity window.
    pub fn validate(&self) -> Result<()> {
        if self.resolver.cache_ttl_seconds >= self.storage.signed_url_validity_seconds {
            return Err(FieldbookError::Config(format!(
                "resolver.cache_ttl_seconds ({}) must be less than storage.signed_url_validity_seconds ({})",
                self.resolver.cache_ttl_seconds, self.storage.signed_url_validity_seconds
            )));
        }
        if self.retry.max_attempts == 0 {
            return Err(FieldbookError::Config(
                "retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    fn default_config_path() -> String {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".fieldbook")
            .join("config.toml")
            .to_string_lossy()
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert!(config.resolver.cache_ttl_seconds < config.storage.signed_url_validity_seconds);
    }

    #[test]
    fn test_cache_ttl_must_undercut_validity() {
        let mut config = AppConfig::default();
        config.resolver.cache_ttl_seconds = config.storage.signed_url_validity_seconds;
        assert!(config.validate().is_err());

        config.resolver.cache_ttl_seconds = config.storage.signed_url_validity_seconds + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_retry_attempts_rejected() {
        let mut config = AppConfig::default();
        config.retry.max_attempts = 0;
        assert!(config.validate().is_err());
    }
}
