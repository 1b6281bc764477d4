//! Application configuration
//!
//! This module re-exports the shared preference types from intervals-types
//! and provides persistence for AppConfig.

use std::path::PathBuf;

pub use intervals_types::{AppConfig, AudioSettings};

use super::ConfigError;

/// Name under which confy stores the configuration file
pub const APP_NAME: &str = "intervals";

/// Smallest accepted tick period
const MIN_TICK_MILLIS: u64 = 10;

// ─────────────────────────────────────────────────────────────────────────────
// AppConfig Extensions
// ─────────────────────────────────────────────────────────────────────────────

/// Extension trait for AppConfig persistence
pub trait AppConfigExt: Sized {
    fn load() -> Self;
    fn try_load() -> Result<Self, ConfigError>;
    fn save(&self) -> Result<(), ConfigError>;
    fn config_path() -> Option<PathBuf>;
    fn validate(&self) -> Result<(), ConfigError>;
}

impl AppConfigExt for AppConfig {
    /// Load from disk, falling back to defaults on any error
    fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(error = %e, "Using default configuration");
                Self::default()
            }
        }
    }

    fn try_load() -> Result<Self, ConfigError> {
        let config: Self = confy::load(APP_NAME, "config").map_err(ConfigError::Load)?;
        config.validate()?;
        Ok(config)
    }

    fn save(&self) -> Result<(), ConfigError> {
        confy::store(APP_NAME, "config", self).map_err(ConfigError::Save)
    }

    fn config_path() -> Option<PathBuf> {
        confy::get_configuration_file_path(APP_NAME, "config").ok()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_millis < MIN_TICK_MILLIS {
            return Err(ConfigError::TickTooShort {
                min: MIN_TICK_MILLIS,
                got: self.tick_millis,
            });
        }
        Ok(())
    }
}
