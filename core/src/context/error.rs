//! Error types for configuration operations

use thiserror::Error;

/// Errors during configuration persistence
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration")]
    Load(#[source] confy::ConfyError),

    #[error("failed to save configuration")]
    Save(#[source] confy::ConfyError),

    #[error("tick period must be at least {min} ms (got {got})")]
    TickTooShort { min: u64, got: u64 },
}
