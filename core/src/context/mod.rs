mod config;
mod error;

pub use config::{APP_NAME, AppConfig, AppConfigExt, AudioSettings};
pub use error::ConfigError;
