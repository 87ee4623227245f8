//! Shared configuration and domain types for the Envato Elements harvester.

pub mod app_config;
pub mod category;
pub mod config;

use thiserror::Error;

pub use app_config::{AppConfig, BrowserHeaders};
pub use category::{Category, DEFAULT_CATEGORIES};
pub use config::{load_app_config, load_app_config_from_env};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
