//! Configuration management for the Vita chat backend
//!
//! Supports loading configuration from:
//! - YAML files (`config/default.yaml`, then `config/{env}.yaml`)
//! - Environment variables (`VITA_` prefix, `__` separator)
//!
//! Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.

pub mod settings;

pub use settings::{
    load_settings, LlmProvider, LlmSettings, ObservabilityConfig, RuntimeEnvironment, Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}
