//! Main settings module

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Runtime environment enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RuntimeEnvironment {
    /// Development mode - relaxed validation, warnings only
    #[default]
    Development,
    /// Staging mode - stricter validation
    Staging,
    /// Production mode - all validations enforced
    Production,
}

impl RuntimeEnvironment {
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    /// Check if strict validation should be applied
    pub fn is_strict(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }
}

/// Main application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Runtime environment (development, staging, production)
    #[serde(default)]
    pub environment: RuntimeEnvironment,

    /// Language-model backend configuration
    #[serde(default)]
    pub llm: LlmSettings,

    /// Observability configuration
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Which completion backend to construct. The set is closed: the on-device
/// model session or the remote chat-completion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum LlmProvider {
    /// On-device system language model
    #[default]
    OnDevice,
    /// Remote chat-completion HTTP API
    Remote,
}

/// Language-model backend settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmSettings {
    /// Backend to use
    #[serde(default)]
    pub provider: LlmProvider,

    /// Chat-completion endpoint (remote provider only)
    #[serde(default = "default_llm_endpoint")]
    pub endpoint: String,

    /// Bearer credential (remote provider only).
    /// Usually supplied via `VITA_LLM__API_KEY` rather than a file.
    #[serde(default)]
    pub api_key: String,

    /// Model identifier (remote provider only)
    #[serde(default = "default_llm_model")]
    pub model: String,
}

fn default_llm_endpoint() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_llm_model() -> String {
    "gpt-4o-mini".to_string()
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            provider: LlmProvider::default(),
            endpoint: default_llm_endpoint(),
            api_key: String::new(),
            model: default_llm_model(),
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level for the `vita` crates when RUST_LOG is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON-formatted logs instead of human-readable ones
    #[serde(default)]
    pub log_json: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_json: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate settings
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.llm.provider == LlmProvider::Remote {
            if !self.llm.endpoint.starts_with("http") {
                return Err(ConfigError::InvalidValue {
                    field: "llm.endpoint".to_string(),
                    message: "Endpoint must be an http(s) URL".to_string(),
                });
            }

            // In strict environments a remote backend without credentials is
            // a deployment mistake; in development it surfaces per request.
            if self.environment.is_strict() {
                if self.llm.api_key.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "llm.api_key".to_string(),
                        message: "API key required for the remote provider".to_string(),
                    });
                }
                if self.llm.model.is_empty() {
                    return Err(ConfigError::InvalidValue {
                        field: "llm.model".to_string(),
                        message: "Model identifier required for the remote provider".to_string(),
                    });
                }
            }
        }

        Ok(())
    }
}

/// Load settings from files and environment.
///
/// Priority: env vars > `config/{env}.yaml` > `config/default.yaml` > defaults.
pub fn load_settings(env: Option<&str>) -> Result<Settings, ConfigError> {
    let mut builder = Config::builder();

    // Load default config
    builder = builder.add_source(File::with_name("config/default").required(false));

    // Load environment-specific config
    if let Some(env_name) = env {
        builder =
            builder.add_source(File::with_name(&format!("config/{}", env_name)).required(false));
    }

    // Load from environment variables
    builder = builder.add_source(
        Environment::with_prefix("VITA")
            .separator("__")
            .try_parsing(true),
    );

    let config = builder.build()?;
    let settings: Settings = config.try_deserialize()?;

    // Validate
    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.environment, RuntimeEnvironment::Development);
        assert_eq!(settings.llm.provider, LlmProvider::OnDevice);
        assert_eq!(
            settings.llm.endpoint,
            "https://api.openai.com/v1/chat/completions"
        );
        assert_eq!(settings.observability.log_level, "info");
        assert!(!settings.observability.log_json);
    }

    #[test]
    fn test_settings_from_yaml() {
        let yaml = r#"
environment: staging
llm:
  provider: remote
  api_key: sk-test
  model: gpt-4o
observability:
  log_json: true
"#;
        let settings: Settings = Config::builder()
            .add_source(File::from_str(yaml, FileFormat::Yaml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.environment, RuntimeEnvironment::Staging);
        assert_eq!(settings.llm.provider, LlmProvider::Remote);
        assert_eq!(settings.llm.model, "gpt-4o");
        // Unset fields keep their serde defaults
        assert_eq!(
            settings.llm.endpoint,
            "https://api.openai.com/v1/chat/completions"
        );
        assert!(settings.observability.log_json);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_strict_validation_requires_credentials() {
        let mut settings = Settings::default();
        settings.environment = RuntimeEnvironment::Production;
        settings.llm.provider = LlmProvider::Remote;
        settings.llm.api_key = String::new();

        let err = settings.validate().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "llm.api_key"));

        settings.llm.api_key = "sk-test".to_string();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_development_allows_missing_key() {
        let mut settings = Settings::default();
        settings.llm.provider = LlmProvider::Remote;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_remote_endpoint_must_be_http() {
        let mut settings = Settings::default();
        settings.llm.provider = LlmProvider::Remote;
        settings.llm.endpoint = "ftp://example.com".to_string();
        assert!(settings.validate().is_err());
    }
}
