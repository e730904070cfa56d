//! Backend factory
//!
//! Maps a `BackendConfig` to a constructed `CompletionBackend`. The
//! configuration enum is closed: exactly two backends exist and selection
//! happens once, at session start.

use std::sync::Arc;

use vita_config::{LlmProvider, LlmSettings};
use vita_core::{CompletionBackend, CompletionError};

use crate::http::{HttpBackend, HttpConfig};
use crate::on_device::{LocalModelRuntime, OnDeviceBackend, SystemModelRuntime};

/// Default chat-completion endpoint for the `openai` constructor.
const OPENAI_CHAT_ENDPOINT: &str = "https://api.openai.com/v1/chat/completions";

/// Which backend to construct. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BackendConfig {
    /// On-device system language model
    OnDevice,
    /// Remote chat-completion HTTP API
    Remote {
        endpoint: String,
        api_key: String,
        model: String,
    },
}

impl BackendConfig {
    /// Remote backend against an explicit endpoint.
    pub fn remote(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Self {
        Self::Remote {
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Remote backend against the OpenAI chat-completion endpoint.
    pub fn openai(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self::remote(OPENAI_CHAT_ENDPOINT, api_key, model)
    }

    /// Derive the backend selection from loaded settings.
    pub fn from_settings(llm: &LlmSettings) -> Self {
        match llm.provider {
            LlmProvider::OnDevice => Self::OnDevice,
            LlmProvider::Remote => Self::Remote {
                endpoint: llm.endpoint.clone(),
                api_key: llm.api_key.clone(),
                model: llm.model.clone(),
            },
        }
    }
}

/// Factory for creating completion backends.
pub struct LlmFactory;

impl LlmFactory {
    /// Create a backend for the given configuration.
    ///
    /// Deterministic, no side effects beyond construction; equal configs
    /// yield independent instances. Validation is whatever each backend's
    /// own constructor performs.
    pub fn create(config: &BackendConfig) -> Result<Arc<dyn CompletionBackend>, CompletionError> {
        Self::create_with_runtime(config, Arc::new(SystemModelRuntime))
    }

    /// Create a backend, injecting the local-model runtime used by the
    /// on-device variant. Platform integrations and tests wire their own
    /// runtime through here; `create` uses the system probe.
    pub fn create_with_runtime(
        config: &BackendConfig,
        runtime: Arc<dyn LocalModelRuntime>,
    ) -> Result<Arc<dyn CompletionBackend>, CompletionError> {
        match config {
            BackendConfig::OnDevice => Ok(Arc::new(OnDeviceBackend::new(runtime))),
            BackendConfig::Remote {
                endpoint,
                api_key,
                model,
            } => {
                let backend = HttpBackend::new(HttpConfig {
                    endpoint: endpoint.clone(),
                    api_key: api_key.clone(),
                    model: model.clone(),
                })?;
                Ok(Arc::new(backend))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use crate::on_device::LocalModelSession;

    struct StaticRuntime;

    struct StaticSession;

    #[async_trait]
    impl LocalModelSession for StaticSession {
        async fn respond(&self, _input: &str) -> Result<String, CompletionError> {
            Ok("on-device reply".to_string())
        }
    }

    #[async_trait]
    impl LocalModelRuntime for StaticRuntime {
        fn is_available(&self) -> bool {
            true
        }

        async fn create_session(&self) -> Result<Box<dyn LocalModelSession>, CompletionError> {
            Ok(Box::new(StaticSession))
        }
    }

    #[test]
    fn test_openai_constructor_uses_default_endpoint() {
        let config = BackendConfig::openai("sk-test", "gpt-4o-mini");
        assert_eq!(
            config,
            BackendConfig::Remote {
                endpoint: OPENAI_CHAT_ENDPOINT.to_string(),
                api_key: "sk-test".to_string(),
                model: "gpt-4o-mini".to_string(),
            }
        );
    }

    #[test]
    fn test_from_settings_maps_both_providers() {
        let settings = LlmSettings::default();
        assert_eq!(BackendConfig::from_settings(&settings), BackendConfig::OnDevice);

        let remote = LlmSettings {
            provider: LlmProvider::Remote,
            endpoint: "https://example.com/chat".to_string(),
            api_key: "sk-test".to_string(),
            model: "gpt-4o".to_string(),
        };
        assert_eq!(
            BackendConfig::from_settings(&remote),
            BackendConfig::remote("https://example.com/chat", "sk-test", "gpt-4o")
        );
    }

    #[tokio::test]
    async fn test_on_device_selection_honors_runtime() {
        let backend =
            LlmFactory::create_with_runtime(&BackendConfig::OnDevice, Arc::new(StaticRuntime))
                .unwrap();
        assert_eq!(backend.complete("hi", &[]).await.unwrap(), "on-device reply");
    }

    #[tokio::test]
    async fn test_default_on_device_runtime_is_unavailable() {
        let backend = LlmFactory::create(&BackendConfig::OnDevice).unwrap();
        let err = backend.complete("hi", &[]).await.unwrap_err();
        assert!(matches!(err, CompletionError::BackendUnavailable(_)));
    }

    #[test]
    fn test_remote_validation_happens_at_construction() {
        let result = LlmFactory::create(&BackendConfig::remote("", "sk-test", "gpt-4o"));
        assert!(matches!(result, Err(CompletionError::Configuration(_))));
    }

    #[test]
    fn test_equal_configs_yield_independent_instances() {
        let config = BackendConfig::openai("sk-test", "gpt-4o-mini");
        let first = LlmFactory::create(&config).unwrap();
        let second = LlmFactory::create(&config).unwrap();
        assert!(!Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_remote_config_carried_into_backend() {
        let backend = HttpBackend::new(HttpConfig {
            endpoint: "https://example.com/chat".to_string(),
            api_key: "sk-abc".to_string(),
            model: "gpt-4o".to_string(),
        })
        .unwrap();
        assert_eq!(backend.config().endpoint, "https://example.com/chat");
        assert_eq!(backend.config().api_key, "sk-abc");
        assert_eq!(backend.config().model, "gpt-4o");
    }
}
