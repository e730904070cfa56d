//! On-device backend
//!
//! Wraps the local system language model. Construction is two-phase: the
//! backend itself is cheap to build, while the model session is created on
//! the first `complete` call and cached for the backend's lifetime.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::OnceCell;

use vita_core::{CompletionBackend, CompletionError};

/// Access to the host's local language model.
///
/// The real runtime is platform-specific; embedders wire their own
/// implementation through `LlmFactory::create_with_runtime`. The seam also
/// keeps the lazy-initialization logic testable without a model present.
#[async_trait]
pub trait LocalModelRuntime: Send + Sync {
    /// Whether a local model is present on this device.
    fn is_available(&self) -> bool;

    /// Create a model session. Called at most once per backend instance.
    async fn create_session(&self) -> Result<Box<dyn LocalModelSession>, CompletionError>;
}

/// A live local-model session.
#[async_trait]
pub trait LocalModelSession: Send + Sync {
    /// Run one inference over the combined input text.
    async fn respond(&self, input: &str) -> Result<String, CompletionError>;
}

/// Default runtime probe. No inference engine is bundled with this workspace,
/// so the system model is reported absent; platforms that ship one inject
/// their own `LocalModelRuntime` instead.
#[derive(Debug, Default)]
pub struct SystemModelRuntime;

#[async_trait]
impl LocalModelRuntime for SystemModelRuntime {
    fn is_available(&self) -> bool {
        false
    }

    async fn create_session(&self) -> Result<Box<dyn LocalModelSession>, CompletionError> {
        Err(CompletionError::BackendUnavailable(
            "no system language model on this platform".to_string(),
        ))
    }
}

/// Backend over the local system language model.
pub struct OnDeviceBackend {
    runtime: Arc<dyn LocalModelRuntime>,
    session: OnceCell<Box<dyn LocalModelSession>>,
}

impl OnDeviceBackend {
    pub fn new(runtime: Arc<dyn LocalModelRuntime>) -> Self {
        Self {
            runtime,
            session: OnceCell::new(),
        }
    }

    /// Get the cached session, creating it on first use.
    ///
    /// The availability probe runs before any session construction; an absent
    /// model fails with `BackendUnavailable` and never touches the runtime's
    /// session path.
    async fn session(&self) -> Result<&dyn LocalModelSession, CompletionError> {
        let session = self
            .session
            .get_or_try_init(|| async {
                if !self.runtime.is_available() {
                    return Err(CompletionError::BackendUnavailable(
                        "on-device model not present".to_string(),
                    ));
                }
                tracing::debug!("creating on-device model session");
                self.runtime.create_session().await
            })
            .await?;
        Ok(session.as_ref())
    }
}

/// Join prior context lines and the prompt into one input text.
fn combined_text(prompt: &str, context: &[String]) -> String {
    let mut lines: Vec<&str> = context.iter().map(String::as_str).collect();
    lines.push(prompt);
    lines.join("\n")
}

#[async_trait]
impl CompletionBackend for OnDeviceBackend {
    async fn complete(&self, prompt: &str, context: &[String]) -> Result<String, CompletionError> {
        let session = self.session().await?;
        session.respond(&combined_text(prompt, context)).await
    }
}
