//! The completion capability implemented by every backend

use async_trait::async_trait;

use crate::CompletionError;

/// A backend that can produce a text completion for a prompt.
///
/// `context` carries prior transcript lines as conversational grounding,
/// oldest first. A backend is free to concatenate, template, or otherwise
/// encode them; the only guarantee the interface makes is that context is
/// presented before the prompt. Backends must not mutate caller-owned data.
///
/// Exactly two implementations exist, selected once per session by
/// `LlmFactory`: the on-device model session and the remote chat-completion
/// API. The set is closed by design.
#[async_trait]
pub trait CompletionBackend: Send + Sync {
    /// Produce a completion for `prompt` given the prior `context` lines.
    async fn complete(&self, prompt: &str, context: &[String]) -> Result<String, CompletionError>;
}
