//! Remote HTTP backend
//!
//! Speaks the OpenAI-style chat-completion contract: one POST per call,
//! bearer auth, `stream: false`, reply read from
//! `choices[0].message.content`. Single attempt - no retry, no backoff, no
//! timeout beyond the client default.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use vita_core::{CompletionBackend, CompletionError};

/// Remote backend configuration. All fields required.
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Chat-completion endpoint URL
    pub endpoint: String,
    /// Bearer credential
    pub api_key: String,
    /// Model identifier
    pub model: String,
}

/// Backend over a remote chat-completion HTTP API.
pub struct HttpBackend {
    config: HttpConfig,
    client: Client,
}

impl HttpBackend {
    /// Create a new HTTP backend, validating that every config field is set.
    pub fn new(config: HttpConfig) -> Result<Self, CompletionError> {
        if config.endpoint.is_empty() {
            return Err(CompletionError::Configuration(
                "endpoint must not be empty".to_string(),
            ));
        }
        if config.api_key.is_empty() {
            return Err(CompletionError::Configuration(
                "api_key must not be empty".to_string(),
            ));
        }
        if config.model.is_empty() {
            return Err(CompletionError::Configuration(
                "model must not be empty".to_string(),
            ));
        }

        let client = Client::builder()
            .build()
            .map_err(|e| CompletionError::Configuration(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &HttpConfig {
        &self.config
    }

    /// Build the request body: one `user` message per context entry in order,
    /// then one for the prompt.
    fn build_request(&self, prompt: &str, context: &[String]) -> ChatRequest {
        let messages = context
            .iter()
            .map(String::as_str)
            .chain(std::iter::once(prompt))
            .map(ChatMessage::user)
            .collect();

        ChatRequest {
            model: self.config.model.clone(),
            messages,
            stream: false,
        }
    }
}

#[async_trait]
impl CompletionBackend for HttpBackend {
    async fn complete(&self, prompt: &str, context: &[String]) -> Result<String, CompletionError> {
        let request = self.build_request(prompt, context);

        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CompletionError::Transport(e.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::Transport(format!("HTTP {status}: {body}")));
        }

        parse_reply(&body)
    }
}

/// Extract the reply from a chat-completion response body.
///
/// The legacy client returned an empty string when the body did not match the
/// expected shape, which made a malformed response indistinguishable from a
/// legitimate empty completion. The contract here is hardened: any shape
/// mismatch fails with `MalformedResponse`.
pub fn parse_reply(body: &str) -> Result<String, CompletionError> {
    let response: ChatResponse =
        serde_json::from_str(body).map_err(|e| CompletionError::MalformedResponse(e.to_string()))?;

    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message.content)
        .ok_or_else(|| CompletionError::MalformedResponse("no choices in response".to_string()))
}

// Chat-completion wire types

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    stream: bool,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

impl ChatMessage {
    fn user(content: &str) -> Self {
        Self {
            role: "user".to_string(),
            content: content.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatReplyMessage,
}

#[derive(Debug, Deserialize)]
struct ChatReplyMessage {
    content: String,
}
