//! Completion error taxonomy

use thiserror::Error;

/// Errors a completion backend can fail with.
///
/// Backends never log and never panic; they either return a result or one of
/// these variants. The conversation session is the only layer that converts
/// them into user-visible text.
#[derive(Error, Debug)]
pub enum CompletionError {
    /// The on-device model is not present on this system. Fatal to the
    /// on-device backend, not to the process.
    #[error("on-device model unavailable: {0}")]
    BackendUnavailable(String),

    /// The local model accepted the request but failed during inference.
    #[error("model failure: {0}")]
    ModelFailure(String),

    /// Network-level failure: connection, timeout, or a non-2xx status.
    #[error("transport error: {0}")]
    Transport(String),

    /// The remote response did not match the expected chat-completion shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid backend configuration (empty endpoint, key, or model).
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl CompletionError {
    /// Whether a caller-side retry of the same request could succeed.
    ///
    /// `BackendUnavailable` and `Configuration` are permanent for the
    /// backend instance; the rest are transient.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::ModelFailure(_) | Self::Transport(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_classification() {
        assert!(CompletionError::Transport("reset".into()).is_retryable());
        assert!(CompletionError::ModelFailure("oom".into()).is_retryable());
        assert!(!CompletionError::BackendUnavailable("absent".into()).is_retryable());
        assert!(!CompletionError::Configuration("empty key".into()).is_retryable());
        assert!(!CompletionError::MalformedResponse("no choices".into()).is_retryable());
    }

    #[test]
    fn test_display_includes_detail() {
        let err = CompletionError::Transport("connection refused".into());
        assert_eq!(err.to_string(), "transport error: connection refused");
    }
}
