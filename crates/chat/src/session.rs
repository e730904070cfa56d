//! Conversation session

use std::sync::Arc;

use tokio::sync::Mutex;

use vita_core::{CompletionBackend, Transcript};

/// A conversation against one completion backend.
///
/// Each `send` performs one round trip: the backend is called with the input
/// and the transcript snapshot taken before the call, then the matched pair
/// (the user's text, followed by the reply or a formatted error line) is
/// appended. The user's message is never discarded on backend failure, and
/// `send` itself never fails.
///
/// The transcript lock is held across the round trip, so overlapping `send`
/// calls on the same session serialize and pairs stay intact. The transcript
/// grows unboundedly and the full history is sent as context on every call;
/// neither is bounded here.
pub struct ChatSession {
    backend: Arc<dyn CompletionBackend>,
    transcript: Mutex<Transcript>,
}

impl ChatSession {
    pub fn new(backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            backend,
            transcript: Mutex::new(Transcript::new()),
        }
    }

    /// Send one user input and return the line appended after it: the
    /// backend's reply, or the error line on failure.
    ///
    /// The input is used as-is; trimming and empty-input checks belong to the
    /// presentation layer.
    pub async fn send(&self, text: &str) -> String {
        let mut transcript = self.transcript.lock().await;
        let context = transcript.entries().to_vec();

        let line = match self.backend.complete(text, &context).await {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(error = %err, "completion failed");
                format!("Error: {err}")
            }
        };

        transcript.push_exchange(text, line.clone());
        line
    }

    /// Snapshot of the transcript lines, oldest first.
    pub async fn transcript(&self) -> Vec<String> {
        self.transcript.lock().await.entries().to_vec()
    }
}
