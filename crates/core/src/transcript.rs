//! Conversation transcript

use serde::{Deserialize, Serialize};

/// An ordered, append-only sequence of conversation lines.
///
/// Entries alternate user input and backend output: every exchange appends a
/// matched pair (the user's text, then exactly one result line, which may be
/// an error-formatted string) and pairs are never split. The transcript grows
/// unboundedly for the session's life; there is no eviction.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    entries: Vec<String>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one completed exchange.
    pub fn push_exchange(&mut self, prompt: impl Into<String>, reply: impl Into<String>) {
        self.entries.push(prompt.into());
        self.entries.push(reply.into());
    }

    /// All lines in insertion order.
    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
