//! Conversation session
//!
//! `ChatSession` owns the transcript and sequences request/response cycles
//! against a single `CompletionBackend` chosen at construction.

pub mod session;

pub use session::ChatSession;
