//! Core traits and types for the Vita chat backend
//!
//! This crate provides the foundational pieces shared by all other crates:
//! - The `CompletionBackend` trait implemented by every language-model backend
//! - The completion error taxonomy
//! - The append-only conversation transcript

pub mod backend;
pub mod error;
pub mod transcript;

pub use backend::CompletionBackend;
pub use error::CompletionError;
pub use transcript::Transcript;
