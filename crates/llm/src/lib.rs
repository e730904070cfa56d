//! Completion backends
//!
//! Two implementations of `vita_core::CompletionBackend`:
//! - `OnDeviceBackend` - wraps the system language model, lazily creating its
//!   session on first use
//! - `HttpBackend` - remote chat-completion API (OpenAI-compatible)
//!
//! `LlmFactory` maps a `BackendConfig` to a constructed backend.

pub mod factory;
pub mod http;
pub mod on_device;

pub use factory::{BackendConfig, LlmFactory};
pub use http::{HttpBackend, HttpConfig};
pub use on_device::{LocalModelRuntime, LocalModelSession, OnDeviceBackend, SystemModelRuntime};
