//! Model-backed analysis through an OpenAI-compatible API

pub mod analyzer;
pub mod client;
pub mod prompts;

pub use analyzer::ExternalAiAnalyzer;
pub use client::{LlmClient, LlmError};
