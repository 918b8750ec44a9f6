//! LLM provider adapters and prompt templates.
//!
//! Two provider shapes are supported: a Google-style generate-content
//! endpoint ([`gemini::GeminiClient`]) and an OpenAI-style chat-completions
//! endpoint ([`openai::OpenAiClient`]). Which shape serves which route is
//! fixed at startup; handlers only see the traits below, so new providers
//! are new implementations rather than new branches.

pub mod gemini;
pub mod openai;
pub mod prompt;

use async_trait::async_trait;
use medassist_core::ChatMessage;

use crate::error::AiError;

/// Single-prompt completion, used by the structured-JSON endpoints
#[async_trait]
pub trait TextCompletion: Send + Sync {
    /// Perform exactly one provider call and return the raw completion text
    async fn complete(&self, prompt: &str) -> Result<String, AiError>;
}

/// Conversational completion, used by the chatbot endpoint
#[async_trait]
pub trait ChatCompletion: Send + Sync {
    /// Perform exactly one provider call with a system prompt and the full
    /// prior conversation, returning the assistant's reply text
    async fn chat(&self, system: &str, messages: &[ChatMessage]) -> Result<String, AiError>;
}
