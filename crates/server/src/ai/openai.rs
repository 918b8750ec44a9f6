//! Client for the OpenAI chat-completions API

use async_trait::async_trait;
use medassist_core::{ChatMessage, Role};
use serde::{Deserialize, Serialize};

use super::ChatCompletion;
use crate::error::AiError;

const API_URL: &str = "https://api.openai.com/v1/chat/completions";
const PROVIDER: &str = "OpenAI";

/// Client for an OpenAI-style `chat/completions` endpoint.
///
/// The system prompt is prepended to the forwarded conversation on every
/// call; sampling parameters are fixed at construction time.
#[derive(Clone)]
pub struct OpenAiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

// Wire structures for the chat-completions API
#[derive(Serialize)]
struct WireMessage {
    role: &'static str,
    content: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<WireMessage>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: Option<ResponseMessage>,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client with fixed model and sampling parameters
    pub fn new(
        api_key: String,
        model: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            temperature,
            max_tokens,
        }
    }
}

fn wire_role(role: Role) -> &'static str {
    match role {
        Role::User => "user",
        Role::Assistant => "assistant",
    }
}

/// Pull `choices[0].message.content` out of a success response
fn reply_text(response: ChatCompletionResponse) -> Result<String, AiError> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|c| c.message)
        .and_then(|m| m.content)
        .ok_or(AiError::ResponseShape(PROVIDER))
}

#[async_trait]
impl ChatCompletion for OpenAiClient {
    async fn chat(&self, system: &str, messages: &[ChatMessage]) -> Result<String, AiError> {
        let mut wire_messages = Vec::with_capacity(messages.len() + 1);
        wire_messages.push(WireMessage {
            role: "system",
            content: system.to_string(),
        });
        wire_messages.extend(messages.iter().map(|m| WireMessage {
            role: wire_role(m.role),
            content: m.content.clone(),
        }));

        let request = ChatCompletionRequest {
            model: self.model.clone(),
            messages: wire_messages,
            temperature: self.temperature,
            max_tokens: self.max_tokens,
        };

        tracing::debug!(model = %self.model, messages = messages.len(), "Sending OpenAI request");

        let response = self
            .http
            .post(API_URL)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|source| AiError::Transport {
                provider: PROVIDER,
                source,
            })?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, body = %body, "OpenAI API error");
            return Err(AiError::Provider {
                provider: PROVIDER,
                status,
            });
        }

        let completion: ChatCompletionResponse =
            response
                .json()
                .await
                .map_err(|source| AiError::Transport {
                    provider: PROVIDER,
                    source,
                })?;

        reply_text(completion)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_first_choice_content() {
        let response: ChatCompletionResponse = serde_json::from_str(
            r#"{"choices":[{"message":{"role":"assistant","content":"hi there"}}]}"#,
        )
        .unwrap();
        assert_eq!(reply_text(response).unwrap(), "hi there");
    }

    #[test]
    fn empty_choices_is_shape_error() {
        let response: ChatCompletionResponse = serde_json::from_str(r#"{"choices":[]}"#).unwrap();
        assert!(matches!(
            reply_text(response),
            Err(AiError::ResponseShape("OpenAI"))
        ));
    }

    #[test]
    fn null_content_is_shape_error() {
        let response: ChatCompletionResponse =
            serde_json::from_str(r#"{"choices":[{"message":{"role":"assistant","content":null}}]}"#)
                .unwrap();
        assert!(matches!(
            reply_text(response),
            Err(AiError::ResponseShape(_))
        ));
    }

    #[test]
    fn roles_map_to_wire_strings() {
        assert_eq!(wire_role(Role::User), "user");
        assert_eq!(wire_role(Role::Assistant), "assistant");
    }
}
