//! Client for the Google generate-content API

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use super::TextCompletion;
use crate::error::AiError;

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const PROVIDER: &str = "Gemini";

/// Client for a Google-style `models/{model}:generateContent` endpoint.
///
/// Model identifier and sampling parameters are fixed per endpoint at
/// construction time. One inbound request maps to exactly one provider
/// call: no retry, no timeout override.
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: u32,
}

// Wire structures for the generate-content API
#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

impl GeminiClient {
    /// Create a client with fixed model and sampling parameters
    pub fn new(
        api_key: String,
        model: impl Into<String>,
        temperature: f32,
        max_output_tokens: u32,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key,
            model: model.into(),
            temperature,
            max_output_tokens,
        }
    }
}

/// Pull `candidates[0].content.parts[0].text` out of a success response
fn completion_text(response: GenerateContentResponse) -> Result<String, AiError> {
    response
        .candidates
        .into_iter()
        .next()
        .and_then(|c| c.content)
        .and_then(|c| c.parts.into_iter().next())
        .and_then(|p| p.text)
        .ok_or(AiError::ResponseShape(PROVIDER))
}

#[async_trait]
impl TextCompletion for GeminiClient {
    async fn complete(&self, prompt: &str) -> Result<String, AiError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        let url = format!("{}/models/{}:generateContent", BASE_URL, self.model);
        tracing::debug!(model = %self.model, prompt_len = prompt.len(), "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .query(&[("key", &self.api_key)])
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
            tracing::error!(status, body = %body, "Gemini API error");
            return Err(AiError::Provider {
                provider: PROVIDER,
                status,
            });
        }

        let completion: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|source| AiError::Transport {
                    provider: PROVIDER,
                    source,
                })?;

        completion_text(completion)
    }
}
