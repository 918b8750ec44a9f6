//! Disease chatbot endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medassist_core::{ChatRequest, ChatResult, fallback};

use crate::AppState;
use crate::ai::prompt::CHATBOT_SYSTEM_PROMPT;
use crate::error::AiError;

/// POST /disease-chatbot — Open-ended disease information chat
///
/// Forwards the full conversation (system prompt prepended) to the
/// configured OpenAI-style backend and returns the reply text verbatim.
/// No extraction step: the reply is free text by design.
pub async fn converse(
    State(state): State<AppState>,
    body: Result<Json<ChatRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed disease-chatbot request body");
            return error_response(&rejection.body_text());
        }
    };

    tracing::info!(messages = request.messages.len(), "Disease chatbot request");

    match reply(&state, &request).await {
        Ok(reply) => (StatusCode::OK, Json(ChatResult { reply })).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "disease-chatbot invocation failed");
            error_response(&e.to_string())
        }
    }
}

async fn reply(state: &AppState, request: &ChatRequest) -> Result<String, AiError> {
    let backend = state
        .chatbot
        .as_ref()
        .ok_or(AiError::MissingApiKey("OPENAI_API_KEY"))?;

    backend.chat(CHATBOT_SYSTEM_PROMPT, &request.messages).await
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(fallback::chatbot_error(message)),
    )
        .into_response()
}
