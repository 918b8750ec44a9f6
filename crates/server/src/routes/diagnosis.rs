//! AI diagnosis endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medassist_core::{DiagnosisRequest, extract, fallback};
use serde_json::{Value as JsonValue, json};

use crate::AppState;
use crate::ai::prompt;
use crate::error::AiError;

/// POST /ai-diagnosis — Treatment recommendations for a patient case
///
/// Same contract as the prognosis endpoint with the diagnosis template and
/// fallback family: model JSON is passed through unvalidated, unparseable
/// completions degrade to the fixed payload, provider failures become a 500
/// envelope carrying the failure message.
pub async fn recommend(
    State(state): State<AppState>,
    body: Result<Json<DiagnosisRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed ai-diagnosis request body");
            return error_response(&rejection.body_text());
        }
    };

    tracing::info!(
        condition = ?request.condition,
        current_symptoms = ?request.current_symptoms,
        "AI diagnosis request"
    );

    match infer(&state, &request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ai-diagnosis invocation failed");
            error_response(&e.to_string())
        }
    }
}

async fn infer(state: &AppState, request: &DiagnosisRequest) -> Result<JsonValue, AiError> {
    let backend = state
        .diagnosis
        .as_ref()
        .ok_or(AiError::MissingApiKey("GEMINI_API_KEY"))?;

    let prompt = prompt::diagnosis(request);
    let completion = backend.complete(&prompt).await?;

    match extract::json_object(&completion) {
        Some(value) => Ok(value),
        None => {
            tracing::warn!(
                completion_len = completion.len(),
                "No parseable JSON in diagnosis completion, substituting fallback"
            );
            Ok(json!(fallback::diagnosis_parse_failure()))
        }
    }
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(fallback::diagnosis_error(message)),
    )
        .into_response()
}
