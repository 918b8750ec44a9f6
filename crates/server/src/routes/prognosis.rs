//! AI prognosis endpoint

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use medassist_core::{PrognosisRequest, extract, fallback};
use serde_json::{Value as JsonValue, json};

use crate::AppState;
use crate::ai::prompt;
use crate::error::AiError;

/// POST /ai-prognosis — Prognosis analysis from patient details
///
/// Forwards the form fields to the configured Gemini-style backend and
/// returns whatever JSON the model produced, unvalidated. A completion with
/// no usable JSON degrades to the fixed fallback payload with status 200;
/// only body-parse and provider failures surface as a 500 envelope.
pub async fn analyze(
    State(state): State<AppState>,
    body: Result<Json<PrognosisRequest>, JsonRejection>,
) -> Response {
    let request = match body {
        Ok(Json(request)) => request,
        Err(rejection) => {
            tracing::error!(error = %rejection, "Malformed ai-prognosis request body");
            return error_response(&rejection.body_text());
        }
    };

    tracing::info!(
        symptoms = ?request.symptoms,
        age = ?request.age,
        gender = ?request.gender,
        "AI prognosis request"
    );

    match infer(&state, &request).await {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "ai-prognosis invocation failed");
            error_response(&e.to_string())
        }
    }
}

async fn infer(state: &AppState, request: &PrognosisRequest) -> Result<JsonValue, AiError> {
    let backend = state
        .prognosis
        .as_ref()
        .ok_or(AiError::MissingApiKey("GEMINI_API_KEY"))?;

    let prompt = prompt::prognosis(request);
    let completion = backend.complete(&prompt).await?;

    match extract::json_object(&completion) {
        Some(value) => Ok(value),
        None => {
            tracing::warn!(
                completion_len = completion.len(),
                "No parseable JSON in prognosis completion, substituting fallback"
            );
            Ok(json!(fallback::prognosis_parse_failure()))
        }
    }
}

fn error_response(message: &str) -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(fallback::prognosis_error(message)),
    )
        .into_response()
}
