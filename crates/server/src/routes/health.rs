//! Health check endpoint

use axum::{Json, extract::State};
use serde::Serialize;

use crate::AppState;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    prognosis_backend: bool,
    diagnosis_backend: bool,
    chatbot_backend: bool,
}

/// GET /health - Report liveness and which provider backends are configured
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        prognosis_backend: state.prognosis.is_some(),
        diagnosis_backend: state.diagnosis.is_some(),
        chatbot_backend: state.chatbot.is_some(),
    })
}
