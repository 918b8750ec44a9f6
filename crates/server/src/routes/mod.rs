pub mod chatbot;
pub mod diagnosis;
pub mod health;
pub mod metrics;
pub mod prognosis;

use axum::{Router, routing::post};

use crate::AppState;

/// Build the AI proxy routes
pub fn ai_routes() -> Router<AppState> {
    Router::new()
        .route("/ai-prognosis", post(prognosis::analyze))
        .route("/ai-diagnosis", post(diagnosis::recommend))
        .route("/disease-chatbot", post(chatbot::converse))
}
