//! medassist-server library crate
//!
//! Exposes `build_app`, `AppState`, and `config` for integration tests.
//! The actual binary entrypoint is in `main.rs`.

pub mod ai;
pub mod config;
pub mod error;
mod middleware;
mod routes;

use std::sync::Arc;

use axum::{Extension, Router, middleware as axum_mw, routing::get};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use ai::gemini::GeminiClient;
use ai::openai::OpenAiClient;
use ai::{ChatCompletion, TextCompletion};
use config::Config;

// Provider bindings are fixed per endpoint at deployment time, not per
// request: low temperature and a bounded output for the structured-JSON
// endpoints, a looser budget for the open-ended chatbot.
const PROGNOSIS_MODEL: &str = "gemini-1.5-flash";
const PROGNOSIS_TEMPERATURE: f32 = 0.3;
const PROGNOSIS_MAX_OUTPUT_TOKENS: u32 = 1000;

const DIAGNOSIS_MODEL: &str = "gemini-2.0-flash-exp";
const DIAGNOSIS_TEMPERATURE: f32 = 0.2;
const DIAGNOSIS_MAX_OUTPUT_TOKENS: u32 = 2000;

const CHATBOT_MODEL: &str = "gpt-4o-mini";
const CHATBOT_TEMPERATURE: f32 = 0.7;
const CHATBOT_MAX_TOKENS: u32 = 2000;

/// Shared application state: one provider backend per endpoint.
///
/// `None` means the corresponding API key was absent at startup; that
/// endpoint then answers every invocation with a configuration error while
/// the others keep working. Tests inject stub backends through the trait
/// objects instead of constructing real clients.
#[derive(Clone)]
pub struct AppState {
    pub prognosis: Option<Arc<dyn TextCompletion>>,
    pub diagnosis: Option<Arc<dyn TextCompletion>>,
    pub chatbot: Option<Arc<dyn ChatCompletion>>,
}

impl AppState {
    /// Construct the per-endpoint provider backends from configuration
    pub fn from_config(config: &Config) -> Self {
        let prognosis = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::new(
                key.clone(),
                PROGNOSIS_MODEL,
                PROGNOSIS_TEMPERATURE,
                PROGNOSIS_MAX_OUTPUT_TOKENS,
            )) as Arc<dyn TextCompletion>
        });

        let diagnosis = config.gemini_api_key.as_ref().map(|key| {
            Arc::new(GeminiClient::new(
                key.clone(),
                DIAGNOSIS_MODEL,
                DIAGNOSIS_TEMPERATURE,
                DIAGNOSIS_MAX_OUTPUT_TOKENS,
            )) as Arc<dyn TextCompletion>
        });

        let chatbot = config.openai_api_key.as_ref().map(|key| {
            Arc::new(OpenAiClient::new(
                key.clone(),
                CHATBOT_MODEL,
                CHATBOT_TEMPERATURE,
                CHATBOT_MAX_TOKENS,
            )) as Arc<dyn ChatCompletion>
        });

        Self {
            prognosis,
            diagnosis,
            chatbot,
        }
    }
}

/// Build the full application router with all routes and middleware.
///
/// Extracted from `main()` so integration tests can construct the app
/// without binding to a TCP port.
pub fn build_app(state: AppState, config: &Config) -> Router {
    // Install Prometheus metrics recorder.
    // Use build_recorder() + set_global_recorder() so that repeated calls
    // (e.g. in integration tests) don't panic — the second install is
    // silently ignored and we still get a valid handle for /metrics.
    let recorder = metrics_exporter_prometheus::PrometheusBuilder::new().build_recorder();
    let prometheus_handle = recorder.handle();
    let _ = metrics::set_global_recorder(recorder);

    // Operational routes
    let public_routes = Router::new()
        .route("/health", get(routes::health::check))
        .route("/metrics", get(routes::metrics::get))
        .layer(Extension(prometheus_handle));

    // Build CORS layer. The pre-flight OPTIONS responses for every route
    // come from this layer, bypassing the handlers entirely.
    let cors = if config.cors_origins.iter().any(|o| o == "*") {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        let origins: Vec<_> = config
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Build application
    Router::new()
        .merge(public_routes)
        .merge(routes::ai_routes())
        .with_state(state)
        .layer(axum_mw::from_fn(middleware::audit_middleware))
        .layer(axum_mw::from_fn(middleware::request_id_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(axum_mw::from_fn(middleware::metrics_middleware))
}
