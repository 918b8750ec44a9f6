//! Integration tests for the MedAssist AI proxy.
//!
//! These tests drive the full Axum router through `tower::ServiceExt` with
//! stub provider backends injected via the completion traits, so no network
//! access or real API keys are needed.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

use medassist_core::{DiagnosisResult, PrognosisResult, RiskLevel};
use medassist_server::ai::{ChatCompletion, TextCompletion};
use medassist_server::config::Config;
use medassist_server::error::AiError;
use medassist_server::AppState;

// ---------------------------------------------------------------------------
// Stub backends
// ---------------------------------------------------------------------------

/// Text backend that always returns the same completion
struct FixedCompletion(&'static str);

#[async_trait]
impl TextCompletion for FixedCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        Ok(self.0.to_string())
    }
}

/// Text backend that simulates a provider-side 500
struct FailingCompletion;

#[async_trait]
impl TextCompletion for FailingCompletion {
    async fn complete(&self, _prompt: &str) -> Result<String, AiError> {
        Err(AiError::Provider {
            provider: "Gemini",
            status: 500,
        })
    }
}

/// Chat backend that always returns the same reply
struct FixedChat(&'static str);

#[async_trait]
impl ChatCompletion for FixedChat {
    async fn chat(
        &self,
        _system: &str,
        _messages: &[medassist_core::ChatMessage],
    ) -> Result<String, AiError> {
        Ok(self.0.to_string())
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn test_config() -> Config {
    Config {
        bind_address: "0.0.0.0:0".to_string(),
        cors_origins: vec!["*".to_string()],
        gemini_api_key: None,
        openai_api_key: None,
    }
}

/// App with no backends configured (missing API keys)
fn unconfigured_app() -> Router {
    let state = AppState {
        prognosis: None,
        diagnosis: None,
        chatbot: None,
    };
    medassist_server::build_app(state, &test_config())
}

/// App with the given stub backends
fn stub_app(
    prognosis: Option<Arc<dyn TextCompletion>>,
    diagnosis: Option<Arc<dyn TextCompletion>>,
    chatbot: Option<Arc<dyn ChatCompletion>>,
) -> Router {
    let state = AppState {
        prognosis,
        diagnosis,
        chatbot,
    };
    medassist_server::build_app(state, &test_config())
}

/// Send a request to the app and return (status, body as JSON).
async fn request(app: &Router, req: Request<Body>) -> (StatusCode, JsonValue) {
    let response = app.clone().oneshot(req).await.expect("Request failed");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("Failed to read body")
        .to_bytes();

    let body = if bytes.is_empty() {
        JsonValue::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(JsonValue::Null)
    };

    (status, body)
}

/// Build a GET request.
fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

/// Build a POST request with JSON body.
fn post(uri: &str, body: JsonValue) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(serde_json::to_vec(&body).unwrap()))
        .unwrap()
}

fn sample_prognosis_body() -> JsonValue {
    json!({
        "symptoms": "fever, cough",
        "age": "42",
        "gender": "female",
        "lifestyle": "active",
        "comorbidities": "none"
    })
}

// ---------------------------------------------------------------------------
// CORS pre-flight
// ---------------------------------------------------------------------------

#[tokio::test]
async fn preflight_returns_permissive_cors() {
    let app = unconfigured_app();

    for uri in ["/ai-prognosis", "/ai-diagnosis", "/disease-chatbot"] {
        let req = Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header("Origin", "https://example.com")
            .header("Access-Control-Request-Method", "POST")
            .header("Access-Control-Request-Headers", "content-type")
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(req).await.expect("Request failed");
        assert!(
            response.status().is_success(),
            "pre-flight for {uri} returned {}",
            response.status()
        );
        let allow_origin = response
            .headers()
            .get("access-control-allow-origin")
            .expect("missing Access-Control-Allow-Origin");
        assert_eq!(allow_origin, "*");

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(bytes.is_empty(), "pre-flight body should be empty");
    }
}

// ---------------------------------------------------------------------------
// Prognosis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn prognosis_missing_key_is_500_with_fallback_envelope() {
    let app = unconfigured_app();
    let (status, body) = request(&app, post("/ai-prognosis", sample_prognosis_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "GEMINI_API_KEY not configured");
    assert_eq!(body["riskLevel"], "Medium");
    assert!(!body["possibleDiseases"].as_array().unwrap().is_empty());
    assert!(!body["recommendedTests"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn prognosis_extracts_json_embedded_in_prose() {
    let app = stub_app(
        Some(Arc::new(FixedCompletion(
            r#"Sure, here you go: {"possibleDiseases":["Influenza"],"riskLevel":"Low","recommendedTests":["Rapid flu test"]} Thanks!"#,
        ))),
        None,
        None,
    );

    let (status, body) = request(&app, post("/ai-prognosis", sample_prognosis_body())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "possibleDiseases": ["Influenza"],
            "riskLevel": "Low",
            "recommendedTests": ["Rapid flu test"]
        })
    );
}

#[tokio::test]
async fn prognosis_unparseable_completion_degrades_to_fallback() {
    let app = stub_app(
        Some(Arc::new(FixedCompletion(
            "I'm sorry, I can't produce JSON today.",
        ))),
        None,
        None,
    );

    let (status, body) = request(&app, post("/ai-prognosis", sample_prognosis_body())).await;

    // Extraction failure is absorbed: still a 200, with the fixed payload.
    assert_eq!(status, StatusCode::OK);
    let result: PrognosisResult = serde_json::from_value(body).unwrap();
    assert_eq!(result.risk_level, RiskLevel::Medium);
    assert!(!result.possible_diseases.is_empty());
    assert!(!result.recommended_tests.is_empty());
}

#[tokio::test]
async fn prognosis_provider_failure_is_500_with_error_field() {
    let app = stub_app(Some(Arc::new(FailingCompletion)), None, None);

    let (status, body) = request(&app, post("/ai-prognosis", sample_prognosis_body())).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "Gemini API error: 500");
    assert_eq!(body["possibleDiseases"], json!(["Error occurred during analysis"]));
}

#[tokio::test]
async fn prognosis_accepts_empty_body_fields() {
    // No server-side validation: an empty object is forwarded with every
    // field rendered as `undefined` in the prompt.
    let app = stub_app(
        Some(Arc::new(FixedCompletion(
            r#"{"possibleDiseases":["Unknown"],"riskLevel":"Medium","recommendedTests":["Physical exam"]}"#,
        ))),
        None,
        None,
    );

    let (status, body) = request(&app, post("/ai-prognosis", json!({}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["riskLevel"], "Medium");
}

#[tokio::test]
async fn prognosis_malformed_body_is_500_envelope() {
    let app = unconfigured_app();
    let req = Request::builder()
        .method("POST")
        .uri("/ai-prognosis")
        .header("Content-Type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = request(&app, req).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["error"].is_string());
    assert_eq!(body["riskLevel"], "Medium");
}

// ---------------------------------------------------------------------------
// Diagnosis
// ---------------------------------------------------------------------------

#[tokio::test]
async fn diagnosis_passes_parsed_json_through_unvalidated() {
    // A syntactically valid but semantically incomplete object is returned
    // as-is: no schema validation happens on the success path.
    let app = stub_app(
        None,
        Some(Arc::new(FixedCompletion(
            r#"{"treatmentPlan":{"primary":["rest"]}}"#,
        ))),
        None,
    );

    let (status, body) = request(
        &app,
        post("/ai-diagnosis", json!({"condition": "flu"})),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"treatmentPlan": {"primary": ["rest"]}}));
}

#[tokio::test]
async fn diagnosis_unparseable_completion_degrades_to_fallback() {
    let app = stub_app(
        None,
        Some(Arc::new(FixedCompletion("no braces here"))),
        None,
    );

    let (status, body) = request(
        &app,
        post(
            "/ai-diagnosis",
            json!({
                "condition": "hypertension",
                "currentSymptoms": "headache",
                "patientHistory": "none",
                "previousTreatments": "none"
            }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let result: DiagnosisResult = serde_json::from_value(body).unwrap();
    assert!(!result.treatment_plan.primary.is_empty());
    assert!(!result.treatment_plan.alternative.is_empty());
    assert!(!result.medications.is_empty());
    assert!(!result.follow_up.is_empty());
    assert!(!result.similar_cases.is_empty());
}

#[tokio::test]
async fn diagnosis_missing_key_is_500_with_fallback_envelope() {
    let app = unconfigured_app();
    let (status, body) = request(&app, post("/ai-diagnosis", json!({"condition": "flu"}))).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "GEMINI_API_KEY not configured");
    assert!(!body["treatmentPlan"]["primary"].as_array().unwrap().is_empty());
    assert!(body["similarCases"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Chatbot
// ---------------------------------------------------------------------------

#[tokio::test]
async fn chatbot_returns_reply_verbatim() {
    let app = stub_app(
        None,
        None,
        Some(Arc::new(FixedChat(
            "Hypertension is persistently elevated blood pressure.",
        ))),
    );

    let (status, body) = request(
        &app,
        post(
            "/disease-chatbot",
            json!({"messages": [{"role": "user", "content": "What is hypertension?"}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"reply": "Hypertension is persistently elevated blood pressure."})
    );
}

#[tokio::test]
async fn chatbot_missing_key_is_500_with_apology_reply() {
    let app = unconfigured_app();
    let (status, body) = request(
        &app,
        post(
            "/disease-chatbot",
            json!({"messages": [{"role": "user", "content": "hi"}]}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], "OPENAI_API_KEY not configured");
    assert!(body["reply"].as_str().unwrap().contains("try again"));
}

#[tokio::test]
async fn chatbot_accepts_empty_message_list() {
    let app = stub_app(None, None, Some(Arc::new(FixedChat("Hello!"))));
    let (status, body) = request(&app, post("/disease-chatbot", json!({}))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reply"], "Hello!");
}

// ---------------------------------------------------------------------------
// Operational endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_reports_backend_availability() {
    let app = stub_app(
        Some(Arc::new(FixedCompletion("{}"))),
        None,
        Some(Arc::new(FixedChat("hi"))),
    );

    let (status, body) = request(&app, get("/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["prognosis_backend"], true);
    assert_eq!(body["diagnosis_backend"], false);
    assert_eq!(body["chatbot_backend"], true);
}

#[tokio::test]
async fn metrics_endpoint_renders_text() {
    let app = unconfigured_app();

    // Generate at least one request so counters exist, then scrape.
    let _ = request(&app, get("/health")).await;

    let response = app.oneshot(get("/metrics")).await.expect("Request failed");
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn responses_carry_request_id_header() {
    let app = unconfigured_app();
    let response = app.oneshot(get("/health")).await.expect("Request failed");
    assert!(response.headers().contains_key("X-Request-ID"));
}
