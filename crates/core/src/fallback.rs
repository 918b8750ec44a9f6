//! Fixed fallback payloads.
//!
//! Two families per endpoint: a parse-failure payload substituted when the
//! model's completion contained no usable JSON (the request still succeeds
//! with 200), and a minimal error envelope returned with status 500 when the
//! provider call itself failed. Every payload satisfies the nominal result
//! shape so the UI never receives a structurally unexpected body.

use serde_json::{Value as JsonValue, json};

use crate::types::{
    DiagnosisResult, Medication, PrognosisResult, RiskLevel, SimilarCase, TreatmentPlan,
};

/// Prognosis payload used when the completion could not be parsed
pub fn prognosis_parse_failure() -> PrognosisResult {
    PrognosisResult {
        possible_diseases: vec![
            "Analysis could not be completed".to_string(),
            "Please consult a healthcare professional".to_string(),
        ],
        risk_level: RiskLevel::Medium,
        recommended_tests: vec![
            "Complete blood count".to_string(),
            "Basic metabolic panel".to_string(),
            "Consultation with physician".to_string(),
        ],
    }
}

/// Prognosis error envelope for a failed invocation (500 body)
pub fn prognosis_error(message: &str) -> JsonValue {
    json!({
        "error": message,
        "possibleDiseases": ["Error occurred during analysis"],
        "riskLevel": "Medium",
        "recommendedTests": ["Please try again or consult a healthcare professional"],
    })
}

/// Diagnosis payload used when the completion could not be parsed
pub fn diagnosis_parse_failure() -> DiagnosisResult {
    DiagnosisResult {
        treatment_plan: TreatmentPlan {
            primary: vec![
                "Comprehensive clinical evaluation required".to_string(),
                "Standard evidence-based treatment protocols".to_string(),
                "Patient-specific care planning".to_string(),
            ],
            alternative: vec![
                "Alternative therapeutic approaches".to_string(),
                "Multidisciplinary care consultation".to_string(),
                "Clinical trial consideration if appropriate".to_string(),
            ],
        },
        medications: vec![Medication {
            name: "Clinical assessment needed".to_string(),
            dosage: "Individualized dosing".to_string(),
            notes: "Please consult current clinical guidelines and consider patient-specific factors".to_string(),
        }],
        follow_up: vec![
            "Clinical reassessment in appropriate timeframe".to_string(),
            "Laboratory monitoring as indicated".to_string(),
            "Specialist consultation if needed".to_string(),
        ],
        similar_cases: vec![SimilarCase {
            id: 1,
            patient: "Similar case study".to_string(),
            condition: "Comparable clinical presentation".to_string(),
            treatment: "Evidence-based intervention".to_string(),
            outcome: "Clinical improvement documented".to_string(),
            duration: "Standard treatment period".to_string(),
        }],
    }
}

/// Diagnosis error envelope for a failed invocation (500 body)
pub fn diagnosis_error(message: &str) -> JsonValue {
    json!({
        "error": message,
        "treatmentPlan": {
            "primary": ["Clinical evaluation required due to system error"],
            "alternative": ["Please retry or consult clinical guidelines"],
        },
        "medications": [{
            "name": "System error",
            "dosage": "N/A",
            "notes": "Please retry the analysis or consult appropriate medical resources",
        }],
        "followUp": ["Retry AI analysis or proceed with standard clinical protocols"],
        "similarCases": [],
    })
}

/// Chatbot error envelope for a failed invocation (500 body)
pub fn chatbot_error(message: &str) -> JsonValue {
    json!({
        "error": message,
        "reply": "I apologize, but I'm having trouble processing your request. Please try again.",
    })
}
