//! Prompt templates for each endpoint.
//!
//! Fields are embedded verbatim with no escaping. Absent fields render as
//! the literal text `undefined`, matching what the UI has always received;
//! the templates instruct the model to answer with JSON matching the exact
//! result schema so the extraction step has something to find.

use medassist_core::{DiagnosisRequest, PrognosisRequest};

/// System prompt for the disease chatbot: informational scope and safety
/// guidance, prepended to every conversation.
pub const CHATBOT_SYSTEM_PROMPT: &str = r#"You are a medical AI assistant specialized in disease information and medical knowledge. Your role is to:
- Provide accurate information about diseases, symptoms, and medical conditions
- Explain medical terminology in clear, understandable language
- Suggest when users should seek professional medical attention
- Offer general health information and guidance
- Always remind users that this is for informational purposes and not a substitute for professional medical advice

Important guidelines:
- Always be empathetic and supportive
- Use clear, non-technical language when possible
- Cite medical facts accurately
- Never diagnose or prescribe treatments
- Always recommend consulting healthcare professionals for serious concerns"#;

fn field(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("undefined")
}

/// Render the prognosis prompt from a request entity
pub fn prognosis(request: &PrognosisRequest) -> String {
    format!(
        r#"You are a medical prognosis assistant for doctors.
Patient details:
- Symptoms: {}
- Age: {}
- Gender: {}
- Lifestyle: {}
- Comorbidities: {}

Based on the patient information, provide a medical prognosis analysis. Return ONLY a valid JSON object with no additional text or formatting:
{{
  "possibleDiseases": ["Disease 1", "Disease 2", "Disease 3"],
  "riskLevel": "High|Medium|Low",
  "recommendedTests": ["Test 1", "Test 2", "Test 3"]
}}"#,
        field(&request.symptoms),
        field(&request.age),
        field(&request.gender),
        field(&request.lifestyle),
        field(&request.comorbidities),
    )
}

/// Render the diagnosis prompt from a request entity
pub fn diagnosis(request: &DiagnosisRequest) -> String {
    format!(
        r#"You are an AI medical assistant providing clinical decision support for healthcare professionals.

Patient Case Information:
- Primary Condition/Diagnosis: {}
- Current Symptoms: {}
- Medical History: {}
- Previous Treatments: {}

Based on the patient case information, provide comprehensive treatment recommendations. Return ONLY a valid JSON object with no additional text or formatting:

{{
  "treatmentPlan": {{
    "primary": ["First-line treatment 1", "First-line treatment 2", "First-line treatment 3"],
    "alternative": ["Alternative treatment 1", "Alternative treatment 2", "Alternative treatment 3"]
  }},
  "medications": [
    {{
      "name": "Medication name",
      "dosage": "Dosage information",
      "notes": "Important notes about monitoring or contraindications"
    }}
  ],
  "followUp": [
    "Follow-up action 1",
    "Follow-up action 2",
    "Follow-up action 3"
  ],
  "similarCases": [
    {{
      "id": 1,
      "patient": "Patient demographics",
      "condition": "Similar condition",
      "treatment": "Treatment used",
      "outcome": "Clinical outcome",
      "duration": "Treatment duration"
    }}
  ]
}}"#,
        field(&request.condition),
        field(&request.current_symptoms),
        field(&request.patient_history),
        field(&request.previous_treatments),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prognosis_embeds_fields_verbatim() {
        let request = PrognosisRequest {
            symptoms: Some("fever, cough".to_string()),
            age: Some("42".to_string()),
            gender: Some("female".to_string()),
            lifestyle: Some("sedentary".to_string()),
            comorbidities: Some("asthma".to_string()),
        };
        let prompt = prognosis(&request);
        assert!(prompt.contains("- Symptoms: fever, cough"));
        assert!(prompt.contains("- Age: 42"));
        assert!(prompt.contains("- Comorbidities: asthma"));
        assert!(prompt.contains(r#""riskLevel": "High|Medium|Low""#));
    }

    #[test]
    fn missing_fields_render_as_undefined() {
        let prompt = prognosis(&PrognosisRequest::default());
        assert!(prompt.contains("- Symptoms: undefined"));
        assert!(prompt.contains("- Age: undefined"));
    }

    #[test]
    fn diagnosis_embeds_fields_and_schema() {
        let request = DiagnosisRequest {
            condition: Some("hypertension".to_string()),
            current_symptoms: Some("headache".to_string()),
            patient_history: None,
            previous_treatments: Some("lisinopril".to_string()),
        };
        let prompt = diagnosis(&request);
        assert!(prompt.contains("- Primary Condition/Diagnosis: hypertension"));
        assert!(prompt.contains("- Medical History: undefined"));
        assert!(prompt.contains(r#""treatmentPlan""#));
        assert!(prompt.contains(r#""similarCases""#));
    }

    #[test]
    fn prompts_are_never_empty() {
        assert!(!prognosis(&PrognosisRequest::default()).is_empty());
        assert!(!diagnosis(&DiagnosisRequest::default()).is_empty());
        assert!(!CHATBOT_SYSTEM_PROMPT.is_empty());
    }

    #[test]
    fn chatbot_system_prompt_defers_to_professionals() {
        assert!(CHATBOT_SYSTEM_PROMPT.contains("Never diagnose or prescribe treatments"));
        assert!(CHATBOT_SYSTEM_PROMPT.contains("not a substitute for professional medical advice"));
    }
}
