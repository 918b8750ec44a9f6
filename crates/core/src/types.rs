use serde::{Deserialize, Serialize};

/// Prognosis request as posted by the UI form.
///
/// Every field is optional at the transport layer; no validation is applied
/// before prompt construction. Absent fields render as the literal text
/// `undefined` inside the prompt, which is documented behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PrognosisRequest {
    pub symptoms: Option<String>,
    pub age: Option<String>,
    pub gender: Option<String>,
    pub lifestyle: Option<String>,
    pub comorbidities: Option<String>,
}

/// Risk classification in a prognosis result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum RiskLevel {
    High,
    Medium,
    Low,
}

/// Prognosis analysis result.
///
/// Always present in a response, either model-derived or fallback-derived.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrognosisResult {
    pub possible_diseases: Vec<String>,
    pub risk_level: RiskLevel,
    pub recommended_tests: Vec<String>,
}

/// Diagnosis request as posted by the UI form
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRequest {
    pub condition: Option<String>,
    pub current_symptoms: Option<String>,
    pub patient_history: Option<String>,
    pub previous_treatments: Option<String>,
}

/// First-line and alternative treatment options
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreatmentPlan {
    pub primary: Vec<String>,
    pub alternative: Vec<String>,
}

/// A recommended medication with dosing guidance
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Medication {
    pub name: String,
    pub dosage: String,
    pub notes: String,
}

/// A comparable historical case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimilarCase {
    pub id: u32,
    pub patient: String,
    pub condition: String,
    pub treatment: String,
    pub outcome: String,
    pub duration: String,
}

/// Treatment recommendation result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisResult {
    pub treatment_plan: TreatmentPlan,
    pub medications: Vec<Medication>,
    pub follow_up: Vec<String>,
    pub similar_cases: Vec<SimilarCase>,
}

/// Role of a chat participant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

/// A single message in a chatbot conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chatbot request: the conversation so far, most recent message last
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}

/// Chatbot response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResult {
    pub reply: String,
}
