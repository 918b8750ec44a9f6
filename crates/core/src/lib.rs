//! medassist-core: Shared types and utilities for the MedAssist AI proxy
//!
//! This crate provides the request/response entities exchanged with the UI,
//! the fixed fallback payloads, and the JSON extraction heuristic applied to
//! free-text model completions.

pub mod extract;
pub mod fallback;
pub mod types;

pub use types::{
    ChatMessage, ChatRequest, ChatResult, DiagnosisRequest, DiagnosisResult, Medication,
    PrognosisRequest, PrognosisResult, RiskLevel, Role, SimilarCase, TreatmentPlan,
};
