use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Number;

/// Questionnaire returned while the caller has not answered yet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionSet {
    pub questions: Vec<String>,
    pub total_questions: usize,
    pub severity_initial: String,
    pub progress: u32,
}

/// Outcome of one analysis. Every field is always populated, either from the
/// model reply or from a fallback set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    pub initial_complaint: String,
    pub answers: BTreeMap<String, String>,
    /// Kept as the model wrote it (integer or float).
    pub health_score: Number,
    pub severity_level: String,
    pub urgency_level: String,
    pub risk_factors: Vec<String>,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
}

/// What a diagnose call produced; serialized without a tag.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum DiagnosisOutcome {
    Questions(QuestionSet),
    Result(DiagnosisResult),
}
