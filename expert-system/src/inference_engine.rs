use std::{collections::BTreeMap, sync::Arc};

use ai_llm_service::{AiLlmError, ModelClient};
use tracing::{debug, info, warn};

use crate::{
    analysis::{Analysis, AnalysisFailure},
    prompt::{build_analysis_prompt, build_case_context},
    questions::standard_question_set,
    types::{DiagnosisOutcome, DiagnosisResult},
};

/// Runs the diagnosis flow against one model client.
#[derive(Clone)]
pub struct InferenceEngine {
    llm: Arc<dyn ModelClient>,
}

impl InferenceEngine {
    pub fn new(llm: Arc<dyn ModelClient>) -> Self {
        Self { llm }
    }

    /// Questionnaire when `answers` is absent or empty, otherwise one model
    /// analysis of the complaint and answers.
    ///
    /// # Errors
    /// Only transport or upstream failures of the model call. A reply that
    /// cannot be parsed yields a fallback result instead.
    pub async fn diagnose(
        &self,
        complaint: &str,
        answers: Option<BTreeMap<String, String>>,
    ) -> Result<DiagnosisOutcome, AiLlmError> {
        let answers = match answers {
            Some(a) if !a.is_empty() => a,
            _ => {
                debug!("no answers yet; returning questionnaire");
                return Ok(DiagnosisOutcome::Questions(standard_question_set()));
            }
        };

        let analysis = self.analyze(complaint, &answers).await?;

        Ok(DiagnosisOutcome::Result(DiagnosisResult {
            initial_complaint: complaint.to_string(),
            answers,
            health_score: analysis.health_score,
            severity_level: analysis.severity_level,
            urgency_level: analysis.urgency_level,
            risk_factors: analysis.risk_factors,
            possible_conditions: analysis.possible_conditions,
            recommendations: analysis.recommendations,
        }))
    }

    async fn analyze(
        &self,
        complaint: &str,
        answers: &BTreeMap<String, String>,
    ) -> Result<Analysis, AiLlmError> {
        let prompt = build_analysis_prompt(&build_case_context(complaint, answers));
        debug!(prompt_len = prompt.len(), answers = answers.len(), "requesting analysis");

        let raw = self.llm.get_response(&prompt, "").await?;

        let analysis = match Analysis::parse(&raw) {
            Ok(a) => a,
            Err(AnalysisFailure::Empty) => {
                warn!("empty analysis reply; using fallback");
                Analysis::empty_reply_fallback()
            }
            Err(AnalysisFailure::Unparseable(e)) => {
                warn!(error = %e, reply_len = raw.len(), "analysis reply is not valid JSON; using fallback");
                Analysis::parse_failure_fallback()
            }
        };

        info!(
            severity = %analysis.severity_level,
            urgency = %analysis.urgency_level,
            "diagnosis analyzed"
        );
        Ok(analysis)
    }
}
