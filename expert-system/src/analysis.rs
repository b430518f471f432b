//! Strict parsing of the model's analysis reply, with fixed fallbacks.

use serde::Deserialize;
use serde_json::Number;

const FALLBACK_SCORE: u32 = 50;
const FALLBACK_SEVERITY: &str = "Ringan";
const FALLBACK_URGENCY: &str = "Rendah";

/// Fields the model is asked to produce. `risk_factors` is optional.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub(crate) struct Analysis {
    pub health_score: Number,
    pub severity_level: String,
    pub urgency_level: String,
    #[serde(default)]
    pub risk_factors: Vec<String>,
    pub possible_conditions: Vec<String>,
    pub recommendations: Vec<String>,
}

/// Why the reply could not be used.
#[derive(Debug)]
pub(crate) enum AnalysisFailure {
    Empty,
    Unparseable(serde_json::Error),
}

impl Analysis {
    pub(crate) fn parse(raw: &str) -> Result<Self, AnalysisFailure> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(AnalysisFailure::Empty);
        }
        serde_json::from_str(trimmed).map_err(AnalysisFailure::Unparseable)
    }

    /// Used when the model replied with nothing.
    pub(crate) fn empty_reply_fallback() -> Self {
        Self::fallback("Data tidak cukup", "Silakan periksa koneksi atau coba lagi")
    }

    /// Used when the reply was not the expected JSON object.
    pub(crate) fn parse_failure_fallback() -> Self {
        Self::fallback(
            "Gagal memproses data",
            "Silakan coba lagi atau konsultasi dengan dokter",
        )
    }

    fn fallback(condition: &str, recommendation: &str) -> Self {
        Self {
            health_score: Number::from(FALLBACK_SCORE),
            severity_level: FALLBACK_SEVERITY.to_string(),
            urgency_level: FALLBACK_URGENCY.to_string(),
            risk_factors: Vec::new(),
            possible_conditions: vec![condition.to_string()],
            recommendations: vec![recommendation.to_string()],
        }
    }
}
