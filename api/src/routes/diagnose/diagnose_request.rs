use std::collections::BTreeMap;

use serde::Deserialize;

/// Request payload for /v1/health/diagnose.
#[derive(Debug, Deserialize)]
pub struct DiagnoseRequest {
    pub complaint: String,
    /// Question → answer. Absent or empty asks for the questionnaire.
    #[serde(default)]
    pub answers: Option<BTreeMap<String, String>>,
}
