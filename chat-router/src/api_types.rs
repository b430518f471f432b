use ai_llm_service::ModelTier;
use serde::{Deserialize, Serialize};

/// Public model version names. `ITHAI-2.0` is the premium tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModelVersion {
    #[default]
    #[serde(rename = "ITHAI-1.0")]
    Ithai1,
    #[serde(rename = "ITHAI-2.0")]
    Ithai2,
}

impl ModelVersion {
    pub fn tier(self) -> ModelTier {
        match self {
            ModelVersion::Ithai1 => ModelTier::Standard,
            ModelVersion::Ithai2 => ModelTier::Premium,
        }
    }

    pub fn is_premium(self) -> bool {
        self.tier() == ModelTier::Premium
    }
}

/// One chat question plus its routing flags.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthQuery {
    pub question: String,
    #[serde(default)]
    pub version: ModelVersion,
    #[serde(default, rename = "useWebSearch")]
    pub use_web_search: bool,
    /// Accepted for compatibility; routing does not read it.
    #[serde(default)]
    pub context: Option<String>,
}

/// What the router produced for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutedAnswer {
    pub answer: String,
    pub sources: Vec<String>,
    pub is_document_based: bool,
}

impl RoutedAnswer {
    pub(crate) fn conversational(answer: String) -> Self {
        Self {
            answer,
            sources: Vec::new(),
            is_document_based: false,
        }
    }
}
