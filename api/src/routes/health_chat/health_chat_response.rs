use chat_router::ModelVersion;
use serde::Serialize;

/// Response payload for /v1/health/chat.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub answer: String,
    pub sources: Vec<String>,
    pub is_document_based: bool,
    pub version: ModelVersion,
}
