use chat_router::ResponseRouter;
use expert_system::InferenceEngine;

use crate::core::api_config::ApiKeys;

/// Shared state for all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub keys: ApiKeys,
    /// Chat question routing (documents, web search, model tiers).
    pub router: ResponseRouter,
    /// Diagnosis flow, backed by the standard tier.
    pub diagnosis: InferenceEngine,
}

impl AppState {
    pub fn new(keys: ApiKeys, router: ResponseRouter, diagnosis: InferenceEngine) -> Self {
        Self {
            keys,
            router,
            diagnosis,
        }
    }
}
