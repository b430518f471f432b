use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct UsageDoc {
    pub description: &'static str,
}

/// Handler: GET /docs/usage
pub async fn usage_docs() -> Json<UsageDoc> {
    Json(UsageDoc {
        description: "Use the /v1/health/chat endpoint by including 'x-api-key' with a valid key in the header.",
    })
}
