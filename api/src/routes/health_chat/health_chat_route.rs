//! POST /v1/health/chat

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use chat_router::HealthQuery;
use tracing::{info, instrument};

use crate::{
    core::{
        app_state::AppState,
        auth::{KeyTier, authorize},
    },
    error_handler::{AppError, AppResult},
    routes::health_chat::health_chat_response::HealthResponse,
};

/// Handler: POST /v1/health/chat
///
/// The key is checked before the body. `ITHAI-2.0` needs the premium key.
///
/// # Example
/// ```bash
/// curl -X POST http://127.0.0.1:8000/v1/health/chat \
///   -H 'content-type: application/json' -H 'x-api-key: <key>' \
///   -d '{"question":"Apakah aman minum kopi saat hamil?","useWebSearch":true}'
/// ```
#[instrument(name = "health_chat", skip_all)]
pub async fn health_chat(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<HealthQuery>, JsonRejection>,
) -> AppResult<Json<HealthResponse>> {
    let tier = authorize(&headers, &state.keys)?;
    let Json(query) = body?;

    if query.version.is_premium() && tier != KeyTier::Premium {
        return Err(AppError::PremiumVersion);
    }

    info!(
        ?tier,
        version = ?query.version,
        web_search = query.use_web_search,
        question_len = query.question.len(),
        "chat request"
    );

    let routed = state.router.answer(&query).await?;

    Ok(Json(HealthResponse {
        answer: routed.answer,
        sources: if query.use_web_search {
            routed.sources
        } else {
            Vec::new()
        },
        is_document_based: routed.is_document_based,
        version: query.version,
    }))
}
