//! POST /v1/health/diagnose

use std::sync::Arc;

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::HeaderMap,
};
use expert_system::DiagnosisOutcome;
use tracing::{info, instrument};

use crate::{
    core::{app_state::AppState, auth::authorize_premium},
    error_handler::AppResult,
    routes::diagnose::diagnose_request::DiagnoseRequest,
};

/// Handler: POST /v1/health/diagnose (premium key only).
#[instrument(name = "diagnose", skip_all)]
pub async fn diagnose(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Result<Json<DiagnoseRequest>, JsonRejection>,
) -> AppResult<Json<DiagnosisOutcome>> {
    authorize_premium(&headers, &state.keys)?;
    let Json(req) = body?;

    info!(
        complaint_len = req.complaint.len(),
        answers = req.answers.as_ref().map_or(0, |a| a.len()),
        "diagnose request"
    );

    let outcome = state.diagnosis.diagnose(&req.complaint, req.answers).await?;
    Ok(Json(outcome))
}
