use ai_llm_service::AiLlmError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error("missing required environment variable: {0}")]
    MissingEnv(&'static str),

    // --- IO / server ---
    #[error("failed to bind listener: {0}")]
    Bind(#[source] std::io::Error),

    #[error("server error: {0}")]
    Server(#[source] std::io::Error),

    // --- Auth ---
    #[error("Missing API key")]
    MissingApiKey,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Access to ITHAI-2.0 requires a premium API key. Please upgrade or use ITHAI-1.0.")]
    PremiumVersion,

    #[error("This endpoint requires a premium API key")]
    PremiumEndpoint,

    // --- Request ---
    #[error("{0}")]
    InvalidBody(String),

    // --- Downstream ---
    #[error(transparent)]
    Model(#[from] AiLlmError),
}

impl AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingApiKey | AppError::InvalidApiKey | AppError::PremiumEndpoint => {
                StatusCode::UNAUTHORIZED
            }
            AppError::PremiumVersion => StatusCode::FORBIDDEN,
            AppError::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::MissingEnv(_)
            | AppError::Bind(_)
            | AppError::Server(_)
            | AppError::Model(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(%status, error = %self, "request failed");
        }
        let body = ErrorBody {
            detail: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::InvalidBody(err.body_text())
    }
}
