//! Unified error handling for `ai-llm-service`.
//!
//! This module exposes a single top-level error type [`AiLlmError`] for the whole
//! library, and groups domain-specific errors in nested types ([`ConfigError`],
//! [`ModelRequestError`]). Small helpers for reading/validating environment
//! variables are provided and return the unified [`Result<T>`] alias.
//!
//! All messages include the suffix `[AI LLM Service]` to simplify attribution in logs.

use reqwest::StatusCode;
use thiserror::Error;

use crate::config::llm_provider::LlmProvider;

/* ------------------------------------------------------------------------- */
/* Public result alias                                                       */
/* ------------------------------------------------------------------------- */

/// Unified result alias for the entire crate.
pub type Result<T> = std::result::Result<T, AiLlmError>;

/// Max characters kept from an upstream body when no structured message exists.
const SNIPPET_MAX_CHARS: usize = 300;

/* ------------------------------------------------------------------------- */
/* Top-level error                                                           */
/* ------------------------------------------------------------------------- */

/// Top-level error for the `ai-llm-service` crate.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum AiLlmError {
    /// Configuration/validation errors (startup).
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Upstream answered with a non-success HTTP status.
    #[error(transparent)]
    ModelRequest(#[from] ModelRequestError),

    /// Underlying HTTP transport error (connect, timeout, TLS).
    #[error("[AI LLM Service] transport error: {0}")]
    HttpTransport(#[from] reqwest::Error),

    /// Response payload could not be decoded as a chat completion.
    #[error("[AI LLM Service] decode error: {0}")]
    Decode(String),

    /// Response decoded but carried no message content.
    #[error("[AI LLM Service] {0} returned no choices")]
    EmptyChoices(LlmProvider),
}

/* ------------------------------------------------------------------------- */
/* Model request errors                                                      */
/* ------------------------------------------------------------------------- */

/// Non-success reply from a hosted chat-completion endpoint.
///
/// Carries the upstream status and the provider's own error message when the
/// body contained one (`{"error": {"message": "..."}}`), otherwise a trimmed
/// snippet of the raw body.
#[derive(Debug, Error)]
#[error("[AI LLM Service] {provider} API error (HTTP {status}): {message}")]
pub struct ModelRequestError {
    /// Provider that produced the failure.
    pub provider: LlmProvider,
    /// Upstream HTTP status.
    pub status: StatusCode,
    /// Extracted error message.
    pub message: String,
}

impl ModelRequestError {
    /// Builds the error from a raw upstream body.
    pub fn from_body(provider: LlmProvider, status: StatusCode, body: &str) -> Self {
        let message = extract_error_message(body).unwrap_or_else(|| {
            let snippet = make_snippet(body);
            if snippet.is_empty() {
                "Unknown error".to_string()
            } else {
                snippet
            }
        });

        Self {
            provider,
            status,
            message,
        }
    }
}

/* ------------------------------------------------------------------------- */
/* Config errors                                                             */
/* ------------------------------------------------------------------------- */

/// Error enum for environment/config-driven setup.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable is missing or empty.
    #[error("[AI LLM Service] missing required environment variable: {0}")]
    MissingVar(&'static str),

    /// A number failed to parse (timeouts).
    #[error("[AI LLM Service] invalid number in {var}: {reason}")]
    InvalidNumber {
        /// Variable name (e.g., `OPENAI_TIMEOUT_SECS`).
        var: &'static str,
        /// Human-readable reason (e.g., `expected u64`).
        reason: &'static str,
    },

    /// Value had the wrong format (e.g., invalid URL).
    #[error("[AI LLM Service] invalid format in {var}: {reason}")]
    InvalidFormat {
        /// Variable name (e.g., `GROQ_URL`).
        var: &'static str,
        /// Explanation (e.g., `must start with http:// or https://`).
        reason: &'static str,
    },

    /// The API key cannot be used as a header value.
    #[error("[AI LLM Service] invalid API key for {0}")]
    InvalidApiKey(LlmProvider),
}

/* ------------------------------------------------------------------------- */
/* Env helpers (return unified `Result<T>`)                                  */
/* ------------------------------------------------------------------------- */

/// Fetches a required, non-empty environment variable.
///
/// # Errors
/// Returns [`AiLlmError::Config`] with [`ConfigError::MissingVar`] if the
/// variable is absent or empty.
pub fn must_env(name: &'static str) -> Result<String> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => Ok(v.trim().to_string()),
        _ => Err(ConfigError::MissingVar(name).into()),
    }
}

/// Reads an environment variable, falling back to `default` when unset or empty.
pub fn env_or(name: &str, default: &str) -> String {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().to_string(),
        _ => default.to_string(),
    }
}

/// Parses an optional `u64` from env (`Ok(None)` if unset/empty).
///
/// # Errors
/// Returns [`AiLlmError::Config`] with [`ConfigError::InvalidNumber`] if the
/// variable is set but not a valid `u64`.
pub fn env_opt_u64(name: &'static str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v.trim().parse::<u64>().map(Some).map_err(|_| {
            AiLlmError::from(ConfigError::InvalidNumber {
                var: name,
                reason: "expected u64",
            })
        }),
        _ => Ok(None),
    }
}

/* ------------------------------------------------------------------------- */
/* Validation & body helpers                                                 */
/* ------------------------------------------------------------------------- */

/// Validates that an HTTP endpoint starts with `http://` or `https://`.
///
/// # Errors
/// Returns [`AiLlmError::Config`] with [`ConfigError::InvalidFormat`] when
/// the string does not start with a valid HTTP scheme.
pub fn validate_http_endpoint(var: &'static str, value: &str) -> Result<()> {
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(())
    } else {
        Err(ConfigError::InvalidFormat {
            var,
            reason: "must start with http:// or https://",
        }
        .into())
    }
}

/// Pulls `error.message` out of an OpenAI-style error body.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")?
        .get("message")?
        .as_str()
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_string)
}

/// Trims a body to a short single-line snippet for logs and errors.
pub fn make_snippet(body: &str) -> String {
    let flat = body.split_whitespace().collect::<Vec<_>>().join(" ");
    if flat.chars().count() <= SNIPPET_MAX_CHARS {
        return flat;
    }
    let mut cut: String = flat.chars().take(SNIPPET_MAX_CHARS).collect();
    cut.push('…');
    cut
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_openai_error_message() {
        let body = r#"{"error":{"message":"Incorrect API key provided","type":"invalid_request_error"}}"#;
        let err = ModelRequestError::from_body(LlmProvider::OpenAI, StatusCode::UNAUTHORIZED, body);
        assert_eq!(err.status, StatusCode::UNAUTHORIZED);
        assert_eq!(err.message, "Incorrect API key provided");
    }

    #[test]
    fn falls_back_to_snippet_for_plain_bodies() {
        let err = ModelRequestError::from_body(
            LlmProvider::Groq,
            StatusCode::BAD_GATEWAY,
            "upstream   overloaded\n",
        );
        assert_eq!(err.message, "upstream overloaded");
    }

    #[test]
    fn empty_body_yields_unknown_error() {
        let err = ModelRequestError::from_body(LlmProvider::Groq, StatusCode::BAD_GATEWAY, "");
        assert_eq!(err.message, "Unknown error");
    }

    #[test]
    fn snippet_is_bounded() {
        let long = "x".repeat(SNIPPET_MAX_CHARS * 2);
        assert_eq!(make_snippet(&long).chars().count(), SNIPPET_MAX_CHARS + 1);
    }

    #[test]
    fn endpoint_scheme_is_checked() {
        assert!(validate_http_endpoint("GROQ_URL", "https://api.groq.com/openai").is_ok());
        assert!(validate_http_endpoint("GROQ_URL", "api.groq.com").is_err());
    }
}
