//! Tier configs loaded from environment variables.
//!
//! Two roles are supported:
//!
//! - **Standard** → Groq-hosted model, no request timeout
//! - **Premium**  → OpenAI-hosted model, fixed request timeout
//!
//! Both tiers use a fixed sampling temperature of [`TEMPERATURE`].
//!
//! # Environment variables
//!
//! Standard:
//! - `GROQ_API_KEY` (mandatory)
//! - `GROQ_URL`     = API base (default [`GROQ_DEFAULT_URL`])
//! - `GROQ_MODEL`   = model id (default [`GROQ_DEFAULT_MODEL`])
//!
//! Premium:
//! - `OPENAI_API_KEY`      (mandatory)
//! - `OPENAI_URL`          = API base (default [`OPENAI_DEFAULT_URL`])
//! - `OPENAI_MODEL`        = model id (default [`OPENAI_DEFAULT_MODEL`])
//! - `OPENAI_TIMEOUT_SECS` = fixed timeout (default [`OPENAI_DEFAULT_TIMEOUT_SECS`])

use crate::{
    config::{llm_model_config::LlmModelConfig, llm_provider::LlmProvider},
    error_handler::{AiLlmError, env_opt_u64, env_or, must_env, validate_http_endpoint},
};

/// Sampling temperature shared by both tiers.
pub const TEMPERATURE: f32 = 0.3;

pub const GROQ_DEFAULT_URL: &str = "https://api.groq.com/openai";
pub const GROQ_DEFAULT_MODEL: &str = "llama3-8b-8192";

pub const OPENAI_DEFAULT_URL: &str = "https://api.openai.com";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const OPENAI_DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Constructs the config for the **standard** tier.
///
/// # Errors
/// - [`crate::ConfigError::MissingVar`] if `GROQ_API_KEY` is absent
/// - [`crate::ConfigError::InvalidFormat`] if `GROQ_URL` is not http(s)
pub fn config_standard() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("GROQ_API_KEY")?;
    let endpoint = env_or("GROQ_URL", GROQ_DEFAULT_URL);
    validate_http_endpoint("GROQ_URL", &endpoint)?;

    Ok(LlmModelConfig {
        provider: LlmProvider::Groq,
        model: env_or("GROQ_MODEL", GROQ_DEFAULT_MODEL),
        endpoint,
        api_key,
        temperature: TEMPERATURE,
        timeout_secs: None,
    })
}

/// Constructs the config for the **premium** tier.
///
/// The timeout is always set: an unset `OPENAI_TIMEOUT_SECS` falls back to
/// [`OPENAI_DEFAULT_TIMEOUT_SECS`].
///
/// # Errors
/// - [`crate::ConfigError::MissingVar`] if `OPENAI_API_KEY` is absent
/// - [`crate::ConfigError::InvalidFormat`] if `OPENAI_URL` is not http(s)
/// - [`crate::ConfigError::InvalidNumber`] if `OPENAI_TIMEOUT_SECS` is not a `u64`
pub fn config_premium() -> Result<LlmModelConfig, AiLlmError> {
    let api_key = must_env("OPENAI_API_KEY")?;
    let endpoint = env_or("OPENAI_URL", OPENAI_DEFAULT_URL);
    validate_http_endpoint("OPENAI_URL", &endpoint)?;
    let timeout = env_opt_u64("OPENAI_TIMEOUT_SECS")?.unwrap_or(OPENAI_DEFAULT_TIMEOUT_SECS);

    Ok(LlmModelConfig {
        provider: LlmProvider::OpenAI,
        model: env_or("OPENAI_MODEL", OPENAI_DEFAULT_MODEL),
        endpoint,
        api_key,
        temperature: TEMPERATURE,
        timeout_secs: Some(timeout),
    })
}
