//! OpenAI-compatible chat-completion service.
//!
//! Minimal, non-streaming client around `POST {endpoint}/v1/chat/completions`.
//! Groq and OpenAI both accept this dialect, so both tiers share it.
//!
//! Constructor validation:
//! - `cfg.api_key` must be usable as a header value
//! - `cfg.endpoint` must start with http:// or https://
//!
//! Errors are normalized via unified error types in `error_handler`.

use std::time::{Duration, Instant};

use reqwest::header;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info};

use crate::{
    config::llm_model_config::LlmModelConfig,
    error_handler::{
        AiLlmError, ConfigError, ModelRequestError, make_snippet, validate_http_endpoint,
    },
};

/// Thin client for a chat-completions endpoint.
///
/// Constructed from a complete [`LlmModelConfig`]. Internally keeps a
/// preconfigured `reqwest::Client` (default headers, optional timeout).
#[derive(Debug)]
pub struct ChatCompletionService {
    client: reqwest::Client,
    cfg: LlmModelConfig,
    url_chat: String,
}

impl ChatCompletionService {
    /// Creates a new [`ChatCompletionService`] from the given config.
    ///
    /// When `cfg.timeout_secs` is `None` the client has no request timeout.
    ///
    /// # Errors
    /// - [`AiLlmError::Config`] if the endpoint or API key is unusable
    /// - [`AiLlmError::HttpTransport`] if the HTTP client cannot be built
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        validate_http_endpoint("endpoint", cfg.endpoint.trim())?;

        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            header::HeaderValue::from_str(&format!("Bearer {}", cfg.api_key))
                .map_err(|_| ConfigError::InvalidApiKey(cfg.provider))?,
        );
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let mut builder = reqwest::Client::builder().default_headers(headers);
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;

        let url_chat = cfg.chat_url();

        info!(
            provider = %cfg.provider,
            model = %cfg.model,
            endpoint = %cfg.endpoint,
            timeout_secs = ?cfg.timeout_secs,
            "ChatCompletionService initialized"
        );

        Ok(Self {
            client,
            cfg,
            url_chat,
        })
    }

    /// Returns the config this service was built from.
    pub fn config(&self) -> &LlmModelConfig {
        &self.cfg
    }

    /// Performs a **non-streaming** chat completion request.
    ///
    /// `messages` array:
    /// - system message with `system`
    /// - user message with `prompt`.
    ///
    /// # Errors
    /// - [`AiLlmError::ModelRequest`] for non-2xx responses
    /// - [`AiLlmError::HttpTransport`] for client/network failures (incl. timeout)
    /// - [`AiLlmError::Decode`] if the JSON cannot be parsed
    /// - [`AiLlmError::EmptyChoices`] if no choice carries content
    pub async fn generate(&self, prompt: &str, system: &str) -> Result<String, AiLlmError> {
        let started = Instant::now();
        let body = ChatCompletionRequest::from_cfg(&self.cfg, prompt, system);

        debug!(
            provider = %self.cfg.provider,
            model = %self.cfg.model,
            prompt_len = prompt.len(),
            system_len = system.len(),
            "POST {}", self.url_chat
        );

        let resp = self.client.post(&self.url_chat).json(&body).send().await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            let err = ModelRequestError::from_body(self.cfg.provider, status, &text);

            error!(
                %status,
                url = %self.url_chat,
                snippet = %make_snippet(&text),
                provider = %self.cfg.provider,
                model = %self.cfg.model,
                latency_ms = started.elapsed().as_millis(),
                "chat completion returned non-success status"
            );

            return Err(err.into());
        }

        let out: ChatCompletionResponse = match resp.json().await {
            Ok(v) => v,
            Err(e) => {
                error!(
                    error = %e,
                    provider = %self.cfg.provider,
                    model = %self.cfg.model,
                    latency_ms = started.elapsed().as_millis(),
                    "failed to decode chat completion response"
                );
                return Err(AiLlmError::Decode(format!(
                    "serde error: {e}; expected `choices[0].message.content`"
                )));
            }
        };

        let content = out
            .choices
            .into_iter()
            .find_map(|c| c.message.content)
            .ok_or(AiLlmError::EmptyChoices(self.cfg.provider))?;

        info!(
            provider = %self.cfg.provider,
            model = %self.cfg.model,
            latency_ms = started.elapsed().as_millis(),
            answer_len = content.len(),
            "chat completion completed"
        );

        Ok(content)
    }
}

/* ===========================================================================
HTTP payloads
======================================================================== */

/// Request body for `/v1/chat/completions` (non-streaming).
#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: [ChatMessage<'a>; 2],
    temperature: f32,
}

impl<'a> ChatCompletionRequest<'a> {
    fn from_cfg(cfg: &'a LlmModelConfig, prompt: &'a str, system: &'a str) -> Self {
        Self {
            model: &cfg.model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system,
                },
                ChatMessage {
                    role: "user",
                    content: prompt,
                },
            ],
            temperature: cfg.temperature,
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessageOut,
}

#[derive(Debug, Deserialize)]
struct ChatMessageOut {
    content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::llm_provider::LlmProvider;

    fn cfg() -> LlmModelConfig {
        LlmModelConfig {
            provider: LlmProvider::Groq,
            model: "llama3-8b-8192".into(),
            endpoint: "https://api.groq.com/openai/".into(),
            api_key: "gsk-test".into(),
            temperature: 0.3,
            timeout_secs: None,
        }
    }

    #[test]
    fn request_body_has_system_then_user_turn() {
        let cfg = cfg();
        let body = ChatCompletionRequest::from_cfg(&cfg, "Apa itu preeklamsia?", "persona");
        let json = serde_json::to_value(&body).unwrap();

        assert_eq!(json["model"], "llama3-8b-8192");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "persona");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "Apa itu preeklamsia?");
        assert!((json["temperature"].as_f64().unwrap() - 0.3).abs() < 1e-6);
    }

    #[test]
    fn chat_url_strips_trailing_slash() {
        let svc = ChatCompletionService::new(cfg()).unwrap();
        assert_eq!(
            svc.url_chat,
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let mut bad = cfg();
        bad.endpoint = "ftp://example.com".into();
        assert!(ChatCompletionService::new(bad).is_err());
    }
}
