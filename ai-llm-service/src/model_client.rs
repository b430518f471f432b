//! The `getResponse(query, context)` operation shared by both tiers.

use std::{future::Future, pin::Pin};

use serde::{Deserialize, Serialize};

use crate::{
    config::{
        default_config::{config_premium, config_standard},
        llm_model_config::LlmModelConfig,
    },
    error_handler::AiLlmError,
    prompts::{premium_system_prompt, standard_system_prompt},
    services::chat_completion_service::ChatCompletionService,
};

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Model tier picked per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelTier {
    Standard,
    Premium,
}

/// A hosted language model answering a user query grounded in a context string.
///
/// Implement this trait to plug in a different backend (or a fake in tests).
pub trait ModelClient: Send + Sync {
    /// Sends `query` as the user turn and `context` inside the tier's system
    /// instruction; returns the raw model text.
    fn get_response<'a>(
        &'a self,
        query: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AiLlmError>>;
}

/// Standard tier: Groq-hosted model, no request timeout.
#[derive(Debug)]
pub struct StandardModelClient {
    service: ChatCompletionService,
}

impl StandardModelClient {
    pub fn new(cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        Ok(Self {
            service: ChatCompletionService::new(cfg)?,
        })
    }

    /// Builds the client from `GROQ_*` environment variables.
    pub fn from_env() -> Result<Self, AiLlmError> {
        Self::new(config_standard()?)
    }

    pub fn config(&self) -> &LlmModelConfig {
        self.service.config()
    }
}

impl ModelClient for StandardModelClient {
    fn get_response<'a>(
        &'a self,
        query: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AiLlmError>> {
        Box::pin(async move {
            let system = standard_system_prompt(context);
            self.service.generate(query, &system).await
        })
    }
}

/// Premium tier: OpenAI-hosted model with a fixed request timeout.
#[derive(Debug)]
pub struct PremiumModelClient {
    service: ChatCompletionService,
}

impl PremiumModelClient {
    /// Creates the premium client. A config without a timeout gets the
    /// default premium timeout applied.
    pub fn new(mut cfg: LlmModelConfig) -> Result<Self, AiLlmError> {
        if cfg.timeout_secs.is_none() {
            cfg.timeout_secs = Some(crate::config::default_config::OPENAI_DEFAULT_TIMEOUT_SECS);
        }
        Ok(Self {
            service: ChatCompletionService::new(cfg)?,
        })
    }

    /// Builds the client from `OPENAI_*` environment variables.
    pub fn from_env() -> Result<Self, AiLlmError> {
        Self::new(config_premium()?)
    }

    pub fn config(&self) -> &LlmModelConfig {
        self.service.config()
    }
}

impl ModelClient for PremiumModelClient {
    fn get_response<'a>(
        &'a self,
        query: &'a str,
        context: &'a str,
    ) -> BoxFuture<'a, Result<String, AiLlmError>> {
        Box::pin(async move {
            let system = premium_system_prompt(context);
            self.service.generate(query, &system).await
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::llm_provider::LlmProvider;

    #[test]
    fn premium_always_has_timeout() {
        let cfg = LlmModelConfig {
            provider: LlmProvider::OpenAI,
            model: "gpt-4-turbo-preview".into(),
            endpoint: "https://api.openai.com".into(),
            api_key: "sk-test".into(),
            temperature: 0.3,
            timeout_secs: None,
        };
        let client = PremiumModelClient::new(cfg).unwrap();
        assert_eq!(client.config().timeout_secs, Some(30));
    }

    #[test]
    fn tier_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ModelTier::Premium).unwrap(),
            "\"premium\""
        );
    }
}
