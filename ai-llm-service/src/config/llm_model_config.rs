use crate::config::llm_provider::LlmProvider;

/// Configuration for one chat-completion tier.
///
/// # Fields
///
/// - `provider`: Which hosted provider serves this tier.
/// - `model`: The model identifier sent in every request (e.g. `"llama3-8b-8192"`).
/// - `endpoint`: API base URL; `/v1/chat/completions` is appended.
/// - `api_key`: Bearer token for the provider.
/// - `temperature`: Sampling temperature sent with every request.
/// - `timeout_secs`: Optional fixed request timeout. `None` means no timeout.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_model_config::LlmModelConfig;
/// use ai_llm_service::config::llm_provider::LlmProvider;
///
/// let cfg = LlmModelConfig {
///     provider: LlmProvider::OpenAI,
///     model: "gpt-4-turbo-preview".to_string(),
///     endpoint: "https://api.openai.com".to_string(),
///     api_key: "sk-...".to_string(),
///     temperature: 0.3,
///     timeout_secs: Some(30),
/// };
/// assert_eq!(cfg.chat_url(), "https://api.openai.com/v1/chat/completions");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LlmModelConfig {
    /// The hosted provider (Groq or OpenAI).
    pub provider: LlmProvider,

    /// Model identifier string.
    pub model: String,

    /// API base URL (without the `/v1/...` suffix).
    pub endpoint: String,

    /// Provider API key, sent as `Authorization: Bearer <key>`.
    pub api_key: String,

    /// Sampling temperature.
    pub temperature: f32,

    /// Optional request timeout (in seconds).
    pub timeout_secs: Option<u64>,
}

impl LlmModelConfig {
    /// Full chat-completions URL derived from `endpoint`.
    pub fn chat_url(&self) -> String {
        format!(
            "{}/v1/chat/completions",
            self.endpoint.trim().trim_end_matches('/')
        )
    }
}
