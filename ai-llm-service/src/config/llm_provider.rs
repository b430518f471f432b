/// Hosted provider behind a model tier.
///
/// Both providers speak the OpenAI chat-completions dialect, so a single
/// HTTP service handles them; the variant only drives logging and error
/// attribution.
///
/// # Examples
///
/// ```
/// use ai_llm_service::config::llm_provider::LlmProvider;
///
/// assert_eq!(LlmProvider::Groq.as_str(), "groq");
/// assert_eq!(LlmProvider::OpenAI.as_str(), "openai");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LlmProvider {
    /// Groq OpenAI-compatible endpoint (standard tier).
    Groq,
    /// OpenAI chat completions (premium tier).
    OpenAI,
}

impl LlmProvider {
    /// Stable lowercase name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmProvider::Groq => "groq",
            LlmProvider::OpenAI => "openai",
        }
    }
}

impl std::fmt::Display for LlmProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
