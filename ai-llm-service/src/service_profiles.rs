//! Shared LLM service with two tier profiles: `standard` and `premium`.
//!
//! - Lives in the same Tokio runtime as the application.
//! - Construct once, wrap in `Arc`, and pass clones to dependents.
//! - Clients are trait objects so callers can inject fakes.
//!
//! # Example
//! ```no_run
//! use ai_llm_service::{LlmServiceProfiles, ModelTier};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let svc = LlmServiceProfiles::from_env()?;
//! let txt = svc
//!     .for_tier(ModelTier::Standard)
//!     .get_response("Halo", "Konteks platform")
//!     .await?;
//! println!("{txt}");
//! # Ok(()) }
//! ```

use std::sync::Arc;

use tracing::info;

use crate::{
    error_handler::AiLlmError,
    model_client::{ModelClient, ModelTier, PremiumModelClient, StandardModelClient},
};

/// Both model tiers, ready to be shared across handlers.
#[derive(Clone)]
pub struct LlmServiceProfiles {
    standard: Arc<dyn ModelClient>,
    premium: Arc<dyn ModelClient>,
}

impl LlmServiceProfiles {
    /// Wraps two already-built clients.
    pub fn new(standard: Arc<dyn ModelClient>, premium: Arc<dyn ModelClient>) -> Self {
        Self { standard, premium }
    }

    /// Builds both tiers from environment variables.
    ///
    /// # Errors
    /// Returns [`AiLlmError`] if either tier's config is missing or invalid.
    pub fn from_env() -> Result<Self, AiLlmError> {
        let standard = StandardModelClient::from_env()?;
        let premium = PremiumModelClient::from_env()?;

        info!(
            standard_model = %standard.config().model,
            premium_model = %premium.config().model,
            "LLM service profiles ready"
        );

        Ok(Self::new(Arc::new(standard), Arc::new(premium)))
    }

    /// Client serving `tier`.
    pub fn for_tier(&self, tier: ModelTier) -> &Arc<dyn ModelClient> {
        match tier {
            ModelTier::Standard => &self.standard,
            ModelTier::Premium => &self.premium,
        }
    }

    pub fn standard(&self) -> &Arc<dyn ModelClient> {
        &self.standard
    }

    pub fn premium(&self) -> &Arc<dyn ModelClient> {
        &self.premium
    }
}
