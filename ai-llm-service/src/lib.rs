//! Hosted chat-completion clients for the two model tiers.
//!
//! - [`model_client::ModelClient`] is the single operation every tier exposes.
//! - [`model_client::StandardModelClient`] talks to the Groq OpenAI-compatible API.
//! - [`model_client::PremiumModelClient`] talks to OpenAI with a fixed timeout.
//! - [`service_profiles::LlmServiceProfiles`] bundles both tiers behind `Arc`s.

pub mod config;
pub mod error_handler;
pub mod model_client;
pub mod prompts;
pub mod service_profiles;
pub mod services;
pub mod telemetry;

pub use error_handler::{AiLlmError, ConfigError, ModelRequestError};
pub use model_client::{BoxFuture, ModelClient, ModelTier, PremiumModelClient, StandardModelClient};
pub use service_profiles::LlmServiceProfiles;
