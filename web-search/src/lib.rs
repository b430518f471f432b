//! Web search for grounding answers when no loaded document matches.
//!
//! Public API:
//! - [`SearchProvider`]: `search(query) -> Vec<SearchResult>`, never fails outward.
//! - [`SerpApiSearch`]: Google results through SerpApi, region/language pinned,
//!   API keys rotated round-robin.
//! - [`format_results`]: render results as raw model context.

mod config;
mod errors;
mod format;
mod key_rotation;
mod serp_api;
mod types;

use std::{future::Future, pin::Pin};

pub use config::SearchConfig;
pub use errors::SearchError;
pub use format::format_results;
pub use key_rotation::KeyRotation;
pub use serp_api::SerpApiSearch;
pub use types::SearchResult;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Search backend. Implementations swallow their own failures and return an
/// empty list instead.
pub trait SearchProvider: Send + Sync {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Vec<SearchResult>>;
}
