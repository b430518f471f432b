//! Errors inside the search provider. They are logged and turned into an
//! empty result list; callers never see them.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    /// No API key configured.
    #[error("no search API key configured")]
    NoApiKey,

    /// HTTP/transport errors. The request URL is stripped because it
    /// carries the API key.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// The provider answered with an `error` field.
    #[error("provider error: {0}")]
    Provider(String),

    /// Body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<reqwest::Error> for SearchError {
    fn from(e: reqwest::Error) -> Self {
        SearchError::Http(e.without_url())
    }
}
