//! SerpApi (Google engine) search provider.

use std::time::{Duration, Instant};

use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::{
    BoxFuture, SearchProvider, config::SearchConfig, errors::SearchError,
    key_rotation::KeyRotation, types::SearchResult,
};

/// Google search through SerpApi, pinned to the configured region/language.
#[derive(Debug)]
pub struct SerpApiSearch {
    client: reqwest::Client,
    cfg: SearchConfig,
    keys: KeyRotation,
}

impl SerpApiSearch {
    /// # Errors
    /// Returns [`SearchError::Http`] if the HTTP client cannot be built.
    pub fn new(cfg: SearchConfig) -> Result<Self, SearchError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = cfg.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build()?;
        let keys = KeyRotation::new(cfg.api_keys.clone());

        if keys.is_empty() {
            warn!("SerpApiSearch: no API keys configured; web search will return nothing");
        }
        info!(
            endpoint = %cfg.endpoint,
            keys = keys.len(),
            max_results = cfg.max_results,
            timeout_secs = ?cfg.timeout_secs,
            "SerpApiSearch initialized"
        );

        Ok(Self { client, cfg, keys })
    }

    /// One search attempt with the next key in rotation.
    pub async fn try_search(&self, query: &str) -> Result<Vec<SearchResult>, SearchError> {
        let started = Instant::now();
        let key = self.keys.next_key().ok_or(SearchError::NoApiKey)?;
        let num = self.cfg.max_results.to_string();

        debug!(query_len = query.len(), "GET {}", self.cfg.endpoint);

        let resp = self
            .client
            .get(&self.cfg.endpoint)
            .query(&[
                ("engine", "google"),
                ("q", query),
                ("api_key", key),
                ("num", num.as_str()),
                ("gl", self.cfg.region.as_str()),
                ("hl", self.cfg.language.as_str()),
            ])
            .send()
            .await?;

        let status = resp.status();
        let text = resp.text().await?;
        let body: SerpResponse = serde_json::from_str(&text)?;

        if let Some(err) = body.error {
            return Err(SearchError::Provider(err));
        }
        if !status.is_success() {
            return Err(SearchError::Provider(format!("HTTP {status}")));
        }

        let results: Vec<SearchResult> = body
            .organic_results
            .into_iter()
            .take(self.cfg.max_results)
            .map(|r| SearchResult {
                title: r.title,
                body: r.snippet,
                link: r.link,
            })
            .collect();

        info!(
            hits = results.len(),
            latency_ms = started.elapsed().as_millis(),
            "web search completed"
        );
        Ok(results)
    }
}

impl SearchProvider for SerpApiSearch {
    fn search<'a>(&'a self, query: &'a str) -> BoxFuture<'a, Vec<SearchResult>> {
        Box::pin(async move {
            match self.try_search(query).await {
                Ok(results) => results,
                Err(e) => {
                    warn!(error = %e, "web search failed; continuing without results");
                    Vec::new()
                }
            }
        })
    }
}

#[derive(Debug, Deserialize)]
struct SerpResponse {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    organic_results: Vec<OrganicResult>,
}

#[derive(Debug, Deserialize)]
struct OrganicResult {
    #[serde(default)]
    title: String,
    #[serde(default)]
    snippet: String,
    #[serde(default)]
    link: String,
}
