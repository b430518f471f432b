use std::{error::Error, path::Path, sync::Arc};

use ai_llm_service::{LlmServiceProfiles, telemetry};
use api::{ApiConfig, AppState};
use chat_router::{DEFAULT_SEARCH_SUFFIX, ResponseRouter, RouterOptions};
use expert_system::InferenceEngine;
use knowledge_base::{DEFAULT_MAX_CHUNKS, DocumentStore, chunking::DEFAULT_CHUNK_SIZE};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use web_search::{SearchConfig, SerpApiSearch};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // A missing .env is fine; the process environment may already be set.
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(telemetry::env_filter(telemetry::DEFAULT_FILTER))
        .with(telemetry::layer())
        .init();

    let api_cfg = ApiConfig::from_env()?;

    let store = Arc::new(load_knowledge(env_usize("KB_CHUNK_SIZE", DEFAULT_CHUNK_SIZE)?)?);
    let models = LlmServiceProfiles::from_env()?;
    let search = Arc::new(SerpApiSearch::new(SearchConfig::from_env())?);

    let router = ResponseRouter::new(
        models.clone(),
        store,
        search,
        RouterOptions {
            max_chunks: env_usize("KB_MAX_CHUNKS", DEFAULT_MAX_CHUNKS)?,
            search_suffix: std::env::var("SEARCH_QUERY_SUFFIX")
                .unwrap_or_else(|_| DEFAULT_SEARCH_SUFFIX.to_string()),
        },
    );
    let diagnosis = InferenceEngine::new(models.standard().clone());

    let state = Arc::new(AppState::new(api_cfg.keys, router, diagnosis));
    api::start(&api_cfg.address, state).await?;

    Ok(())
}

/// Loads `KNOWLEDGE_DIR` when set; otherwise the store stays empty.
fn load_knowledge(chunk_size: usize) -> Result<DocumentStore, Box<dyn Error>> {
    let mut store = DocumentStore::new(chunk_size);

    match std::env::var("KNOWLEDGE_DIR") {
        Ok(dir) if !dir.trim().is_empty() => {
            let report = store.load_dir(Path::new(dir.trim()))?;
            for (file, reason) in &report.failed {
                warn!(%file, %reason, "document skipped");
            }
            info!(
                documents = report.loaded.len(),
                chunks = store.len(),
                "knowledge base ready"
            );
        }
        _ => warn!("KNOWLEDGE_DIR not set; document retrieval disabled"),
    }

    Ok(store)
}

fn env_usize(name: &str, default: usize) -> Result<usize, Box<dyn Error>> {
    match std::env::var(name) {
        Ok(v) if !v.trim().is_empty() => v
            .trim()
            .parse()
            .map_err(|e| Box::<dyn Error>::from(format!("invalid {name}: {e}"))),
        _ => Ok(default),
    }
}
