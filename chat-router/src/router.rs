use std::sync::Arc;

use ai_llm_service::{AiLlmError, LlmServiceProfiles};
use knowledge_base::{DEFAULT_MAX_CHUNKS, DocumentStore};
use tracing::{debug, info};
use web_search::{SearchProvider, format_results};

use crate::{
    api_types::{HealthQuery, ModelVersion, RoutedAnswer},
    classify::classify_basic,
    platform::{NO_INFORMATION_REPLY, PLATFORM_CONTEXT},
};

/// Topic appended to every web query so results stay on maternal health.
pub const DEFAULT_SEARCH_SUFFIX: &str = " kesehatan ibu hamil indonesia";

/// Knobs for [`ResponseRouter`].
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// Top-N chunks used as document context.
    pub max_chunks: usize,
    /// Appended to the question before it is sent to the search provider.
    pub search_suffix: String,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            max_chunks: DEFAULT_MAX_CHUNKS,
            search_suffix: DEFAULT_SEARCH_SUFFIX.to_string(),
        }
    }
}

/// Decides per question where the context comes from and which tier answers.
///
/// All collaborators are injected, so the router holds no global state and
/// at most one model call and one search call happen per question, in order.
#[derive(Clone)]
pub struct ResponseRouter {
    models: LlmServiceProfiles,
    store: Arc<DocumentStore>,
    search: Arc<dyn SearchProvider>,
    opts: RouterOptions,
}

impl ResponseRouter {
    pub fn new(
        models: LlmServiceProfiles,
        store: Arc<DocumentStore>,
        search: Arc<dyn SearchProvider>,
        opts: RouterOptions,
    ) -> Self {
        Self {
            models,
            store,
            search,
            opts,
        }
    }

    /// Answers one question.
    ///
    /// Without web search: canned reply for greetings/thanks/farewells,
    /// otherwise the standard tier with the platform description. With web
    /// search: documents first, then web results, then a fixed
    /// "no information" reply that needs no model call.
    ///
    /// # Errors
    /// Propagates [`AiLlmError`] from the model call. Search failures never
    /// reach this level.
    pub async fn answer(&self, query: &HealthQuery) -> Result<RoutedAnswer, AiLlmError> {
        if let Some(ctx) = query.context.as_deref() {
            debug!(context_len = ctx.len(), "caller context ignored");
        }

        if !query.use_web_search {
            if let Some(intent) = classify_basic(&query.question) {
                info!(?intent, "canned reply");
                return Ok(RoutedAnswer::conversational(
                    intent.canned_reply().to_string(),
                ));
            }
            return self.conversational(&query.question).await;
        }

        self.grounded(&query.question, query.version).await
    }

    async fn conversational(&self, question: &str) -> Result<RoutedAnswer, AiLlmError> {
        info!(route = "conversational", "routing question");
        let answer = self
            .models
            .standard()
            .get_response(question, PLATFORM_CONTEXT)
            .await?;
        Ok(RoutedAnswer::conversational(answer))
    }

    async fn grounded(
        &self,
        question: &str,
        version: ModelVersion,
    ) -> Result<RoutedAnswer, AiLlmError> {
        let client = self.models.for_tier(version.tier());

        let docs = self
            .store
            .find_relevant_context(question, self.opts.max_chunks);
        if !docs.context.trim().is_empty() {
            info!(
                route = "documents",
                tier = ?version.tier(),
                sources = docs.sources.len(),
                "routing question"
            );
            let answer = client.get_response(question, &docs.context).await?;
            return Ok(RoutedAnswer {
                answer,
                sources: docs.sources,
                is_document_based: true,
            });
        }

        let search_query = format!("{question}{}", self.opts.search_suffix);
        let results = self.search.search(&search_query).await;
        if !results.is_empty() {
            info!(
                route = "web",
                tier = ?version.tier(),
                results = results.len(),
                "routing question"
            );
            let context = format_results(&results);
            let answer = client.get_response(question, &context).await?;
            let sources = results
                .iter()
                .map(|r| format!("Web: {}", r.link))
                .collect();
            return Ok(RoutedAnswer {
                answer,
                sources,
                is_document_based: false,
            });
        }

        info!(route = "no_information", "routing question");
        Ok(RoutedAnswer::conversational(NO_INFORMATION_REPLY.to_string()))
    }
}
