//! The retrieval orchestrator.

use std::sync::Arc;

use tracing::{debug, info, warn};

use voicemart_catalog::{CatalogStore, Product};
use voicemart_embeddings::{EmbeddingProvider, EmbeddingRequest};
use voicemart_generation::ResponseGenerator;

use crate::config::{QueryConfig, SearchFailurePolicy};
use crate::error::Result;
use crate::policy::{DegradePolicy, FixedApology};
use crate::prompt::{fallback_prompt, grounded_prompt};

/// How the reply in a [`QueryOutcome`] was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseKind {
    /// Generated from the matched product's details.
    Grounded,

    /// Generated without a match, asking to clarify.
    Fallback,

    /// Substituted by the degrade policy after a generation failure.
    Apology,
}

/// Result of handling one utterance.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The reply text to present and speak.
    pub response: String,

    /// The selected product, if any candidate cleared the threshold.
    pub product: Option<Product>,

    /// Which path produced the reply.
    pub kind: ResponseKind,
}

impl QueryOutcome {
    /// Whether this outcome came from the degrade path.
    pub fn is_degraded(&self) -> bool {
        self.kind == ResponseKind::Apology
    }
}

/// Turns one utterance into a reply and an optional product selection.
///
/// The pipeline is strictly sequential: embed, then search, then
/// generate. `handle_query` never mutates the catalog, and callers are
/// responsible for serializing invocations within a session.
pub struct Orchestrator {
    /// Embedding provider.
    embeddings: Arc<dyn EmbeddingProvider>,

    /// Product catalog.
    catalog: Arc<dyn CatalogStore>,

    /// Reply generator.
    generator: Arc<dyn ResponseGenerator>,

    /// Generation-failure policy.
    policy: Arc<dyn DegradePolicy>,

    /// Query configuration.
    config: QueryConfig,
}

impl Orchestrator {
    /// Create an orchestrator with default config and policy.
    pub fn new(
        embeddings: Arc<dyn EmbeddingProvider>,
        catalog: Arc<dyn CatalogStore>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> Self {
        Self::builder(embeddings, catalog, generator).build()
    }

    /// Create an orchestrator builder.
    pub fn builder(
        embeddings: Arc<dyn EmbeddingProvider>,
        catalog: Arc<dyn CatalogStore>,
        generator: Arc<dyn ResponseGenerator>,
    ) -> OrchestratorBuilder {
        OrchestratorBuilder {
            embeddings,
            catalog,
            generator,
            policy: Arc::new(FixedApology::default()),
            config: QueryConfig::default(),
        }
    }

    /// The active query configuration.
    pub fn config(&self) -> &QueryConfig {
        &self.config
    }

    /// Handle one utterance.
    ///
    /// The utterance must be non-empty after trimming; rejecting empty
    /// input is the caller's job. Embedding failures propagate as hard
    /// errors. Generation failures degrade to the policy's apology with
    /// no product selected.
    pub async fn handle_query(&self, utterance: &str) -> Result<QueryOutcome> {
        debug!("Handling query: {utterance}");

        let embedded = self
            .embeddings
            .embed(EmbeddingRequest::new(utterance))
            .await?;

        let candidates = match self
            .catalog
            .search(
                &embedded.embedding,
                self.config.similarity_threshold,
                self.config.max_candidates,
            )
            .await
        {
            Ok(products) => products,
            Err(err) => match self.config.search_failure {
                SearchFailurePolicy::DegradeToNoMatch => {
                    warn!("Catalog search failed, treating as no match: {err}");
                    Vec::new()
                }
                SearchFailurePolicy::Propagate => return Err(err.into()),
            },
        };

        debug!("Search returned {} candidates", candidates.len());

        // The store's ordering is authoritative: index 0 is the match.
        let selected = candidates.into_iter().next();
        let prompt = match &selected {
            Some(product) => grounded_prompt(utterance, product),
            None => fallback_prompt(utterance),
        };

        match self.generator.generate(&prompt).await {
            Ok(response) => {
                let kind = if let Some(product) = &selected {
                    info!("Matched product: {}", product.name);
                    ResponseKind::Grounded
                } else {
                    ResponseKind::Fallback
                };

                Ok(QueryOutcome {
                    response,
                    product: selected,
                    kind,
                })
            }
            Err(err) => {
                warn!("Response generation failed, degrading to apology: {err}");
                Ok(QueryOutcome {
                    response: self.policy.apology(utterance),
                    product: None,
                    kind: ResponseKind::Apology,
                })
            }
        }
    }
}

/// Builder for [`Orchestrator`].
pub struct OrchestratorBuilder {
    embeddings: Arc<dyn EmbeddingProvider>,
    catalog: Arc<dyn CatalogStore>,
    generator: Arc<dyn ResponseGenerator>,
    policy: Arc<dyn DegradePolicy>,
    config: QueryConfig,
}

impl OrchestratorBuilder {
    /// Set the query configuration.
    pub fn with_config(mut self, config: QueryConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the degrade policy.
    pub fn with_policy(mut self, policy: Arc<dyn DegradePolicy>) -> Self {
        self.policy = policy;
        self
    }

    /// Build the orchestrator.
    pub fn build(self) -> Orchestrator {
        Orchestrator {
            embeddings: self.embeddings,
            catalog: self.catalog,
            generator: self.generator,
            policy: self.policy,
            config: self.config,
        }
    }
}
