//! Error types for the retrieval orchestrator.

use thiserror::Error;

/// Result type alias for orchestrator operations.
pub type Result<T> = std::result::Result<T, OrchestratorError>;

/// Errors that can escape [`crate::Orchestrator::handle_query`].
///
/// Generation failures never appear here: they degrade to an apology
/// outcome instead of an error.
#[derive(Error, Debug)]
pub enum OrchestratorError {
    /// Embedding the utterance failed. Always a hard error.
    #[error("embedding error: {0}")]
    Embedding(#[from] voicemart_embeddings::EmbeddingError),

    /// Catalog search failed and the configured policy propagates it.
    #[error("catalog error: {0}")]
    Catalog(#[from] voicemart_catalog::CatalogError),
}
