//! Error types for the product catalog.

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Errors that can occur in the product catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Product has no embedding and cannot be indexed.
    #[error("product has no embedding: {0}")]
    MissingEmbedding(String),

    /// Embedding dimension does not match the store.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Embedding generation or scoring error.
    #[error("embedding error: {0}")]
    Embedding(#[from] voicemart_embeddings::EmbeddingError),

    /// Backend store failure.
    #[error("store error: {0}")]
    Store(String),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
