//! # Embeddings
//!
//! This crate provides semantic embedding generation and similarity
//! ranking for Voicemart product retrieval.
//!
//! ## Features
//!
//! - **Embedding Generation**: Convert free text to dense vectors via an
//!   embedding API
//! - **Similarity Ranking**: Score candidates by cosine similarity,
//!   filtered by a minimum score and capped at a maximum count
//! - **Pluggable Providers**: Any backend implementing [`EmbeddingProvider`]
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                      Embeddings System                          │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  EmbeddingProvider ──► Embedding ──► rank_by_similarity         │
//! │       │                                    │                    │
//! │       ▼                                    ▼                    │
//! │  OpenAI API                       ranked SimilarityResults      │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

pub mod error;
pub mod provider;
pub mod similarity;

pub use error::{EmbeddingError, Result};
pub use provider::{EmbeddingProvider, EmbeddingRequest, EmbeddingResponse, OpenAiEmbeddings};
pub use similarity::{SimilarityResult, cosine_similarity, normalize, rank_by_similarity};

/// A dense vector embedding.
pub type Embedding = Vec<f32>;

/// Dimension of embeddings (varies by model).
pub const DEFAULT_DIMENSION: usize = 1536; // OpenAI text-embedding-3-small
