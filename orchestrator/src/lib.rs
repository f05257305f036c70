//! # Orchestrator
//!
//! This crate turns one spoken utterance into a reply and an optional
//! product selection. The pipeline is a single linear pass:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Retrieval Orchestrator                       │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  utterance ──► embed ──► search catalog ──► build prompt        │
//! │                                                  │              │
//! │                                                  ▼              │
//! │                                             generate reply      │
//! │                                                  │              │
//! │                                                  ▼              │
//! │                      QueryOutcome { response, product, kind }   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! There is no retry, no backoff, and no caching of intermediate
//! embeddings; a repeated query recomputes everything. Embedding
//! failures propagate to the caller, generation failures degrade to an
//! apology chosen by an injectable [`DegradePolicy`].
//!
//! ## Usage
//!
//! ```rust,ignore
//! use voicemart_orchestrator::Orchestrator;
//!
//! let orchestrator = Orchestrator::new(embeddings, catalog, generator);
//! let outcome = orchestrator.handle_query("I need a phone").await?;
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod policy;
pub mod prompt;

pub use config::{QueryConfig, SearchFailurePolicy};
pub use engine::{Orchestrator, OrchestratorBuilder, QueryOutcome, ResponseKind};
pub use error::{OrchestratorError, Result};
pub use policy::{DegradePolicy, FixedApology};
pub use prompt::{fallback_prompt, grounded_prompt};
