//! # Generation
//!
//! Natural-language response generation for Voicemart. The orchestrator
//! hands a fully assembled prompt to a [`ResponseGenerator`]; the bundled
//! implementation talks to the OpenAI chat completions API.
//!
//! Failure at this boundary is a hard error with no partial text; the
//! degrade-to-apology policy lives a layer above, in the orchestrator.

pub mod error;
pub mod generator;

pub use error::{GenerationError, Result};
pub use generator::{OpenAiGenerator, ResponseGenerator};
