//! Error types for voice sessions.

use thiserror::Error;

/// Result type alias for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors that can occur in a voice session.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Capturing a transcript failed (microphone unavailable, etc.).
    #[error("capture error: {0}")]
    Capture(String),

    /// Speaking a reply failed.
    #[error("speech error: {0}")]
    Speech(String),

    /// The query pipeline failed.
    #[error("query error: {0}")]
    Query(#[from] voicemart_orchestrator::OrchestratorError),
}
