//! Injectable voice-shell capabilities.
//!
//! The session never talks to a real microphone or speaker; it only
//! sees these traits, so tests can script an entire conversation.

use async_trait::async_trait;

use crate::error::Result;

/// Source of finalized utterances.
#[async_trait]
pub trait TranscriptSource: Send {
    /// Capture the next finalized transcript.
    ///
    /// Returns `Ok(None)` when the session should end. Implementations
    /// should yield `None` rather than erroring forever when capture is
    /// permanently unavailable.
    async fn next_transcript(&mut self) -> Result<Option<String>>;
}

/// Reads reply text aloud.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Speak the given text to completion.
    async fn speak(&self, text: &str) -> Result<()>;
}

/// Transient user-facing status notices.
pub trait StatusNotifier: Send + Sync {
    /// Surface a notice to the user.
    fn notify(&self, notice: &Notice);
}

/// The notices a session can raise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Capture has started; the user may speak.
    Listening,

    /// Nothing was recognized; no query was made.
    NoSpeechDetected,

    /// Capture failed; no query was made.
    CaptureFailed,

    /// A product matched the query.
    ProductFound { name: String },

    /// The query pipeline failed; nothing to display.
    ProcessingFailed,
}
