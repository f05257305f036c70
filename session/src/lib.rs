//! # Session
//!
//! The voice-shell seam for Voicemart. A [`VoiceSession`] owns the
//! conversation history and three injectable capabilities:
//!
//! - [`TranscriptSource`]: yields finalized utterances (a microphone in
//!   the real shell, a script in tests, stdin in the CLI)
//! - [`SpeechSynthesizer`]: reads replies aloud
//! - [`StatusNotifier`]: transient user-facing notices
//!
//! The session runs one strictly sequential loop: at most one query is
//! in flight at a time, and the next utterance is only captured once
//! the previous pipeline has completed. The orchestrator itself never
//! touches the conversation log.

pub mod conversation;
pub mod error;
pub mod io;
pub mod session;

pub use conversation::{ConversationLog, ConversationTurn};
pub use error::{Result, SessionError};
pub use io::{Notice, SpeechSynthesizer, StatusNotifier, TranscriptSource};
pub use session::VoiceSession;
