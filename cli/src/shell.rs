//! Console implementations of the session capabilities.
//!
//! Typed lines stand in for the microphone and printing stands in for
//! speech synthesis, so the whole pipeline can be exercised without a
//! browser shell.

use std::io::Write;

use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use voicemart_session::{
    Notice, Result, SessionError, SpeechSynthesizer, StatusNotifier, TranscriptSource,
};

/// Reads one utterance per line from stdin; EOF ends the session.
pub struct StdinTranscripts {
    lines: Lines<BufReader<Stdin>>,
}

impl StdinTranscripts {
    /// Create a stdin-backed transcript source.
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }
}

impl Default for StdinTranscripts {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptSource for StdinTranscripts {
    async fn next_transcript(&mut self) -> Result<Option<String>> {
        print!("you> ");
        std::io::stdout()
            .flush()
            .map_err(|err| SessionError::Capture(err.to_string()))?;

        self.lines
            .next_line()
            .await
            .map_err(|err| SessionError::Capture(err.to_string()))
    }
}

/// Prints replies instead of speaking them.
pub struct ConsoleSpeech;

#[async_trait]
impl SpeechSynthesizer for ConsoleSpeech {
    async fn speak(&self, text: &str) -> Result<()> {
        println!("assistant> {text}");
        Ok(())
    }
}

/// Prints status notices to stderr.
pub struct ConsoleNotifier;

impl StatusNotifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        match notice {
            // The input prompt already signals listening.
            Notice::Listening => {}
            Notice::NoSpeechDetected => eprintln!("(nothing heard, try again)"),
            Notice::CaptureFailed => eprintln!("(could not read input)"),
            Notice::ProductFound { name } => eprintln!("(matched: {name})"),
            Notice::ProcessingFailed => eprintln!("(failed to process that, try again)"),
        }
    }
}
