//! The voice session loop.

use tracing::{debug, warn};

use voicemart_orchestrator::Orchestrator;

use crate::conversation::ConversationLog;
use crate::error::Result;
use crate::io::{Notice, SpeechSynthesizer, StatusNotifier, TranscriptSource};

/// Drives one user's voice conversation.
///
/// The loop is strictly sequential: capture, process, speak, repeat.
/// That ordering is what serializes queries — a new utterance is only
/// captured after the previous pipeline has completed, so there is
/// never more than one query in flight.
pub struct VoiceSession<T, S, N> {
    source: T,
    speech: S,
    notifier: N,
    orchestrator: Orchestrator,
    log: ConversationLog,
}

impl<T, S, N> VoiceSession<T, S, N>
where
    T: TranscriptSource,
    S: SpeechSynthesizer,
    N: StatusNotifier,
{
    /// Create a session over the given capabilities.
    pub fn new(source: T, speech: S, notifier: N, orchestrator: Orchestrator) -> Self {
        Self {
            source,
            speech,
            notifier,
            orchestrator,
            log: ConversationLog::new(),
        }
    }

    /// The conversation so far.
    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    /// Consume the session, returning its conversation log.
    pub fn into_log(self) -> ConversationLog {
        self.log
    }

    /// Run the session until the transcript source is exhausted.
    pub async fn run(&mut self) -> Result<()> {
        loop {
            self.notifier.notify(&Notice::Listening);

            let captured = match self.source.next_transcript().await {
                Ok(Some(text)) => text,
                Ok(None) => break,
                Err(err) => {
                    warn!("Transcript capture failed: {err}");
                    self.notifier.notify(&Notice::CaptureFailed);
                    continue;
                }
            };

            let utterance = captured.trim();
            if utterance.is_empty() {
                debug!("Empty transcript, not querying");
                self.notifier.notify(&Notice::NoSpeechDetected);
                continue;
            }

            self.handle_utterance(utterance).await;
        }

        Ok(())
    }

    /// Run one utterance through the pipeline and record the exchange.
    async fn handle_utterance(&mut self, utterance: &str) {
        self.log.push_user(utterance);

        match self.orchestrator.handle_query(utterance).await {
            Ok(outcome) => {
                if let Some(product) = &outcome.product {
                    self.notifier.notify(&Notice::ProductFound {
                        name: product.name.clone(),
                    });
                }

                self.log.push_assistant(outcome.response.as_str());

                // Speech trouble is worth a warning, never a failed session.
                if let Err(err) = self.speech.speak(&outcome.response).await {
                    warn!("Speech synthesis failed: {err}");
                }
            }
            Err(err) => {
                // Hard pipeline failure: surface it, keep no reply and no
                // product so nothing stale is shown.
                warn!("Query pipeline failed: {err}");
                self.notifier.notify(&Notice::ProcessingFailed);
            }
        }
    }
}
