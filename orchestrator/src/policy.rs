//! Degrade policies for generation failures.

/// Strategy applied when response generation fails.
///
/// The orchestrator substitutes the policy's text for the reply and
/// selects no product; the failure itself is logged, never propagated.
pub trait DegradePolicy: Send + Sync {
    /// The reply to use in place of a generated response.
    fn apology(&self, utterance: &str) -> String;
}

/// Default policy: a fixed apology, independent of the utterance.
#[derive(Debug, Clone)]
pub struct FixedApology {
    message: String,
}

impl FixedApology {
    /// The stock apology text.
    pub const DEFAULT_MESSAGE: &'static str =
        "I'm sorry, I had trouble processing your request. Could you please try again?";

    /// Create a policy with a custom message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Default for FixedApology {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MESSAGE)
    }
}

impl DegradePolicy for FixedApology {
    fn apology(&self, _utterance: &str) -> String {
        self.message.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_message() {
        let policy = FixedApology::default();
        assert_eq!(
            policy.apology("anything"),
            "I'm sorry, I had trouble processing your request. Could you please try again?"
        );
    }

    #[test]
    fn test_custom_message() {
        let policy = FixedApology::new("Try once more.");
        assert_eq!(policy.apology("anything"), "Try once more.");
    }
}
