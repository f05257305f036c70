//! Response generators.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GenerationError, Result};

/// System message for the shopping assistant role.
const SYSTEM_MESSAGE: &str = "You are a friendly voice shopping assistant for an electronics \
     marketplace. Keep replies short, conversational, and suitable for being read aloud.";

/// Trait for response generators.
///
/// A generator either returns complete reply text or an error; there is
/// no partial text and no internal retry.
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Get the name of this generator.
    fn name(&self) -> &str;

    /// Generate a reply for the given prompt.
    async fn generate(&self, prompt: &str) -> Result<String>;

    /// Check if the generator is available (API key set, etc.).
    fn is_available(&self) -> bool;
}

/// OpenAI chat-completions generator.
pub struct OpenAiGenerator {
    /// API key.
    api_key: Option<String>,

    /// API base URL.
    base_url: String,

    /// HTTP client.
    client: reqwest::Client,

    /// Model to use.
    model: String,
}

impl OpenAiGenerator {
    /// Create a new OpenAI generator.
    pub fn new() -> Self {
        Self {
            api_key: std::env::var("OPENAI_API_KEY").ok(),
            base_url: "https://api.openai.com/v1".to_string(),
            client: reqwest::Client::new(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    /// Set the API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the model.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
}

impl Default for OpenAiGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResponseGenerator for OpenAiGenerator {
    fn name(&self) -> &str {
        "openai"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or(GenerationError::ProviderNotConfigured)?;

        debug!("Generating response with model: {}", self.model);

        let body = ChatRequest {
            model: self.model.clone(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_MESSAGE.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.to_string(),
                },
            ],
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if response.status() == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse().ok())
                .unwrap_or(60);

            return Err(GenerationError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(GenerationError::ApiRequest(format!(
                "API error: {error_text}"
            )));
        }

        let result: ChatResponse = response.json().await?;

        let reply = result
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| GenerationError::InvalidResponse("No choices in response".to_string()))?;

        debug!("Generated {} characters of reply text", reply.len());
        Ok(reply)
    }

    fn is_available(&self) -> bool {
        self.api_key.is_some()
    }
}

/// Chat completions request body.
#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
}

/// One chat message.
#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

/// Chat completions response body.
#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn offline_generator() -> OpenAiGenerator {
        OpenAiGenerator {
            api_key: None,
            base_url: "http://localhost".to_string(),
            client: reqwest::Client::new(),
            model: "gpt-4o-mini".to_string(),
        }
    }

    #[test]
    fn test_unconfigured_generator_is_unavailable() {
        assert!(!offline_generator().is_available());
    }

    #[tokio::test]
    async fn test_generate_without_api_key() {
        let err = offline_generator().generate("hello").await.unwrap_err();
        assert!(matches!(err, GenerationError::ProviderNotConfigured));
    }

    #[tokio::test]
    async fn test_generate_success() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "choices": [
                    { "message": { "role": "assistant", "content": "The iPhone is a great pick!" } }
                ]
            })))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::new()
            .with_api_key("test-key")
            .with_base_url(server.uri());

        let reply = generator.generate("Recommend the iPhone").await.unwrap();
        assert_eq!(reply, "The iPhone is a great pick!");
    }

    #[tokio::test]
    async fn test_generate_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::new()
            .with_api_key("test-key")
            .with_base_url(server.uri());

        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::ApiRequest(_)));
    }

    #[tokio::test]
    async fn test_generate_empty_choices() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "choices": [] })),
            )
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::new()
            .with_api_key("test-key")
            .with_base_url(server.uri());

        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(err, GenerationError::InvalidResponse(_)));
    }

    #[tokio::test]
    async fn test_generate_rate_limited() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "7"))
            .mount(&server)
            .await;

        let generator = OpenAiGenerator::new()
            .with_api_key("test-key")
            .with_base_url(server.uri());

        let err = generator.generate("anything").await.unwrap_err();
        assert!(matches!(
            err,
            GenerationError::RateLimited {
                retry_after_secs: 7
            }
        ));
    }
}
