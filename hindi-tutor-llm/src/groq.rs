//! Groq chat-completion provider
//!
//! Talks to Groq's OpenAI-compatible endpoint at
//! `{base_url}/chat/completions`. Any compatible server works when
//! `GROQ_BASE_URL` points at it.
//!
//! # Authentication
//!
//! The API key is loaded from the `GROQ_API_KEY` environment variable and
//! sent as a bearer token.
//!
//! # Example
//!
//! ```ignore
//! use hindi_tutor::{PromptBuilder, Speech};
//! use hindi_tutor_llm::{GenerationParams, GroqProvider, TextGenerator};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let provider = GroqProvider::from_env()?;
//!     let messages = PromptBuilder::new().build("Good night", Speech::Casual);
//!     let text = provider.complete(&messages, &GenerationParams::default()).await?;
//!     println!("{}", text);
//!     Ok(())
//! }
//! ```

use crate::config::TutorConfig;
use crate::error::{TutorError, TutorResult};
use crate::generator::{GenerationParams, TextGenerator};
use async_trait::async_trait;
use hindi_tutor::ChatMessage;
use serde_json::{Value, json};
use tracing::debug;

#[derive(Clone)]
pub struct GroqProvider {
    /// API key for authentication
    api_key: String,
    /// HTTP client for async requests
    client: reqwest::Client,
    /// Base URL without the `/chat/completions` suffix
    base_url: String,
    model: String,
}

impl GroqProvider {
    /// Create a provider from a configuration
    ///
    /// # Returns
    ///
    /// * `Ok(Self)` - New provider instance
    /// * `Err(TutorError::ConfigError)` - If the API key is blank or the HTTP
    ///   client cannot be built
    pub fn new(config: &TutorConfig) -> TutorResult<Self> {
        if config.api_key.trim().is_empty() {
            return Err(TutorError::ConfigError("API key cannot be empty".to_string()));
        }

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| TutorError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            api_key: config.api_key.clone(),
            client,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
        })
    }

    /// Create a provider from the `GROQ_*` environment variables
    pub fn from_env() -> TutorResult<Self> {
        Self::new(&TutorConfig::from_env()?)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }

    fn request_body(&self, messages: &[ChatMessage], params: &GenerationParams) -> Value {
        json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
            "top_p": params.top_p,
            "stream": false
        })
    }
}

/// Pull `choices[0].message.content` out of a completion reply
fn first_choice_text(reply: &Value) -> TutorResult<String> {
    reply["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            TutorError::UpstreamError(
                "Invalid API response: missing 'choices[0].message.content'".to_string(),
            )
        })
}

impl std::fmt::Debug for GroqProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GroqProvider")
            .field("api_key", &"***")
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[async_trait]
impl TextGenerator for GroqProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> TutorResult<String> {
        let body = self.request_body(messages, params);
        debug!("Sending {} messages to {} ({})", messages.len(), self.endpoint(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        // Check HTTP status
        if !response.status().is_success() {
            let status = response.status();
            let error_text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(TutorError::UpstreamError(format!(
                "API error ({}): {}",
                status, error_text
            )));
        }

        let reply: Value = response.json().await.map_err(|e| {
            TutorError::UpstreamError(format!("Failed to parse API response: {}", e))
        })?;

        first_choice_text(&reply)
    }

    fn provider_name(&self) -> &str {
        "Groq"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hindi_tutor::{PromptBuilder, Speech};

    fn provider() -> GroqProvider {
        GroqProvider::new(&TutorConfig::new("gsk_test".to_string())).unwrap()
    }

    // ========== Initialization Tests ==========

    #[test]
    fn test_new_with_valid_key() {
        let provider = provider();
        assert_eq!(provider.provider_name(), "Groq");
        assert_eq!(provider.model(), "llama3-70b-8192");
    }

    #[test]
    fn test_new_with_empty_key() {
        let result = GroqProvider::new(&TutorConfig::new("  ".to_string()));
        match result {
            Err(TutorError::ConfigError(msg)) => assert!(msg.contains("empty")),
            _ => panic!("Expected ConfigError"),
        }
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            provider().endpoint(),
            "https://api.groq.com/openai/v1/chat/completions"
        );
    }

    // ========== Request Body Tests ==========

    #[test]
    fn test_request_body_carries_fixed_parameters() {
        let messages = PromptBuilder::new().build("Hello", Speech::Formal);
        let body = provider().request_body(&messages, &GenerationParams::default());

        assert_eq!(body["model"], "llama3-70b-8192");
        assert_eq!(body["max_tokens"], 1000);
        assert_eq!(body["top_p"], 1.0);
        assert_eq!(body["stream"], false);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);

        let roles: Vec<&str> = body["messages"]
            .as_array()
            .unwrap()
            .iter()
            .map(|m| m["role"].as_str().unwrap())
            .collect();
        assert_eq!(roles, vec!["system", "system", "user"]);
    }

    // ========== Reply Parsing Tests ==========

    #[test]
    fn test_first_choice_text() {
        let reply = json!({
            "choices": [
                { "message": { "role": "assistant", "content": "first" } },
                { "message": { "role": "assistant", "content": "second" } }
            ]
        });
        assert_eq!(first_choice_text(&reply).unwrap(), "first");
    }

    #[test]
    fn test_first_choice_text_missing() {
        let reply = json!({ "choices": [] });
        assert!(matches!(
            first_choice_text(&reply),
            Err(TutorError::UpstreamError(_))
        ));
    }

    // ========== Debug Implementation Test ==========

    #[test]
    fn test_debug_output() {
        let debug_str = format!("{:?}", provider());
        assert!(debug_str.contains("***"));
        assert!(!debug_str.contains("gsk_test"));
    }

    // ========== Integration Tests (require real API key) ==========

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_completion() {
        if std::env::var("GROQ_API_KEY").is_err() {
            eprintln!("Skipping: GROQ_API_KEY not set");
            return;
        }

        let provider = GroqProvider::from_env().unwrap();
        let messages = PromptBuilder::new().build("Have you ever been to India?", Speech::Formal);
        let text = provider
            .complete(&messages, &GenerationParams::default())
            .await
            .unwrap();
        println!("Reply: {}", text);
        assert!(text.contains('{'));
    }

    #[tokio::test]
    #[ignore] // Run with: cargo test --ignored
    async fn test_real_api_invalid_key() {
        let provider = GroqProvider::new(&TutorConfig::new("invalid-key-xyz".to_string())).unwrap();
        let messages = PromptBuilder::new().build("Hello", Speech::Formal);
        let result = provider
            .complete(&messages, &GenerationParams::default())
            .await;
        assert!(matches!(result, Err(TutorError::UpstreamError(_))));
    }
}
