//! Mock text generator for testing
//!
//! Deterministic and API-free, so the whole pipeline (prompt, completion,
//! extraction, decoding) can run without a key or network access.
//!
//! # Example
//!
//! ```ignore
//! use hindi_tutor_llm::{MockGenerator, MockMode, Tutor};
//!
//! #[tokio::test]
//! async fn test_translation() {
//!     let tutor = Tutor::new(MockGenerator::new(MockMode::Example));
//!     let result = tutor.translate("Do you live in India?", Speech::Casual).await.unwrap();
//!     assert_eq!(result.hindi[1].word, "तुम");
//! }
//! ```

use crate::error::{TutorError, TutorResult};
use crate::generator::{GenerationParams, TextGenerator};
use async_trait::async_trait;
use hindi_tutor::{ChatMessage, Role, Speech, example_for};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock reply modes for testing different scenarios
#[derive(Debug, Clone)]
pub enum MockMode {
    /// Reply with the register's few-shot example, wrapped in chatty prose
    Example,
    /// Reply with this exact text
    Reply(String),
    /// Simulate a transport failure
    Error(String),
}

#[derive(Debug, Clone)]
pub struct MockGenerator {
    mode: MockMode,
    /// Optional simulated network delay (in milliseconds)
    delay_ms: u64,
    /// Every message list received, oldest first
    calls: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
}

impl MockGenerator {
    pub fn new(mode: MockMode) -> Self {
        Self::with_delay(mode, 0)
    }

    pub fn with_delay(mode: MockMode, delay_ms: u64) -> Self {
        Self {
            mode,
            delay_ms,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Shorthand for [`MockMode::Reply`]
    pub fn replying(text: &str) -> Self {
        Self::new(MockMode::Reply(text.to_string()))
    }

    /// Message lists received so far
    pub fn calls(&self) -> Vec<Vec<ChatMessage>> {
        self.calls
            .lock()
            .map(|calls| calls.clone())
            .unwrap_or_default()
    }

    async fn apply_delay(&self) {
        if self.delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;
        }
    }

    fn record(&self, messages: &[ChatMessage]) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(messages.to_vec());
        }
    }
}

/// Register requested by the user message ("... in casual speech?")
fn requested_speech(messages: &[ChatMessage]) -> Speech {
    let casual = messages
        .iter()
        .rev()
        .find(|m| m.role == Role::User)
        .is_some_and(|m| m.content.contains("in casual speech"));
    if casual { Speech::Casual } else { Speech::Formal }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &GenerationParams,
    ) -> TutorResult<String> {
        self.apply_delay().await;
        self.record(messages);

        match &self.mode {
            MockMode::Example => {
                let example = example_for(requested_speech(messages));
                let json = serde_json::to_string_pretty(&example)?;
                Ok(format!(
                    "Sure! Here is the breakdown you asked for:\n\n{}\n\nHope that helps!",
                    json
                ))
            }
            MockMode::Reply(text) => Ok(text.clone()),
            MockMode::Error(msg) => Err(TutorError::UpstreamError(msg.clone())),
        }
    }

    fn provider_name(&self) -> &str {
        "Mock Generator"
    }
}
