//! Text generation trait
//!
//! `TextGenerator` abstracts over chat-completion backends (Groq, mock, ...)
//! so the pipeline in [`crate::tutor`] never depends on a concrete provider.

use crate::error::TutorResult;
use async_trait::async_trait;
use hindi_tutor::ChatMessage;

/// Fixed sampling parameters sent with every request
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationParams {
    pub max_tokens: u32,
    pub temperature: f32,
    pub top_p: f32,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.7,
            top_p: 1.0,
        }
    }
}

/// Generic trait for chat-completion providers
///
/// Implementations send the messages, wait for the full (non-streamed)
/// reply and return the text of the first choice.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Run one completion and return the first choice's text
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - Raw reply text, possibly with prose around the JSON
    /// * `Err(TutorError::UpstreamError)` - Transport or service failure
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &GenerationParams,
    ) -> TutorResult<String>;

    /// Name used in logs
    fn provider_name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = GenerationParams::default();
        assert_eq!(params.max_tokens, 1000);
        assert_eq!(params.temperature, 0.7);
        assert_eq!(params.top_p, 1.0);
    }
}
