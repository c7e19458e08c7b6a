//! The translation pipeline
//!
//! 1. Build the three prompt messages for the question and register
//! 2. Run one completion against the generator
//! 3. Locate the first JSON object in the reply text
//! 4. Decode it into a [`TranslationResult`] (typed callers only)
//!
//! [`Tutor::translate_value`] stops after step 3 and hands back the object
//! exactly as the model wrote it.

use crate::config::TutorConfig;
use crate::error::TutorResult;
use crate::generator::{GenerationParams, TextGenerator};
use crate::groq::GroqProvider;
use hindi_tutor::{Extraction, PromptBuilder, Speech, TranslationRequest, TranslationResult};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct Tutor {
    generator: Arc<dyn TextGenerator>,
    prompts: PromptBuilder,
    params: GenerationParams,
    extraction: Extraction,
}

impl Tutor {
    pub fn new<G: TextGenerator + 'static>(generator: G) -> Self {
        Self {
            generator: Arc::new(generator),
            prompts: PromptBuilder::new(),
            params: GenerationParams::default(),
            extraction: Extraction::default(),
        }
    }

    /// A tutor backed by Groq, configured from `config`
    pub fn from_config(config: &TutorConfig) -> TutorResult<Self> {
        let provider = GroqProvider::new(config)?;
        Ok(Self::new(provider)
            .with_params(config.params)
            .with_extraction(config.extraction))
    }

    pub fn with_params(mut self, params: GenerationParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_extraction(mut self, extraction: Extraction) -> Self {
        self.extraction = extraction;
        self
    }

    pub fn provider_name(&self) -> &str {
        self.generator.provider_name()
    }

    /// Ask for a translation and return the reply's JSON object unchanged
    ///
    /// No shape check is made: absent, extra and `null` fields all pass
    /// through as the model wrote them.
    ///
    /// # Returns
    ///
    /// * `Ok(Value)` - The first JSON object in the reply
    /// * `Err(TutorError::UpstreamError)` - The generation call failed
    /// * `Err(TutorError::MalformedResponseError)` - No JSON object could be
    ///   located or parsed in the reply
    pub async fn translate_value(&self, question: &str, speech: Speech) -> TutorResult<Value> {
        let messages = self.prompts.build(question, speech);
        info!(
            "Asking {} how to say '{}' ({} speech)",
            self.generator.provider_name(),
            question,
            speech
        );

        let raw = self.generator.complete(&messages, &self.params).await?;
        debug!("Raw API response: {}", raw);

        let value = self.extraction.extract(&raw)?;
        debug!("Parsed JSON response: {}", value);
        Ok(value)
    }

    /// Translate `question` into Hindi and decode the typed view
    ///
    /// Fails with `MalformedResponseError` when a field has a type the view
    /// cannot read (e.g. `hindi` is a string).
    pub async fn translate(&self, question: &str, speech: Speech) -> TutorResult<TranslationResult> {
        let value = self.translate_value(question, speech).await?;
        let result = TranslationResult::from_value(value)?;
        info!("Translated '{}' → {}", question, result.hindi_text());
        Ok(result)
    }

    pub async fn translate_request_value(&self, request: &TranslationRequest) -> TutorResult<Value> {
        self.translate_value(&request.question, request.speech).await
    }

    pub async fn translate_request(
        &self,
        request: &TranslationRequest,
    ) -> TutorResult<TranslationResult> {
        self.translate(&request.question, request.speech).await
    }
}

impl std::fmt::Debug for Tutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tutor")
            .field("provider", &self.generator.provider_name())
            .field("params", &self.params)
            .field("extraction", &self.extraction)
            .finish()
    }
}
