//! Prompt construction and response extraction for an LLM-backed Hindi tutor
//!
//! This crate is the pure half of the tutor: it knows what to ask the model
//! and how to read the answer, but performs no I/O. The network side lives in
//! `hindi-tutor-llm`.
//!
//! # Example
//!
//! ```ignore
//! use hindi_tutor::{PromptBuilder, Speech, TranslationResult, extract_json_object};
//!
//! let messages = PromptBuilder::new().build("Have you ever been to India?", Speech::Formal);
//! // ... send `messages` to a chat-completion API, get `reply` back ...
//! let value = extract_json_object(&reply)?;
//! let result = TranslationResult::from_value(value)?;
//! println!("{}", result.hindi_text());
//! ```

pub mod extract;
pub mod few_shot;
pub mod model;
pub mod prompt;
pub mod settings;

// Re-export main types for convenient access
pub use extract::{ExtractError, Extraction, extract_json_object};
pub use few_shot::{casual_example, example_for, formal_example};
pub use model::{
    DEFAULT_QUESTION, GrammarChunk, SentenceBreakdown, Speech, TranslationRequest,
    TranslationResult, WordToken,
};
pub use prompt::{ChatMessage, PromptBuilder, Role, SCHEMA_REMINDER};
pub use settings::BoardSettings;
