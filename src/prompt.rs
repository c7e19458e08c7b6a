//! Prompt construction for the chat-completion request
//!
//! A request consists of exactly three messages:
//!
//! 1. `system`: the teacher role, with the register's example inlined as JSON
//! 2. `system`: the strict output schema
//! 3. `user`: the question itself
//!
//! # Example
//!
//! ```ignore
//! use hindi_tutor::{PromptBuilder, Speech};
//!
//! let messages = PromptBuilder::new().build("Where is the station?", Speech::Casual);
//! assert_eq!(messages.len(), 3);
//! ```

use crate::few_shot;
use crate::model::Speech;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A role-tagged chat message, serialised the way chat-completion APIs expect
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Output format the model must follow, field for field
pub const SCHEMA_REMINDER: &str = r#"You always respond with a JSON object with the following format:
{
  "english": "",
  "hindi": [{
    "word": "",
    "reading": ""
  }],
  "grammarBreakdown": [{
    "english": "",
    "hindi": [{
      "word": "",
      "reading": ""
    }],
    "chunks": [{
      "hindi": [{
        "word": "",
        "reading": ""
      }],
      "meaning": "",
      "grammar": ""
    }]
  }]
}"#;

#[derive(Debug, Default, Clone)]
pub struct PromptBuilder;

impl PromptBuilder {
    pub fn new() -> Self {
        Self
    }

    /// Role description with the register's example embedded as compact JSON
    pub fn teacher_prompt(&self, speech: Speech) -> String {
        let example = few_shot::example_for(speech);
        // Serialising plain structs of strings cannot fail
        let hindi = serde_json::to_string(&example.hindi).unwrap_or_default();
        let breakdown = serde_json::to_string(&example.grammar_breakdown).unwrap_or_default();

        format!(
            "You are a Hindi language teacher.\n\
             Your student asks you how to say something from English to Hindi.\n\
             You should respond with:\n\
             - english: the English version ex: \"{english}\"\n\
             - hindi: the Hindi translation split into words ex: {hindi}\n\
             - grammarBreakdown: an explanation of the grammar structure per sentence ex: {breakdown}\n",
            english = example.english,
        )
    }

    pub fn user_prompt(&self, question: &str, speech: Speech) -> String {
        format!("How to say {} in Hindi in {} speech?", question, speech)
    }

    /// The ordered message list for one translation request
    pub fn build(&self, question: &str, speech: Speech) -> Vec<ChatMessage> {
        vec![
            ChatMessage::system(self.teacher_prompt(speech)),
            ChatMessage::system(SCHEMA_REMINDER),
            ChatMessage::user(self.user_prompt(question, speech)),
        ]
    }
}
