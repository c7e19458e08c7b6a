//! Data types exchanged with the generation service and returned to callers
//!
//! The JSON shape mirrors what the model is asked to produce:
//!
//! ```json
//! {
//!     "english": "Do you live in India?",
//!     "hindi": [{ "word": "क्या", "reading": "kya" }, { "word": "?" }],
//!     "grammarBreakdown": [{ "english": "...", "hindi": [...], "chunks": [...] }]
//! }
//! ```
//!
//! The HTTP endpoint returns the model's object as parsed, untouched.
//! [`TranslationResult`] is a typed view of that object for display code:
//! absent or `null` fields read as empty values, and unknown top-level fields
//! land in `extra`.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use std::str::FromStr;

/// Formality level of the generated Hindi sentence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Speech {
    #[default]
    Formal,
    Casual,
}

impl Speech {
    pub fn as_str(&self) -> &'static str {
        match self {
            Speech::Formal => "formal",
            Speech::Casual => "casual",
        }
    }

    /// Interpret a raw query value.
    ///
    /// Missing or empty values mean `Formal`. Any other value is compared
    /// exactly, with no trimming or case folding; everything that is not
    /// `formal` selects `Casual`.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            None | Some("") => Speech::Formal,
            Some(value) => value.parse().unwrap_or(Speech::Casual),
        }
    }
}

impl fmt::Display for Speech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Speech {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "formal" => Ok(Speech::Formal),
            "casual" => Ok(Speech::Casual),
            other => Err(format!(
                "Unknown speech register '{}' (expected 'formal' or 'casual')",
                other
            )),
        }
    }
}

/// Question asked when the caller does not supply one
pub const DEFAULT_QUESTION: &str = "Have you ever been to India?";

/// A translation request as received from a client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslationRequest {
    pub question: String,
    pub speech: Speech,
}

impl TranslationRequest {
    pub fn new(question: impl Into<String>, speech: Speech) -> Self {
        Self {
            question: question.into(),
            speech,
        }
    }

    /// Build a request from optional raw parameters, applying defaults.
    /// Blank values count as absent.
    pub fn from_params(question: Option<&str>, speech: Option<&str>) -> Self {
        let question = question
            .map(str::trim)
            .filter(|q| !q.is_empty())
            .unwrap_or(DEFAULT_QUESTION);
        Self::new(question, Speech::from_query(speech))
    }
}

impl Default for TranslationRequest {
    fn default() -> Self {
        Self::new(DEFAULT_QUESTION, Speech::Formal)
    }
}

/// One lexical unit of the Hindi sentence
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WordToken {
    #[serde(default, deserialize_with = "null_as_default")]
    pub word: String,
    /// Romanised reading; absent for punctuation and loanwords
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reading: Option<String>,
}

impl WordToken {
    pub fn new(word: &str) -> Self {
        Self {
            word: word.to_string(),
            reading: None,
        }
    }

    pub fn with_reading(word: &str, reading: &str) -> Self {
        Self {
            word: word.to_string(),
            reading: Some(reading.to_string()),
        }
    }

    fn is_punctuation(&self) -> bool {
        !self.word.is_empty()
            && self
                .word
                .chars()
                .all(|c| matches!(c, '?' | '!' | '.' | ',' | '।'))
    }
}

/// A meaning-bearing group of tokens with its grammatical role
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GrammarChunk {
    #[serde(default, deserialize_with = "null_as_default")]
    pub hindi: Vec<WordToken>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub meaning: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grammar: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SentenceBreakdown {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hindi: Vec<WordToken>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub chunks: Vec<GrammarChunk>,
}

impl SentenceBreakdown {
    pub fn hindi_text(&self) -> String {
        join_tokens(&self.hindi)
    }
}

/// The full answer for one question
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TranslationResult {
    #[serde(default, deserialize_with = "null_as_default")]
    pub english: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub hindi: Vec<WordToken>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub grammar_breakdown: Vec<SentenceBreakdown>,
    /// Fields the model added beyond the requested shape
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TranslationResult {
    /// Decode a parsed JSON value.
    ///
    /// Absent and `null` fields default; a field of any other wrong JSON type
    /// is an error.
    pub fn from_value(value: Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value)
    }

    /// Devanagari sentence as display text
    pub fn hindi_text(&self) -> String {
        join_tokens(&self.hindi)
    }

    /// Readings of the top-level tokens, in order, skipping tokens without one
    pub fn readings(&self) -> Vec<&str> {
        self.hindi
            .iter()
            .filter_map(|t| t.reading.as_deref())
            .collect()
    }
}

/// Read `null` the same as an absent field
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Join words with single spaces, attaching punctuation to the previous word
fn join_tokens(tokens: &[WordToken]) -> String {
    let mut text = String::new();
    for token in tokens {
        if !text.is_empty() && !token.is_punctuation() {
            text.push(' ');
        }
        text.push_str(&token.word);
    }
    text
}
