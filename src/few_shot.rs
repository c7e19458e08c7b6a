//! One-shot examples used to steer the model's output format
//!
//! Both examples translate "Do you live in India?". They differ only in the
//! pronoun and the auxiliary verb, which is exactly the register convention
//! the model should follow: आप ... हैं for formal speech, तुम ... हो for
//! casual speech.

use crate::model::{GrammarChunk, SentenceBreakdown, Speech, TranslationResult, WordToken};
use std::ops::Range;

/// A token as `(word, reading)`
type TokenSpec = (&'static str, Option<&'static str>);

/// A chunk as `(token range within the sentence, meaning, grammar)`
type ChunkSpec = (Range<usize>, &'static str, &'static str);

const EXAMPLE_ENGLISH: &str = "Do you live in India?";

const FORMAL_SENTENCE: &[TokenSpec] = &[
    ("क्या", Some("kya")),
    ("आप", None),
    ("भारत", Some("bharat")),
    ("में", Some("mein")),
    ("रहते", Some("rehte")),
    ("हैं", Some("hain")),
    ("?", None),
];

const CASUAL_SENTENCE: &[TokenSpec] = &[
    ("क्या", Some("kya")),
    ("तुम", None),
    ("भारत", Some("bharat")),
    ("में", Some("mein")),
    ("रहते", Some("rehte")),
    ("हो", Some("ho")),
    ("?", None),
];

// Same layout for both registers; the verb chunk picks up हैं or हो.
const CHUNKS: &[ChunkSpec] = &[
    (2..3, "India", "Noun"),
    (3..4, "in", "Postposition"),
    (4..6, "live", "Verb (present habitual)"),
    (0..1, "question marker", "Question word"),
    (6..7, "question", "Punctuation"),
];

fn tokens(sentence: &[TokenSpec]) -> Vec<WordToken> {
    sentence
        .iter()
        .map(|(word, reading)| match reading {
            Some(reading) => WordToken::with_reading(word, reading),
            None => WordToken::new(word),
        })
        .collect()
}

fn build_example(sentence: &[TokenSpec]) -> TranslationResult {
    let hindi = tokens(sentence);
    let chunks = CHUNKS
        .iter()
        .map(|(range, meaning, grammar)| GrammarChunk {
            hindi: hindi[range.clone()].to_vec(),
            meaning: meaning.to_string(),
            grammar: grammar.to_string(),
        })
        .collect();

    TranslationResult {
        english: EXAMPLE_ENGLISH.to_string(),
        hindi: hindi.clone(),
        grammar_breakdown: vec![SentenceBreakdown {
            english: EXAMPLE_ENGLISH.to_string(),
            hindi,
            chunks,
        }],
        extra: Default::default(),
    }
}

pub fn formal_example() -> TranslationResult {
    build_example(FORMAL_SENTENCE)
}

pub fn casual_example() -> TranslationResult {
    build_example(CASUAL_SENTENCE)
}

/// The example matching the requested register
pub fn example_for(speech: Speech) -> TranslationResult {
    match speech {
        Speech::Formal => formal_example(),
        Speech::Casual => casual_example(),
    }
}
