//! Board settings shared between the page and the translation endpoint
//!
//! The settings are an explicit value owned by the application state and
//! handed to whoever needs them. Translation only reads `speech`; the other
//! fields are display preferences for the board.

use crate::model::Speech;
use serde::{Deserialize, Serialize};

pub const DEFAULT_TEACHER: &str = "Nanami";
pub const DEFAULT_CLASSROOM: &str = "default";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSettings {
    speech: Speech,
    /// Show readings above the Devanagari words
    furigana: bool,
    /// Show the English gloss
    english: bool,
    teacher: String,
    classroom: String,
}

impl Default for BoardSettings {
    fn default() -> Self {
        Self {
            speech: Speech::Formal,
            furigana: true,
            english: true,
            teacher: DEFAULT_TEACHER.to_string(),
            classroom: DEFAULT_CLASSROOM.to_string(),
        }
    }
}

impl BoardSettings {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speech(&self) -> Speech {
        self.speech
    }

    /// Overwrite the speech register. Touches no other field.
    pub fn set_speech(&mut self, speech: Speech) -> &mut Self {
        self.speech = speech;
        self
    }

    pub fn furigana(&self) -> bool {
        self.furigana
    }

    pub fn set_furigana(&mut self, furigana: bool) -> &mut Self {
        self.furigana = furigana;
        self
    }

    pub fn english(&self) -> bool {
        self.english
    }

    pub fn set_english(&mut self, english: bool) -> &mut Self {
        self.english = english;
        self
    }

    pub fn teacher(&self) -> &str {
        &self.teacher
    }

    pub fn set_teacher(&mut self, teacher: &str) -> &mut Self {
        self.teacher = teacher.to_string();
        self
    }

    pub fn classroom(&self) -> &str {
        &self.classroom
    }

    pub fn set_classroom(&mut self, classroom: &str) -> &mut Self {
        self.classroom = classroom.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = BoardSettings::new();
        assert_eq!(settings.speech(), Speech::Formal);
        assert!(settings.furigana());
        assert!(settings.english());
        assert_eq!(settings.teacher(), "Nanami");
        assert_eq!(settings.classroom(), "default");
    }

    #[test]
    fn test_set_speech_casual_changes_only_speech() {
        let before = BoardSettings::new();
        let mut after = before.clone();
        after.set_speech(Speech::Casual);

        assert_eq!(after.speech(), Speech::Casual);
        assert_eq!(after.furigana(), before.furigana());
        assert_eq!(after.english(), before.english());
        assert_eq!(after.teacher(), before.teacher());
        assert_eq!(after.classroom(), before.classroom());
    }

    #[test]
    fn test_set_speech_formal() {
        let mut settings = BoardSettings::new();
        settings.set_speech(Speech::Casual).set_speech(Speech::Formal);
        assert_eq!(settings.speech(), Speech::Formal);
    }

    #[test]
    fn test_set_speech_is_idempotent() {
        let mut once = BoardSettings::new();
        once.set_speech(Speech::Casual);
        let mut twice = once.clone();
        twice.set_speech(Speech::Casual);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_other_toggles() {
        let mut settings = BoardSettings::new();
        settings
            .set_furigana(false)
            .set_english(false)
            .set_teacher("Naoki")
            .set_classroom("alternative");
        assert!(!settings.furigana());
        assert!(!settings.english());
        assert_eq!(settings.teacher(), "Naoki");
        assert_eq!(settings.classroom(), "alternative");
        assert_eq!(settings.speech(), Speech::Formal);
    }

    #[test]
    fn test_serialized_shape() {
        let value = serde_json::to_value(BoardSettings::new()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "speech": "formal",
                "furigana": true,
                "english": true,
                "teacher": "Nanami",
                "classroom": "default"
            })
        );
    }
}
