//! Locating the JSON object inside free-form model output
//!
//! Models often wrap the requested JSON in prose ("Sure! Here is ...").
//! Two strategies are available:
//!
//! - [`Extraction::Balanced`] scans from the first `{` to its matching `}`,
//!   skipping braces inside string literals. Text after the object is ignored.
//! - [`Extraction::Greedy`] takes everything from the first `{` to the last
//!   `}`. This breaks as soon as the reply contains a second brace block, but
//!   matches what older deployments did.
//!
//! Only the first candidate is ever parsed. Retrying at a later `{` could pick
//! up a nested fragment of a broken payload and report it as a success.

use regex::Regex;
use serde_json::Value;
use std::str::FromStr;
use std::sync::LazyLock;

static GREEDY_OBJECT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{[\s\S]*\}").expect("valid greedy object pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extraction {
    #[default]
    Balanced,
    Greedy,
}

impl FromStr for Extraction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "balanced" => Ok(Extraction::Balanced),
            "greedy" => Ok(Extraction::Greedy),
            other => Err(format!(
                "Unknown extraction mode '{}' (expected 'balanced' or 'greedy')",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The text contains no brace-delimited candidate at all
    NoObject,
    /// An opening brace was found but never closed
    Unterminated,
    /// A candidate was found but is not valid JSON
    InvalidJson(String),
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExtractError::NoObject => write!(f, "No valid JSON found in the response"),
            ExtractError::Unterminated => {
                write!(f, "JSON object in the response is not terminated")
            }
            ExtractError::InvalidJson(msg) => write!(f, "Invalid JSON in the response: {}", msg),
        }
    }
}

impl std::error::Error for ExtractError {}

/// Byte range of the first balanced top-level object
fn balanced_span(text: &str) -> Result<&str, ExtractError> {
    let start = text.find('{').ok_or(ExtractError::NoObject)?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (offset, c) in text[start..].char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }

        match c {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let end = start + offset + c.len_utf8();
                    return Ok(&text[start..end]);
                }
            }
            _ => {}
        }
    }

    Err(ExtractError::Unterminated)
}

fn greedy_span(text: &str) -> Result<&str, ExtractError> {
    GREEDY_OBJECT
        .find(text)
        .map(|m| m.as_str())
        .ok_or(ExtractError::NoObject)
}

impl Extraction {
    /// The raw candidate substring, without parsing it
    pub fn locate<'a>(&self, text: &'a str) -> Result<&'a str, ExtractError> {
        match self {
            Extraction::Balanced => balanced_span(text),
            Extraction::Greedy => greedy_span(text),
        }
    }

    /// Locate and parse the first JSON object in `text`
    pub fn extract(&self, text: &str) -> Result<Value, ExtractError> {
        let candidate = self.locate(text)?;
        serde_json::from_str(candidate).map_err(|e| ExtractError::InvalidJson(e.to_string()))
    }
}

/// Extract with the default (balanced) strategy
pub fn extract_json_object(text: &str) -> Result<Value, ExtractError> {
    Extraction::default().extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::few_shot::{casual_example, formal_example};
    use crate::model::TranslationResult;
    use serde_json::json;

    #[test]
    fn test_exact_object_round_trips() {
        for example in [formal_example(), casual_example()] {
            let text = serde_json::to_string(&example).unwrap();
            for mode in [Extraction::Balanced, Extraction::Greedy] {
                let value = mode.extract(&text).unwrap();
                assert_eq!(TranslationResult::from_value(value).unwrap(), example);
            }
        }
    }

    #[test]
    fn test_pretty_printed_object_round_trips() {
        let example = formal_example();
        let text = serde_json::to_string_pretty(&example).unwrap();
        let value = extract_json_object(&text).unwrap();
        assert_eq!(value, serde_json::to_value(&example).unwrap());
    }

    #[test]
    fn test_surrounding_prose_is_ignored() {
        let text = r#"Sure! {"english":"Hi"} Hope that helps."#;
        for mode in [Extraction::Balanced, Extraction::Greedy] {
            assert_eq!(mode.locate(text).unwrap(), r#"{"english":"Hi"}"#);
            assert_eq!(mode.extract(text).unwrap(), json!({ "english": "Hi" }));
        }
    }

    #[test]
    fn test_no_braces_is_no_object() {
        let text = "I'm sorry, I can't help with that.";
        assert_eq!(extract_json_object(text), Err(ExtractError::NoObject));
        assert_eq!(Extraction::Greedy.extract(text), Err(ExtractError::NoObject));
    }

    #[test]
    fn test_trailing_comma_is_invalid_json() {
        let text = r#"Here you go: {"english": "Hi", "hindi": [],}"#;
        for mode in [Extraction::Balanced, Extraction::Greedy] {
            match mode.extract(text) {
                Err(ExtractError::InvalidJson(_)) => {}
                other => panic!("Expected InvalidJson, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_balanced_ignores_braces_inside_strings() {
        let text = r#"{"meaning": "a } brace and a { brace", "grammar": "Noun"} done"#;
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["meaning"], "a } brace and a { brace");
    }

    #[test]
    fn test_balanced_handles_escaped_quotes() {
        let text = r#"{"english": "She said \"hi}\""} trailing"#;
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["english"], "She said \"hi}\"");
    }

    #[test]
    fn test_balanced_stops_at_first_object() {
        let text = r#"{"english": "first"} and also {"english": "second"}"#;
        assert_eq!(extract_json_object(text).unwrap(), json!({ "english": "first" }));
    }

    #[test]
    fn test_greedy_spans_to_last_brace() {
        // Two blocks make the greedy candidate invalid JSON
        let text = r#"{"english": "first"} and also {"english": "second"}"#;
        assert_eq!(Extraction::Greedy.locate(text).unwrap(), text);
        assert!(matches!(
            Extraction::Greedy.extract(text),
            Err(ExtractError::InvalidJson(_))
        ));
    }

    #[test]
    fn test_balanced_unterminated_object() {
        let text = r#"Result: {"english": "Hi", "hindi": ["#;
        assert_eq!(extract_json_object(text), Err(ExtractError::Unterminated));
    }

    #[test]
    fn test_nested_objects_are_kept_whole() {
        let text = r#"```json
{"english": "Hi", "hindi": [{"word": "नमस्ते", "reading": "namaste"}]}
```"#;
        let value = extract_json_object(text).unwrap();
        assert_eq!(value["hindi"][0]["reading"], "namaste");
    }

    #[test]
    fn test_extraction_from_str() {
        assert_eq!("balanced".parse::<Extraction>().unwrap(), Extraction::Balanced);
        assert_eq!("GREEDY".parse::<Extraction>().unwrap(), Extraction::Greedy);
        assert!("lazy".parse::<Extraction>().is_err());
    }
}
