//! Normalization of LLM free text into typed values.
//!
//! The LLM client returns text verbatim; every consumer that expects JSON goes
//! through `parse_generated`, which strips markdown code fences and performs a
//! strict serde parse. There is no semantic repair: the typed value either
//! deserializes completely or the request fails.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};

use crate::errors::AppError;

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
///
/// Loops until no leading fence marker remains, so doubled fences normalize
/// the same as a single fence and already-bare text passes through unchanged.
pub fn strip_code_fences(mut text: &str) -> &str {
    text = text.trim();
    loop {
        let inner = if let Some(rest) = text.strip_prefix("```json") {
            rest
        } else if let Some(rest) = text.strip_prefix("```") {
            rest
        } else {
            return text;
        };

        let inner = inner.trim_start();
        text = match inner.strip_suffix("```") {
            Some(bare) => bare.trim(),
            None => inner,
        };
    }
}

/// Parses normalized LLM output into `T`.
///
/// The parse is strict: a missing required field or wrong-typed value fails
/// the whole response. Failures are terminal for the request; the caller does
/// not retry.
pub fn parse_generated<T: DeserializeOwned>(raw: &str) -> Result<T, AppError> {
    let cleaned = strip_code_fences(raw);
    serde_json::from_str(cleaned).map_err(|e| {
        let head: String = cleaned.chars().take(120).collect();
        AppError::MalformedLlmOutput(format!("{e}; response began: {head:?}"))
    })
}

/// Deserializes an explicit JSON `null` as the field's default value.
///
/// The extraction prompt permits `null` for fields absent from the source
/// text. Pair with `#[serde(default)]` so missing keys default too. A
/// present-but-wrong-typed value is still a hard parse failure.
pub fn null_to_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, serde::Deserialize)]
    struct Sample {
        name: String,
        #[serde(default, deserialize_with = "null_to_default")]
        tags: Vec<String>,
    }

    #[test]
    fn test_strip_fences_with_json_tag() {
        let input = "```json\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_without_tag() {
        let input = "```\n{\"key\": \"value\"}\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_no_fences() {
        let input = "{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_doubled() {
        let input = "```json\n```json\n{\"key\": \"value\"}\n```\n```";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_strip_fences_is_idempotent() {
        let once = strip_code_fences("```json\n{\"a\": 1}\n```");
        assert_eq!(strip_code_fences(once), once);
    }

    #[test]
    fn test_strip_fences_missing_trailing_fence() {
        let input = "```json\n{\"key\": \"value\"}";
        assert_eq!(strip_code_fences(input), "{\"key\": \"value\"}");
    }

    #[test]
    fn test_parse_generated_accepts_fenced_payload() {
        let raw = "```json\n{\"name\": \"Ada\", \"tags\": [\"ml\"]}\n```";
        let sample: Sample = parse_generated(raw).unwrap();
        assert_eq!(sample.name, "Ada");
        assert_eq!(sample.tags, vec!["ml".to_string()]);
    }

    #[test]
    fn test_parse_generated_rejects_prose() {
        let raw = "Sure! Here is the JSON you asked for.";
        let result: Result<Sample, _> = parse_generated(raw);
        assert!(matches!(result, Err(AppError::MalformedLlmOutput(_))));
    }

    #[test]
    fn test_parse_generated_rejects_missing_required_field() {
        let raw = r#"{"tags": ["a"]}"#;
        let result: Result<Sample, _> = parse_generated(raw);
        assert!(matches!(result, Err(AppError::MalformedLlmOutput(_))));
    }

    #[test]
    fn test_parse_generated_rejects_wrong_type() {
        // Strict parse: a wrong-typed field is never silently dropped
        let raw = r#"{"name": "Ada", "tags": "not-a-list"}"#;
        let result: Result<Sample, _> = parse_generated(raw);
        assert!(matches!(result, Err(AppError::MalformedLlmOutput(_))));
    }

    #[test]
    fn test_null_to_default_handles_explicit_null() {
        let sample: Sample = parse_generated(r#"{"name": "Ada", "tags": null}"#).unwrap();
        assert!(sample.tags.is_empty());
    }

    #[test]
    fn test_null_to_default_handles_missing_key() {
        let sample: Sample = parse_generated(r#"{"name": "Ada"}"#).unwrap();
        assert!(sample.tags.is_empty());
    }
}
