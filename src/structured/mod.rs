//! Structured output: schema description, content decoding, validation.
//!
//! The flow mirrors the request path: a schema describes the expected shape
//! (sent to the model as an instruction), the model's answer is decoded back
//! into JSON, and the same schema validates the result.
//!
//! # Examples
//!
//! ```
//! use prompt_client::structured::{OutputSchema, ValueSchema};
//! use serde_json::json;
//!
//! let schema = ValueSchema::new(json!({
//!     "type": "object",
//!     "properties": {"name": {"type": "string"}},
//!     "required": ["name"]
//! }))
//! .unwrap();
//!
//! let value = schema.parse(json!({"name": "Alice"})).unwrap();
//! assert_eq!(value["name"], "Alice");
//! ```

pub mod error;
pub mod schema;
pub mod validator;

pub use error::ValidationError;
pub use schema::{OutputSchema, SchemaGenerator, TypedSchema, ValueSchema};
pub use validator::SchemaChecker;

use regex::Regex;
use serde_json::Value;

/// Decode model output into JSON.
///
/// Direct parsing is tried first, so content that is exactly a serialized
/// JSON value is returned unchanged. Models occasionally wrap their answer in
/// a markdown code fence or surround it with prose; the fallbacks peel those
/// layers off before giving up.
pub fn extract_json(text: &str) -> Option<Value> {
    let text = text.trim();
    if let Ok(parsed) = serde_json::from_str::<Value>(text) {
        return Some(parsed);
    }

    let patterns = [
        r"```json\s*([\s\S]*?)\s*```",
        r"```\s*([\s\S]*?)\s*```",
        r"\{[\s\S]*\}",
        r"\[[\s\S]*\]",
    ];

    for pattern in patterns {
        if let Ok(re) = Regex::new(pattern) {
            if let Some(captures) = re.captures(text) {
                let candidate = captures
                    .get(1)
                    .or_else(|| captures.get(0))
                    .map(|c| c.as_str())
                    .unwrap_or(text);
                if let Ok(parsed) = serde_json::from_str::<Value>(candidate.trim()) {
                    return Some(parsed);
                }
            }
        }
    }

    None
}

/// Pretty-print `raw` as JSON for diagnostics; fall back to the verbatim text
/// when it is not parseable.
pub(crate) fn pretty_or_verbatim(raw: &str) -> String {
    serde_json::from_str::<Value>(raw)
        .ok()
        .and_then(|v| serde_json::to_string_pretty(&v).ok())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_plain_json() {
        assert_eq!(extract_json(r#"{"a": 1}"#), Some(json!({"a": 1})));
    }

    #[test]
    fn extracts_from_json_fence() {
        let text = "Here you go:\n```json\n{\"a\": 1}\n```";
        assert_eq!(extract_json(text), Some(json!({"a": 1})));
    }

    #[test]
    fn extracts_from_bare_fence() {
        let text = "```\n[1, 2, 3]\n```";
        assert_eq!(extract_json(text), Some(json!([1, 2, 3])));
    }

    #[test]
    fn extracts_object_embedded_in_prose() {
        let text = "The answer is {\"a\": 1} as requested.";
        assert_eq!(extract_json(text), Some(json!({"a": 1})));
    }

    #[test]
    fn gives_up_on_non_json() {
        assert_eq!(extract_json("not json"), None);
    }

    #[test]
    fn pretty_prints_parseable_content() {
        let shown = pretty_or_verbatim(r#"{"a":1}"#);
        assert!(shown.contains("\n"));
        assert!(shown.contains("\"a\": 1"));
    }

    #[test]
    fn leaves_unparseable_content_verbatim() {
        assert_eq!(pretty_or_verbatim("not json"), "not json");
    }
}
