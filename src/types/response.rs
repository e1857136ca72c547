//! Response envelope for a chat-completion call.

use crate::types::message::Message;
use serde::Deserialize;

/// Discriminator tag every chat-completion envelope must carry.
pub const CHAT_COMPLETION_OBJECT: &str = "chat.completion";

/// Validated shape of the provider reply. Exists only for the duration of
/// one call.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletion {
    pub id: String,
    pub model: String,
    pub object: String,
    pub choices: Vec<Choice>,
    pub usage: Usage,
}

impl ChatCompletion {
    /// Check the fixed envelope invariants the deserializer cannot express:
    /// the discriminator tag and a non-empty choice list.
    pub fn ensure_valid(&self) -> crate::Result<()> {
        if self.object != CHAT_COMPLETION_OBJECT {
            return Err(crate::Error::envelope(format!(
                "unexpected object tag '{}' (expected '{}')",
                self.object, CHAT_COMPLETION_OBJECT
            )));
        }
        if self.choices.is_empty() {
            return Err(crate::Error::envelope("response carried no choices"));
        }
        Ok(())
    }

    /// The first choice, which carries the answer this crate returns.
    pub fn primary(&self) -> crate::Result<&Choice> {
        self.choices
            .first()
            .ok_or_else(|| crate::Error::envelope("response carried no choices"))
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: Message,
    pub finish_reason: FinishReason,
}

/// Why generation stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinishReason {
    Stop,
    Length,
    ContentFilter,
    ToolCalls,
}

impl FinishReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            FinishReason::Stop => "stop",
            FinishReason::Length => "length",
            FinishReason::ContentFilter => "content_filter",
            FinishReason::ToolCalls => "tool_calls",
        }
    }
}

/// Token accounting, non-negative by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Usage {
    pub completion_tokens: u64,
    pub prompt_tokens: u64,
    pub total_tokens: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn envelope(object: &str, choices: serde_json::Value) -> serde_json::Value {
        serde_json::json!({
            "id": "chatcmpl-1",
            "model": "gpt-4o-mini",
            "object": object,
            "choices": choices,
            "usage": {"completion_tokens": 5, "prompt_tokens": 7, "total_tokens": 12}
        })
    }

    #[test]
    fn deserializes_a_well_formed_envelope() {
        let completion: ChatCompletion = serde_json::from_value(envelope(
            "chat.completion",
            serde_json::json!([{
                "message": {"role": "assistant", "content": "hi"},
                "finish_reason": "stop"
            }]),
        ))
        .unwrap();

        completion.ensure_valid().unwrap();
        assert_eq!(completion.primary().unwrap().message.content, "hi");
        assert_eq!(completion.usage.total_tokens, 12);
    }

    #[test]
    fn rejects_wrong_object_tag() {
        let completion: ChatCompletion = serde_json::from_value(envelope(
            "text.completion",
            serde_json::json!([{
                "message": {"role": "assistant", "content": "hi"},
                "finish_reason": "stop"
            }]),
        ))
        .unwrap();

        let err = completion.ensure_valid().unwrap_err();
        assert!(err.to_string().contains("unexpected object tag"));
    }

    #[test]
    fn rejects_empty_choices() {
        let completion: ChatCompletion =
            serde_json::from_value(envelope("chat.completion", serde_json::json!([]))).unwrap();
        assert!(completion.ensure_valid().is_err());
        assert!(completion.primary().is_err());
    }

    #[test]
    fn finish_reasons_use_snake_case_wire_names() {
        let reason: FinishReason = serde_json::from_str("\"content_filter\"").unwrap();
        assert_eq!(reason, FinishReason::ContentFilter);
        assert_eq!(reason.as_str(), "content_filter");

        let reason: FinishReason = serde_json::from_str("\"tool_calls\"").unwrap();
        assert_eq!(reason, FinishReason::ToolCalls);
    }

    #[test]
    fn missing_usage_is_a_shape_error() {
        let mut body = envelope(
            "chat.completion",
            serde_json::json!([{
                "message": {"role": "assistant", "content": "hi"},
                "finish_reason": "stop"
            }]),
        );
        body.as_object_mut().unwrap().remove("usage");
        assert!(serde_json::from_value::<ChatCompletion>(body).is_err());
    }
}
