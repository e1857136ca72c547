//! Chat message format.

use serde::{Deserialize, Deserializer, Serialize};

/// A single role-tagged message in a chat-completion request or response.
///
/// Messages are immutable once constructed; a request assembles an ordered
/// `Vec<Message>` and discards it after the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    #[serde(default, deserialize_with = "content_or_empty")]
    pub content: String,
    /// Opaque tool-call references; only present on assistant messages.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_calls: Option<Vec<ToolCall>>,
}

impl Message {
    pub fn system(text: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: text.into(),
            tool_calls: None,
        }
    }

    pub fn user(text: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: text.into(),
            tool_calls: None,
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: text.into(),
            tool_calls: None,
        }
    }

    pub fn tool(text: impl Into<String>) -> Self {
        Self {
            role: Role::Tool,
            content: text.into(),
            tool_calls: None,
        }
    }
}

/// Message role, lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
    Tool,
}

/// Assistant tool invocation, carried verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub function: FunctionCall,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Raw JSON arguments string, exactly as the provider produced it.
    pub arguments: String,
}

// Providers send `"content": null` on tool-call messages.
fn content_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_tag_the_role() {
        assert_eq!(Message::system("a").role, Role::System);
        assert_eq!(Message::user("b").role, Role::User);
        assert_eq!(Message::assistant("c").role, Role::Assistant);
        assert_eq!(Message::tool("d").role, Role::Tool);
    }

    #[test]
    fn serializes_to_role_and_content_only() {
        let body = serde_json::to_value(Message::user("hello")).unwrap();
        assert_eq!(body, serde_json::json!({"role": "user", "content": "hello"}));
    }

    #[test]
    fn deserializes_assistant_message_with_tool_calls_and_null_content() {
        let message: Message = serde_json::from_value(serde_json::json!({
            "role": "assistant",
            "content": null,
            "tool_calls": [{
                "id": "call_1",
                "type": "function",
                "function": {"name": "lookup", "arguments": "{\"q\":\"x\"}"}
            }]
        }))
        .unwrap();
        assert_eq!(message.role, Role::Assistant);
        assert!(message.content.is_empty());
        let calls = message.tool_calls.unwrap();
        assert_eq!(calls[0].function.name, "lookup");
    }

    #[test]
    fn roles_use_lowercase_wire_names() {
        assert_eq!(serde_json::to_string(&Role::System).unwrap(), "\"system\"");
        assert_eq!(serde_json::to_string(&Role::Tool).unwrap(), "\"tool\"");
    }
}
