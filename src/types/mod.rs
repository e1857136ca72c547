//! Wire types for the chat-completion protocol.

pub mod message;
pub mod response;

pub use message::{FunctionCall, Message, Role, ToolCall};
pub use response::{ChatCompletion, Choice, FinishReason, Usage};
