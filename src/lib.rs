//! # prompt-client
//!
//! Schema-guided chat-completion client for OpenAI-compatible APIs.
//!
//! ## Overview
//!
//! One query is one HTTP round trip: assemble a message list, POST it to the
//! chat-completion endpoint under a bounded timeout, validate the response
//! envelope, and return either the raw answer text or, when a response
//! schema is supplied, the answer parsed as JSON and validated against that
//! schema.
//!
//! There is deliberately no retry, no caching, no streaming and no shared
//! mutable state: configuration is an explicit value created once at startup,
//! and concurrent queries are fully independent.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use prompt_client::PromptClient;
//!
//! #[tokio::main]
//! async fn main() -> prompt_client::Result<()> {
//!     let client = PromptClient::from_env()?;
//!
//!     let answer = client
//!         .query("Name the largest moon of Saturn.")
//!         .system_prompt("Answer in one word.")
//!         .text()
//!         .await?;
//!
//!     println!("{answer}");
//!     Ok(())
//! }
//! ```
//!
//! Structured output with a derived schema:
//!
//! ```rust,no_run
//! use prompt_client::{PromptClient, TypedSchema};
//! use schemars::JsonSchema;
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize, JsonSchema)]
//! struct Moon {
//!     name: String,
//!     diameter_km: f64,
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> prompt_client::Result<()> {
//! let client = PromptClient::from_env()?;
//! let schema = TypedSchema::<Moon>::new()?;
//! let moon: Moon = client
//!     .query("Describe the largest moon of Saturn.")
//!     .structured(&schema)
//!     .await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`client`] | The client and its query builder |
//! | [`config`] | Client settings and per-request configuration merging |
//! | [`transport`] | Single-shot HTTP transport |
//! | [`types`] | Wire types: messages and the response envelope |
//! | [`structured`] | Schema capability, JSON decoding, validation |

pub mod client;
pub mod config;
pub mod structured;
pub mod transport;
pub mod types;

// Re-export main types for convenience
pub use client::{PromptClient, QueryBuilder};
pub use config::{ClientConfig, RequestConfig, RequestOverrides, ResponseFormat};
pub use structured::{OutputSchema, SchemaGenerator, TypedSchema, ValidationError, ValueSchema};
pub use types::{
    message::{Message, Role},
    response::{ChatCompletion, FinishReason, Usage},
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::Error;
