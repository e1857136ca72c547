//! Single-shot HTTP transport for the chat-completion endpoint.
//!
//! One request, one response. No retry, no backoff, no streaming; the
//! client-level timeout aborts a request that receives no reply in time.

use crate::config::{ClientConfig, RequestConfig};
use crate::types::message::Message;
use crate::types::response::ChatCompletion;
use serde::Serialize;

pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Wire body: the merged request configuration with the message list.
#[derive(Serialize)]
struct ChatRequest<'a> {
    #[serde(flatten)]
    config: &'a RequestConfig,
    messages: &'a [Message],
}

impl HttpTransport {
    pub fn new(config: &ClientConfig) -> crate::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| TransportError::Other(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        })
    }

    /// POST the request and validate the reply against the envelope shape.
    ///
    /// A top-level `error` field in the body short-circuits as a provider
    /// error before any envelope validation.
    pub async fn send(
        &self,
        config: &RequestConfig,
        messages: &[Message],
    ) -> crate::Result<ChatCompletion> {
        let url = format!("{}/chat/completions", self.base_url);
        tracing::debug!(
            model = %config.model,
            messages = messages.len(),
            "dispatching chat-completion request"
        );

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&ChatRequest { config, messages })
            .send()
            .await
            .map_err(TransportError::Http)?;

        let body: serde_json::Value = response.json().await.map_err(TransportError::Http)?;

        if let Some(error) = body.get("error") {
            return Err(crate::Error::Provider {
                payload: error.to_string(),
            });
        }

        let completion: ChatCompletion = serde_json::from_value(body)
            .map_err(|e| crate::Error::envelope(e.to_string()))?;
        completion.ensure_valid()?;

        Ok(completion)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Transport error: {0}")]
    Other(String),
}
