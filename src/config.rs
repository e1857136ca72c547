//! Client and request configuration.
//!
//! Configuration is an explicit value constructed once at startup and handed
//! to [`crate::PromptClient`]; nothing in the crate reads hidden global state
//! after construction. `ClientConfig::from_env` is the conventional entry
//! point and fails fast when the API key is absent.

use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Default chat-completion endpoint root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Model used when the caller does not override it.
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Per-request timeout enforced by the transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Process-wide client settings: credentials, endpoint, timeout and the
/// request defaults every query starts from. Created once, read-only after.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
    pub defaults: RequestConfig,
}

impl ClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            defaults: RequestConfig::default(),
        }
    }

    /// Build a configuration from the environment.
    ///
    /// `OPENAI_API_KEY` is required. `PROMPT_CLIENT_TIMEOUT_MS`,
    /// `PROMPT_CLIENT_BASE_URL` and `PROMPT_CLIENT_MODEL` override the
    /// corresponding defaults when set.
    pub fn from_env() -> crate::Result<Self> {
        let api_key = env::var("OPENAI_API_KEY")
            .map_err(|_| crate::Error::configuration("OPENAI_API_KEY is not set"))?;

        let mut config = Self::new(api_key);
        if let Some(ms) = env::var("PROMPT_CLIENT_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.timeout = Duration::from_millis(ms);
        }
        if let Ok(url) = env::var("PROMPT_CLIENT_BASE_URL") {
            config.base_url = url;
        }
        if let Ok(model) = env::var("PROMPT_CLIENT_MODEL") {
            config.defaults.model = model;
        }
        Ok(config)
    }

    /// Override the endpoint root (primarily for tests with a mock server).
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn defaults(mut self, defaults: RequestConfig) -> Self {
        self.defaults = defaults;
        self
    }
}

/// Recognized per-request options, serialized directly into the request body.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestConfig {
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(0.0),
            top_p: None,
            frequency_penalty: None,
            response_format: None,
        }
    }
}

impl RequestConfig {
    /// Shallow merge: every `Some` field of `overrides` replaces the value of
    /// the same name, everything else keeps the default.
    pub fn merged(&self, overrides: &RequestOverrides) -> Self {
        Self {
            model: overrides.model.clone().unwrap_or_else(|| self.model.clone()),
            temperature: overrides.temperature.or(self.temperature),
            top_p: overrides.top_p.or(self.top_p),
            frequency_penalty: overrides.frequency_penalty.or(self.frequency_penalty),
            response_format: overrides
                .response_format
                .clone()
                .or_else(|| self.response_format.clone()),
        }
    }
}

/// Caller-supplied partial overrides for [`RequestConfig`].
#[derive(Debug, Clone, Default)]
pub struct RequestOverrides {
    pub model: Option<String>,
    pub temperature: Option<f64>,
    pub top_p: Option<f64>,
    pub frequency_penalty: Option<f64>,
    pub response_format: Option<ResponseFormat>,
}

impl RequestOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    pub fn response_format(mut self, format: ResponseFormat) -> Self {
        self.response_format = Some(format);
        self
    }
}

/// Structured-output response format flag (`{"type": "json_object"}`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: String,
}

impl ResponseFormat {
    pub fn json_object() -> Self {
        Self {
            kind: "json_object".to_string(),
        }
    }
}
