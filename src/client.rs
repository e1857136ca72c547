//! The prompt client and its query builder.

use crate::config::{ClientConfig, RequestConfig, RequestOverrides, ResponseFormat};
use crate::structured::{self, OutputSchema, ValidationError};
use crate::transport::HttpTransport;
use crate::types::message::Message;
use crate::types::response::{ChatCompletion, FinishReason};
use serde_json::Value;
use std::sync::Arc;

/// Client for issuing one-shot chat-completion queries.
///
/// Holds only the read-only configuration captured at construction and a
/// shared HTTP client; cloning is cheap and concurrent queries are fully
/// independent: each builds its own message list and issues its own request.
#[derive(Clone)]
pub struct PromptClient {
    transport: Arc<HttpTransport>,
    defaults: RequestConfig,
}

impl PromptClient {
    pub fn new(config: ClientConfig) -> crate::Result<Self> {
        let defaults = config.defaults.clone();
        let transport = Arc::new(HttpTransport::new(&config)?);
        Ok(Self {
            transport,
            defaults,
        })
    }

    /// Construct from [`ClientConfig::from_env`]; fails fast when
    /// `OPENAI_API_KEY` is absent.
    pub fn from_env() -> crate::Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Start a query for `prompt`. Finish with [`QueryBuilder::text`] or
    /// [`QueryBuilder::structured`].
    pub fn query(&self, prompt: impl Into<String>) -> QueryBuilder<'_> {
        QueryBuilder {
            client: self,
            prompt: prompt.into(),
            system_prompt: None,
            overrides: RequestOverrides::default(),
        }
    }
}

/// Builder for a single query.
pub struct QueryBuilder<'a> {
    client: &'a PromptClient,
    prompt: String,
    system_prompt: Option<String>,
    overrides: RequestOverrides,
}

impl<'a> QueryBuilder<'a> {
    /// Caller-supplied system message, appended after the JSON instruction
    /// when a schema is in play.
    pub fn system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(prompt.into());
        self
    }

    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.overrides.model = Some(model.into());
        self
    }

    pub fn temperature(mut self, temperature: f64) -> Self {
        self.overrides.temperature = Some(temperature);
        self
    }

    pub fn top_p(mut self, top_p: f64) -> Self {
        self.overrides.top_p = Some(top_p);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f64) -> Self {
        self.overrides.frequency_penalty = Some(penalty);
        self
    }

    /// Replace the whole override set at once.
    pub fn overrides(mut self, overrides: RequestOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Execute and return the first choice's content unmodified.
    pub async fn text(self) -> crate::Result<String> {
        let completion = self.dispatch(None).await?;
        let choice = completion.primary()?;
        Ok(choice.message.content.clone())
    }

    /// Execute with a response schema: the model is instructed to answer in
    /// JSON conforming to `schema.describe()`, and its answer is decoded and
    /// validated through the schema.
    ///
    /// Output that is not valid JSON, or that fails validation, comes back as
    /// [`crate::Error::OutputRejected`] carrying the offending content and
    /// the violation list; the caller decides whether to abort, retry with a
    /// repair prompt, or degrade.
    pub async fn structured<S: OutputSchema>(self, schema: &S) -> crate::Result<S::Output> {
        let description = schema.describe();
        let completion = self.dispatch(Some(&description)).await?;
        let content = completion.primary()?.message.content.clone();

        let value = match structured::extract_json(&content) {
            Some(value) => value,
            None => {
                return Err(reject(
                    &content,
                    vec![ValidationError::without_path("content is not valid JSON")],
                ));
            }
        };

        schema.parse(value).map_err(|errors| reject(&content, errors))
    }

    async fn dispatch(&self, schema_description: Option<&Value>) -> crate::Result<ChatCompletion> {
        if self.prompt.trim().is_empty() {
            return Err(crate::Error::configuration("user prompt must not be empty"));
        }

        let messages = build_messages(
            schema_description,
            self.system_prompt.as_deref(),
            &self.prompt,
        );

        let mut config = self.client.defaults.merged(&self.overrides);
        if schema_description.is_some() {
            // A schema always forces JSON mode, whatever the overrides say.
            config.response_format = Some(ResponseFormat::json_object());
        }

        let completion = self.client.transport.send(&config, &messages).await?;

        let choice = completion.primary()?;
        if choice.finish_reason != FinishReason::Stop {
            tracing::warn!(
                finish_reason = choice.finish_reason.as_str(),
                "generation did not stop naturally; the answer may be truncated or filtered"
            );
        }

        Ok(completion)
    }
}

/// Assemble the ordered message sequence for one request.
fn build_messages(
    schema_description: Option<&Value>,
    system_prompt: Option<&str>,
    prompt: &str,
) -> Vec<Message> {
    let mut messages = Vec::with_capacity(3);
    if let Some(description) = schema_description {
        messages.push(Message::system(json_instruction(description)));
    }
    if let Some(system_prompt) = system_prompt {
        messages.push(Message::system(system_prompt));
    }
    messages.push(Message::user(prompt));
    messages
}

fn json_instruction(description: &Value) -> String {
    let rendered = serde_json::to_string_pretty(description)
        .unwrap_or_else(|_| description.to_string());
    format!(
        "Respond with a single JSON value conforming to the following JSON Schema. \
         Do not include any text outside the JSON.\n\n{}",
        rendered
    )
}

fn reject(content: &str, errors: Vec<ValidationError>) -> crate::Error {
    let shown = structured::pretty_or_verbatim(content);
    tracing::error!(
        violations = errors.len(),
        content = %shown,
        "model output rejected by schema"
    );
    crate::Error::OutputRejected {
        content: shown,
        errors,
    }
}
