//! Schema capability for structured responses.
//!
//! A schema is anything that can describe the expected result shape as a JSON
//! Schema and parse an arbitrary JSON value against itself. Two concrete
//! implementations cover the common cases: [`ValueSchema`] for a hand-written
//! schema document, [`TypedSchema`] for a shape derived from a Rust type.

use crate::structured::error::ValidationError;
use crate::structured::validator::SchemaChecker;
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use std::marker::PhantomData;

/// Capability contract for response-shape validation.
pub trait OutputSchema {
    /// The value a successful parse produces.
    type Output;

    /// Machine-readable JSON Schema describing the expected shape. Used both
    /// to instruct the model and (indirectly) to validate its answer.
    fn describe(&self) -> Value;

    /// Validate `value` against the schema and convert it into the output
    /// type, reporting every violation on failure.
    fn parse(&self, value: Value) -> Result<Self::Output, Vec<ValidationError>>;
}

/// A schema given as a raw JSON Schema document; parsing returns the
/// validated `serde_json::Value` unchanged.
pub struct ValueSchema {
    raw: Value,
    checker: SchemaChecker,
}

impl ValueSchema {
    pub fn new(schema: Value) -> crate::Result<Self> {
        let checker = SchemaChecker::new(&schema)?;
        Ok(Self {
            raw: schema,
            checker,
        })
    }
}

impl OutputSchema for ValueSchema {
    type Output = Value;

    fn describe(&self) -> Value {
        self.raw.clone()
    }

    fn parse(&self, value: Value) -> Result<Value, Vec<ValidationError>> {
        self.checker.check(&value)?;
        Ok(value)
    }
}

/// A schema derived from a Rust type via `schemars`; parsing deserializes the
/// validated value into `T`.
pub struct TypedSchema<T> {
    raw: Value,
    checker: SchemaChecker,
    _output: PhantomData<T>,
}

impl<T> TypedSchema<T>
where
    T: DeserializeOwned + schemars::JsonSchema,
{
    pub fn new() -> crate::Result<Self> {
        let raw = serde_json::to_value(schemars::schema_for!(T))?;
        let checker = SchemaChecker::new(&raw)?;
        Ok(Self {
            raw,
            checker,
            _output: PhantomData,
        })
    }
}

impl<T> OutputSchema for TypedSchema<T>
where
    T: DeserializeOwned + schemars::JsonSchema,
{
    type Output = T;

    fn describe(&self) -> Value {
        self.raw.clone()
    }

    fn parse(&self, value: Value) -> Result<T, Vec<ValidationError>> {
        self.checker.check(&value)?;
        serde_json::from_value(value)
            .map_err(|e| vec![ValidationError::without_path(format!("deserialization failed: {}", e))])
    }
}

/// Builder for ad-hoc object schemas.
#[derive(Debug, Clone, Default)]
pub struct SchemaGenerator {
    title: Option<String>,
    description: Option<String>,
    properties: Vec<(String, Value)>,
    required: Vec<String>,
    allow_additional: bool,
}

impl SchemaGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn property(mut self, name: impl Into<String>, schema: Value) -> Self {
        self.properties.push((name.into(), schema));
        self
    }

    /// Add a property and mark it required in one step.
    pub fn required_property(mut self, name: impl Into<String>, schema: Value) -> Self {
        let name = name.into();
        self.required.push(name.clone());
        self.properties.push((name, schema));
        self
    }

    pub fn allow_additional(mut self, allow: bool) -> Self {
        self.allow_additional = allow;
        self
    }

    pub fn build(self) -> Value {
        let mut map = serde_json::Map::new();
        map.insert("type".into(), json!("object"));

        let mut properties = serde_json::Map::new();
        for (name, schema) in self.properties {
            properties.insert(name, schema);
        }
        map.insert("properties".into(), properties.into());

        if !self.required.is_empty() {
            map.insert("required".into(), self.required.into());
        }
        if !self.allow_additional {
            map.insert("additionalProperties".into(), json!(false));
        }
        if let Some(title) = self.title {
            map.insert("title".into(), title.into());
        }
        if let Some(description) = self.description {
            map.insert("description".into(), description.into());
        }

        map.into()
    }

    /// Build and compile into a ready-to-use [`ValueSchema`].
    pub fn compile(self) -> crate::Result<ValueSchema> {
        ValueSchema::new(self.build())
    }
}
