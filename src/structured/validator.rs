//! JSON Schema checking backed by the `jsonschema` crate.

use crate::structured::error::ValidationError;
use jsonschema::{Draft, JSONSchema};
use serde_json::Value;

/// A compiled JSON Schema ready to check instances against.
///
/// Compilation happens once per schema; checking is allocation-light and
/// reports every violation with its JSON-pointer location.
#[derive(Debug)]
pub struct SchemaChecker {
    compiled: JSONSchema,
}

impl SchemaChecker {
    /// Compile `schema` under Draft 7. An invalid schema is a caller bug and
    /// surfaces as a configuration error.
    pub fn new(schema: &Value) -> crate::Result<Self> {
        let compiled = JSONSchema::options()
            .with_draft(Draft::Draft7)
            .compile(schema)
            .map_err(|e| {
                crate::Error::configuration(format!("schema does not compile: {}", e))
            })?;
        Ok(Self { compiled })
    }

    /// Validate `instance`, collecting every violation.
    pub fn check(&self, instance: &Value) -> Result<(), Vec<ValidationError>> {
        if let Err(errors) = self.compiled.validate(instance) {
            let violations: Vec<ValidationError> = errors
                .map(|e| {
                    let path = e.instance_path.to_string();
                    if path.is_empty() {
                        ValidationError::without_path(e.to_string())
                    } else {
                        ValidationError::with_path(e.to_string(), path)
                    }
                })
                .collect();
            return Err(violations);
        }
        Ok(())
    }

    pub fn is_valid(&self, instance: &Value) -> bool {
        self.compiled.is_valid(instance)
    }
}
