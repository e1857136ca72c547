//! Validation error type for structured output.

use std::fmt;

/// A single schema violation with the JSON-pointer location it occurred at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub message: String,
    /// JSON pointer into the instance (e.g. `/user/name`, `/items/0`).
    /// `None` when the violation concerns the value as a whole.
    pub path: Option<String>,
}

impl ValidationError {
    pub fn with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    pub fn without_path(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            path: None,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => write!(f, "{}: {}", path, self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_prefixes_the_path_when_present() {
        let err = ValidationError::with_path("is not of type \"integer\"", "/age");
        assert_eq!(err.to_string(), "/age: is not of type \"integer\"");
    }

    #[test]
    fn display_is_bare_without_a_path() {
        let err = ValidationError::without_path("content is not valid JSON");
        assert_eq!(err.to_string(), "content is not valid JSON");
    }
}
