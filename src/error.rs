use crate::structured::ValidationError;
use thiserror::Error;

/// Unified error type for the crate.
///
/// Every failure mode of a query surfaces here as a typed, recoverable value.
/// Malformed model output is an error the caller can inspect (and e.g. retry
/// with a repair prompt), not a reason to abort the process.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Network transport error: {0}")]
    Transport(#[from] crate::transport::TransportError),

    #[error("Provider error: {payload}")]
    Provider { payload: String },

    #[error("Response envelope mismatch: {message}")]
    Envelope { message: String },

    #[error("Model output rejected: {}\n--- content ---\n{content}", format_violations(.errors))]
    OutputRejected {
        /// The offending content, pretty-printed when it parses as JSON.
        content: String,
        errors: Vec<ValidationError>,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_violations(errors: &[ValidationError]) -> String {
    if errors.is_empty() {
        "no diagnostic recorded".to_string()
    } else {
        errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Error {
    pub fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration {
            message: message.into(),
        }
    }

    pub fn envelope(message: impl Into<String>) -> Self {
        Error::Envelope {
            message: message.into(),
        }
    }
}
