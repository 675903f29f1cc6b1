//! Error types for genq

use crate::value::ValueKind;
use thiserror::Error;

/// Result type alias for genq operations
pub type GenqResult<T> = Result<T, GenqError>;

/// Error types for fragment synthesis
#[derive(Debug, Error)]
pub enum GenqError {
    /// Invalid input (empty or malformed identifiers, empty projections, ...)
    #[error("Validation error: {0}")]
    Validation(String),

    /// A value marked as DATE could not be parsed with the configured format
    #[error("Date parse error on '{key}': cannot parse {input:?} with format {format:?}: {source}")]
    DateParse {
        key: String,
        input: String,
        format: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A value marked as DATE is neither text nor a date
    #[error("Coercion error on '{key}': cannot convert {kind:?} value to DATE")]
    Coercion { key: String, kind: ValueKind },

    /// JSON input could not be converted into values
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GenqError {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    /// Check if this error came from a failed value coercion
    pub fn is_coercion(&self) -> bool {
        matches!(self, Self::DateParse { .. } | Self::Coercion { .. })
    }

    /// The value key this error refers to, if any.
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::DateParse { key, .. } | Self::Coercion { key, .. } => Some(key),
            _ => None,
        }
    }
}
