use thiserror::Error;

use crate::slip::SlipError;

/// Errors that can occur while building, validating or rendering a document.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FakturaError {
    /// One or more validation rules failed.
    #[error("validation failed: {0}")]
    Validation(String),

    /// Builder encountered invalid or missing configuration.
    #[error("builder error: {0}")]
    Builder(String),

    /// Theme or render settings could not be interpreted.
    #[error("theme error: {0}")]
    Theme(String),

    /// An image or font asset could not be loaded or decoded.
    #[error("asset error: {0}")]
    Asset(String),

    /// The payment slip could not be produced.
    #[error(transparent)]
    Slip(#[from] SlipError),

    /// PDF serialization failed.
    #[error("PDF error: {0}")]
    Pdf(String),
}

/// A single validation error with field path and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Dot-separated path to the invalid field (e.g. "lines[2].discount.value").
    pub field: String,
    /// Human-readable error description.
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Prefix the field path, e.g. `value` → `global_discount.value`.
    pub fn nested(self, prefix: &str) -> Self {
        Self {
            field: format!("{prefix}.{}", self.field),
            message: self.message,
        }
    }
}

/// Join a list of findings into the message of a [`FakturaError::Validation`].
pub(crate) fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}
