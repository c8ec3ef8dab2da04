//! Error types for mapping configuration.

use thiserror::Error;

/// Errors raised while importing or exporting mapping tables.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingError {
    /// A replacement configuration failed the shape check.
    #[error("Invalid mapping configuration: {0}")]
    InvalidConfiguration(String),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(String),
}

impl MappingError {
    /// Create an invalid-configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidConfiguration(message.into())
    }

    /// Create a JSON error.
    pub fn json(message: impl Into<String>) -> Self {
        Self::Json(message.into())
    }
}
