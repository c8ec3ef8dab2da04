//! Error types for dialect parsing and rendering.

use thiserror::Error;

/// Errors that can occur while reading or writing a dialect document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DialectError {
    /// The structural parser rejected the (escaped) text.
    #[error("YAML parsing error: {0}")]
    Syntax(String),

    /// The text parsed, but is not shaped like a control document.
    #[error("Invalid control document: {0}")]
    Structure(String),

    /// The structural serializer failed.
    #[error("YAML rendering error: {0}")]
    Render(String),
}

impl DialectError {
    /// Create a syntax error.
    pub fn syntax(message: impl Into<String>) -> Self {
        Self::Syntax(message.into())
    }

    /// Create a structure error.
    pub fn structure(message: impl Into<String>) -> Self {
        Self::Structure(message.into())
    }

    /// Create a render error.
    pub fn render(message: impl Into<String>) -> Self {
        Self::Render(message.into())
    }
}
