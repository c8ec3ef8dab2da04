//! Error types for conversion.

use crate::dialect::DialectError;
use thiserror::Error;

/// Errors that end a conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// The input could not be parsed or the output could not be rendered.
    #[error(transparent)]
    Dialect(#[from] DialectError),

    /// No control declaration was found in the input.
    #[error("Unsupported input: {0}")]
    UnsupportedInput(String),

    /// The control type has no entry in the type mapping table.
    #[error("Unsupported control type: {control_type}")]
    UnsupportedControlType { control_type: String },
}

impl ConversionError {
    /// Create an unsupported-input error.
    pub fn unsupported_input(message: impl Into<String>) -> Self {
        Self::UnsupportedInput(message.into())
    }

    /// Create an unsupported-control-type error.
    pub fn unsupported_control_type(control_type: impl Into<String>) -> Self {
        Self::UnsupportedControlType {
            control_type: control_type.into(),
        }
    }
}
