//! Foundation types for the converter.
//!
//! This module provides the vocabulary shared by every other layer:
//! - [`TypeTag`] - Control type identifiers, bare (`Button`) or versioned (`Button@2.2.0`)
//! - [`PropertyValue`] - Classified property values (formula, literal, nested object)
//! - [`Properties`] - Insertion-ordered property maps
//! - [`ConversionLog`], [`LogEntry`] - Per-call audit trail
//!
//! This module has NO dependencies on other pacontrol modules.

mod log;
mod type_tag;
mod value;

pub use log::{ConversionLog, LogEntry};
pub use type_tag::TypeTag;
pub use value::{Properties, PropertyValue};
