//! Classic → modern conversion.
//!
//! - [`ConversionEngine`] - Parse, map, apply rules, render
//! - [`ControlCategory`], [`StructuralRule`] - Post-mapping rewrites
//! - [`names`] - Control name synthesis for callers without a name

mod engine;
mod error;
pub mod names;
mod rules;

pub use engine::{ConversionEngine, ConversionOutcome};
pub use error::ConversionError;
pub use rules::{ControlCategory, StructuralRule, apply_rules};
