//! # pacontrol-base
//!
//! Core library for converting classic Power Apps control definitions into
//! their modern counterparts.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! convert   → ConversionEngine, structural rules, name helper
//!   ↓
//! mapping   → MappingConfig (tables, JSON import/export), TypeMapper, PropertyMapper
//!   ↓
//! dialect   → Formula escaping, structural codec, parse/render, scans, samples
//!   ↓
//! base      → Primitives (TypeTag, PropertyValue, ConversionLog)
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use pacontrol::ConversionEngine;
//!
//! let engine = ConversionEngine::new();
//! let modern = engine.convert(classic_text)?;
//! for entry in engine.conversion_log() {
//!     println!("{entry}");
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → dialect → mapping → convert)
// ============================================================================

/// Foundation types: TypeTag, PropertyValue, ConversionLog
pub mod base;

/// Dialect: formula escaping, YAML codec, control documents
pub mod dialect;

/// Mapping tables and mappers
pub mod mapping;

/// Conversion engine and structural rules
pub mod convert;

// Re-export foundation types
pub use base::{ConversionLog, LogEntry, Properties, PropertyValue, TypeTag};

// Re-export the entry points
pub use convert::{ConversionEngine, ConversionError, ConversionOutcome};
pub use dialect::{ControlDocument, ControlInfo, ControlNode, DialectError};
pub use mapping::{MappingConfig, MappingError};
