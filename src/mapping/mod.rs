//! Mapping tables and the mappers that consult them.
//!
//! - [`MappingConfig`] - Every table, held by value (no process-wide state)
//! - [`TypeMapper`] - Classic type token → modern type token
//! - [`PropertyMapper`] - Classic properties → modern properties plus defaults
//!
//! ```text
//! MappingConfig
//! ├── control_types: TypeMappingTable         "Classic/Button@2.2.0" → "Button@0.0.45"
//! ├── common_properties: PropertyMap          "HintText" → "Placeholder", "HoverFill" → ∅
//! ├── type_properties: PropertyMappingTable   "Button" → { "Fill" → "BasePaletteColor" }
//! └── default_properties: DefaultPropertyTable "Button" → { Appearance: =... }
//! ```

mod builtin;
mod config;
mod error;
mod properties;
mod types;

pub use config::{
    DefaultPropertyTable, MappingConfig, PropertyMap, PropertyMappingTable, TypeMappingTable,
};
pub use error::MappingError;
pub use properties::PropertyMapper;
pub use types::{MatchKind, TypeMapper, TypeResolution};
