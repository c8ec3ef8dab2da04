//! Structural parse/serialize boundary.
//!
//! The dialect layer never reads or writes block-structured text itself; it
//! goes through a [`StructuralCodec`]. The only implementation is [`Yaml`],
//! backed by `serde_yaml`, whose emitter already matches the output options
//! the dialect needs: two-space indent, no line folding, no anchors, and
//! mapping order preserved as inserted.

use super::DialectError;
use serde_yaml::Value;

/// Generic block-structured text parser/serializer.
pub trait StructuralCodec: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// Parse text into a tree of mappings, sequences and scalars.
    fn parse_tree(&self, text: &str) -> Result<Value, DialectError>;

    /// Serialize a tree back into text.
    fn render_tree(&self, tree: &Value) -> Result<String, DialectError>;
}

/// YAML structural codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl StructuralCodec for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn parse_tree(&self, text: &str) -> Result<Value, DialectError> {
        serde_yaml::from_str(text).map_err(|e| DialectError::syntax(e.to_string()))
    }

    fn render_tree(&self, tree: &Value) -> Result<String, DialectError> {
        serde_yaml::to_string(tree).map_err(|e| DialectError::render(e.to_string()))
    }
}
