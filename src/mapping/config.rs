//! Mapping tables and their JSON form.
//!
//! ```json
//! {
//!   "controlTypes":      { "Classic/Button@2.2.0": "Button@0.0.45", "button": "Button" },
//!   "properties":        { "HintText": "Placeholder", "HoverFill": null },
//!   "typeProperties":    { "Button": { "Fill": "BasePaletteColor" } },
//!   "defaultProperties": { "Button": { "Appearance": "=ButtonAppearance.Primary" } }
//! }
//! ```
//!
//! `controlTypes` and `properties` are required. In `defaultProperties`,
//! strings beginning with `=` are formulas.

use super::MappingError;
use super::builtin;
use crate::base::{Properties, TypeTag};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

const CONTROL_TYPES_SECTION: &str = "controlTypes";
const PROPERTIES_SECTION: &str = "properties";

/// Classic property key to modern key. `None` drops the property.
pub type PropertyMap = IndexMap<String, Option<String>>;

// ============================================================================
// TYPE MAPPING TABLE
// ============================================================================

/// Classic type key to modern type token.
///
/// Versioned keys (`Classic/Button@2.2.0`) match exactly. Bare keys
/// (`button`) match case-insensitively.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeMappingTable {
    entries: IndexMap<String, String>,
}

impl TypeMappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, classic: impl Into<String>, modern: impl Into<String>) -> Option<String> {
        self.entries.insert(classic.into(), modern.into())
    }

    /// Case-sensitive lookup of a full token.
    pub fn get_exact(&self, token: &str) -> Option<&str> {
        self.entries.get(token).map(String::as_str)
    }

    /// Case-insensitive lookup among the unversioned keys.
    pub fn get_bare(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| !key.contains('@') && key.eq_ignore_ascii_case(name))
            .map(|(_, modern)| modern.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TypeMappingTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

// ============================================================================
// PER-MODERN-TYPE TABLES
// ============================================================================

/// Tables keyed by modern type: full token first, then the bare name
/// (case-insensitive).
fn lookup_by_type<'a, V>(
    entries: &'a IndexMap<String, V>,
    modern: &TypeTag,
) -> Option<(&'a str, &'a V)> {
    if let Some((key, value)) = entries.get_key_value(modern.to_string().as_str()) {
        return Some((key.as_str(), value));
    }
    [modern.name(), modern.local_name()].into_iter().find_map(|name| {
        entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(key, value)| (key.as_str(), value))
    })
}

/// Modern type to type-specific property map.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyMappingTable {
    tables: IndexMap<String, PropertyMap>,
}

impl PropertyMappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, modern: impl Into<String>, map: PropertyMap) -> Option<PropertyMap> {
        self.tables.insert(modern.into(), map)
    }

    /// The table for `modern` together with the key it is stored under.
    pub fn lookup(&self, modern: &TypeTag) -> Option<(&str, &PropertyMap)> {
        lookup_by_type(&self.tables, modern)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

/// Modern type to default properties.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DefaultPropertyTable {
    defaults: IndexMap<String, Properties>,
}

impl DefaultPropertyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, modern: impl Into<String>, defaults: Properties) -> Option<Properties> {
        self.defaults.insert(modern.into(), defaults)
    }

    pub fn lookup(&self, modern: &TypeTag) -> Option<(&str, &Properties)> {
        lookup_by_type(&self.defaults, modern)
    }

    pub fn len(&self) -> usize {
        self.defaults.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defaults.is_empty()
    }
}

// ============================================================================
// MAPPING CONFIG
// ============================================================================

/// Every table a conversion consults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MappingConfig {
    pub control_types: TypeMappingTable,
    /// Fallback used when a modern type has no entry in `type_properties`.
    #[serde(rename = "properties")]
    pub common_properties: PropertyMap,
    #[serde(default)]
    pub type_properties: PropertyMappingTable,
    #[serde(default)]
    pub default_properties: DefaultPropertyTable,
}

impl MappingConfig {
    /// The built-in tables.
    pub fn builtin() -> Self {
        builtin::config()
    }

    /// Tables with no entries at all.
    pub fn empty() -> Self {
        Self {
            control_types: TypeMappingTable::new(),
            common_properties: PropertyMap::new(),
            type_properties: PropertyMappingTable::new(),
            default_properties: DefaultPropertyTable::new(),
        }
    }

    /// Property table applied to `modern`: its type table if one matches,
    /// else the common table. The matched type key comes back with it.
    pub fn property_table(&self, modern: &TypeTag) -> (Option<&str>, &PropertyMap) {
        match self.type_properties.lookup(modern) {
            Some((key, table)) => (Some(key), table),
            None => (None, &self.common_properties),
        }
    }

    /// Parse a replacement configuration.
    ///
    /// The document must be an object with `controlTypes` and `properties`
    /// objects; anything else is rejected before deserialization.
    pub fn from_json(json: &str) -> Result<Self, MappingError> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| MappingError::invalid(e.to_string()))?;
        let Some(root) = value.as_object() else {
            return Err(MappingError::invalid("expected a JSON object"));
        };
        for section in [CONTROL_TYPES_SECTION, PROPERTIES_SECTION] {
            match root.get(section) {
                Some(serde_json::Value::Object(_)) => {}
                Some(_) => {
                    return Err(MappingError::invalid(format!(
                        "`{section}` must be an object"
                    )));
                }
                None => {
                    return Err(MappingError::invalid(format!(
                        "missing `{section}` section"
                    )));
                }
            }
        }
        serde_json::from_value(value).map_err(|e| MappingError::invalid(e.to_string()))
    }

    /// Pretty-printed JSON, accepted back by [`MappingConfig::from_json`].
    pub fn to_json(&self) -> Result<String, MappingError> {
        serde_json::to_string_pretty(self).map_err(|e| MappingError::json(e.to_string()))
    }
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self::builtin()
    }
}
