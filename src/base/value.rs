//! Classified property values.

use indexmap::IndexMap;
use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Insertion-ordered property map. Order is significant and preserved
/// through parse, mapping and render.
pub type Properties = IndexMap<String, PropertyValue>;

/// A property value, classified by its source form.
///
/// A value is a [`PropertyValue::Formula`] iff its source text begins with
/// `=`; the stored expression excludes that leading `=`.
#[derive(Clone, Debug, PartialEq)]
pub enum PropertyValue {
    /// Formula expression, text after the leading `=`.
    Formula(String),
    /// Boolean literal.
    Boolean(bool),
    /// Numeric literal, integer or real.
    Number(serde_yaml::Number),
    /// String literal.
    String(String),
    /// Nested mapping of values.
    Object(Properties),
    /// Key present without a value.
    Null,
}

impl PropertyValue {
    /// Create a formula value from its expression (without the `=`).
    pub fn formula(expr: impl Into<String>) -> Self {
        Self::Formula(expr.into())
    }

    /// Classify a free-standing string the way a dialect document would:
    /// text beginning with `=` (after trimming) is a formula.
    pub fn from_source_text(text: &str) -> Self {
        match text.trim_start().strip_prefix('=') {
            Some(expr) => Self::Formula(expr.to_string()),
            None => Self::String(text.to_string()),
        }
    }

    pub fn is_formula(&self) -> bool {
        matches!(self, Self::Formula(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_object(&self) -> Option<&Properties> {
        match self {
            Self::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Short category name used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Formula(_) => "formula",
            Self::Boolean(_) => "boolean",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Object(_) => "object",
            Self::Null => "null",
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Formula(expr) => write!(f, "={expr}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
            Self::Object(map) => {
                write!(f, "{{")?;
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                write!(f, "}}")
            }
            Self::Null => write!(f, "null"),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for PropertyValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for PropertyValue {
    fn from(v: i64) -> Self {
        Self::Number(v.into())
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        Self::Number(i64::from(v).into())
    }
}

impl From<f64> for PropertyValue {
    fn from(v: f64) -> Self {
        Self::Number(v.into())
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        Self::Boolean(v)
    }
}

impl From<Properties> for PropertyValue {
    fn from(map: Properties) -> Self {
        Self::Object(map)
    }
}

// ============================================================================
// SERDE (mapping configuration files)
// ============================================================================
//
// In configuration JSON, formulas are strings beginning with `=`.

impl Serialize for PropertyValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Formula(expr) => serializer.serialize_str(&format!("={expr}")),
            Self::Boolean(b) => serializer.serialize_bool(*b),
            Self::Number(n) => n.serialize(serializer),
            Self::String(s) => serializer.serialize_str(s),
            Self::Object(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
            Self::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for PropertyValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PropertyValueVisitor)
    }
}

struct PropertyValueVisitor;

impl<'de> Visitor<'de> for PropertyValueVisitor {
    type Value = PropertyValue;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a formula string, literal or nested object")
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
        Ok(PropertyValue::Boolean(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PropertyValue::Number(v.into()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PropertyValue::Number(v.into()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(PropertyValue::Number(v.into()))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(PropertyValue::from_source_text(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PropertyValue::Null)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(PropertyValue::Null)
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = Properties::new();
        while let Some((key, value)) = access.next_entry::<String, PropertyValue>()? {
            map.insert(key, value);
        }
        Ok(PropertyValue::Object(map))
    }
}
