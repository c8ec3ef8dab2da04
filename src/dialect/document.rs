//! In-memory control documents.
//!
//! ```text
//! ControlDocument
//! └── controls: IndexMap<Name, ControlNode>   (preserves insertion order)
//!     ControlNode
//!     ├── control: TypeTag                   (`Control: Classic/Button@2.2.0`)
//!     ├── extras: Properties                 (other node keys, e.g. `Variant`)
//!     ├── properties: Properties             (`Properties:` block)
//!     └── children: ControlDocument          (`Children:` sequence)
//! ```

use crate::base::{Properties, PropertyValue, TypeTag};
use indexmap::IndexMap;

/// Ordered mapping from control name to control definition.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ControlDocument {
    controls: IndexMap<String, ControlNode>,
}

impl ControlDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// A document holding exactly one control.
    pub fn single(name: impl Into<String>, node: ControlNode) -> Self {
        let mut doc = Self::new();
        doc.insert(name, node);
        doc
    }

    /// Add a control, returning the definition it replaced.
    pub fn insert(&mut self, name: impl Into<String>, node: ControlNode) -> Option<ControlNode> {
        self.controls.insert(name.into(), node)
    }

    pub fn get(&self, name: &str) -> Option<&ControlNode> {
        self.controls.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.controls.contains_key(name)
    }

    /// The first control in document order.
    pub fn first(&self) -> Option<(&str, &ControlNode)> {
        self.controls.first().map(|(k, v)| (k.as_str(), v))
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ControlNode)> {
        self.controls.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.controls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.controls.is_empty()
    }
}

/// A single control definition.
#[derive(Clone, Debug, PartialEq)]
pub struct ControlNode {
    pub control: TypeTag,
    pub properties: Properties,
    /// Node-level keys other than `Control`, `Properties` and `Children`.
    pub extras: Properties,
    pub children: ControlDocument,
}

impl ControlNode {
    pub fn new(control: impl Into<TypeTag>) -> Self {
        Self {
            control: control.into(),
            properties: Properties::new(),
            extras: Properties::new(),
            children: ControlDocument::new(),
        }
    }

    /// Builder-style property setter.
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.properties.insert(key.into(), value.into());
        self
    }

    /// Builder-style node-level key setter.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<PropertyValue>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Builder-style child setter.
    pub fn with_child(mut self, name: impl Into<String>, child: ControlNode) -> Self {
        self.children.insert(name, child);
        self
    }

    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}

impl From<TypeTag> for ControlNode {
    fn from(control: TypeTag) -> Self {
        Self::new(control)
    }
}
