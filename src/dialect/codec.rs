//! Dialect parse/render.
//!
//! ```text
//! parse:  text ─ escape ─▶ structural parse ─▶ normalize ─▶ ControlDocument
//! render: ControlDocument ─▶ tree (marked) ─▶ structural render ─ unescape ─▶ text
//! ```

use super::escape::{self, FORMULA_MARK, KEYWORD_MARK, KEYWORDS, LITERAL_MARK};
use super::structural::{StructuralCodec, Yaml};
use super::{ControlDocument, ControlNode, DialectError};
use crate::base::{Properties, PropertyValue, TypeTag};
use regex::Regex;
use serde_yaml::{Mapping, Value};
use std::sync::LazyLock;

const CONTROL_KEY: &str = "Control";
const PROPERTIES_KEY: &str = "Properties";
const CHILDREN_KEY: &str = "Children";

/// A control tag that kept its protective quotes: `"Button@2.2.0"`.
static QUOTED_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^["']([^@"']+)@([\d.]+)["']$"#).expect("quoted tag pattern is valid"));

/// Dialect reader/writer over a structural codec.
#[derive(Debug, Clone, Copy, Default)]
pub struct DialectCodec<C = Yaml> {
    codec: C,
}

impl<C: StructuralCodec> DialectCodec<C> {
    pub fn new(codec: C) -> Self {
        Self { codec }
    }

    /// Parse dialect text into a control document.
    pub fn parse(&self, text: &str) -> Result<ControlDocument, DialectError> {
        let escaped = escape::escape(text);
        let tree = self.codec.parse_tree(&escaped)?;
        document_from_tree(tree)
    }

    /// Render a control document as dialect text.
    pub fn render(&self, document: &ControlDocument) -> Result<String, DialectError> {
        let tree = document_to_tree(document);
        let text = self.codec.render_tree(&tree)?;
        Ok(escape::unescape(&text))
    }
}

/// Parse dialect text with the YAML codec.
pub fn parse_dialect(text: &str) -> Result<ControlDocument, DialectError> {
    DialectCodec::<Yaml>::default().parse(text)
}

/// Render a document as dialect text with the YAML codec.
pub fn render_dialect(document: &ControlDocument) -> Result<String, DialectError> {
    DialectCodec::<Yaml>::default().render(document)
}

/// Render a single control from its parts.
pub fn format_control(
    name: &str,
    control: TypeTag,
    properties: Properties,
) -> Result<String, DialectError> {
    let node = ControlNode {
        properties,
        ..ControlNode::new(control)
    };
    render_dialect(&ControlDocument::single(name, node))
}

// ============================================================================
// TREE → DOCUMENT
// ============================================================================

fn document_from_tree(tree: Value) -> Result<ControlDocument, DialectError> {
    let mut document = ControlDocument::new();
    match tree {
        Value::Sequence(items) => {
            for item in items {
                match item {
                    Value::Mapping(map) => read_controls(map, &mut document)?,
                    other => {
                        return Err(DialectError::structure(format!(
                            "expected `- Name:` control entries, found {}",
                            describe(&other)
                        )));
                    }
                }
            }
        }
        Value::Mapping(map) => read_controls(map, &mut document)?,
        Value::Null => return Err(DialectError::structure("document is empty")),
        other => {
            return Err(DialectError::structure(format!(
                "expected a control mapping or sequence, found {}",
                describe(&other)
            )));
        }
    }
    Ok(document)
}

fn read_controls(map: Mapping, document: &mut ControlDocument) -> Result<(), DialectError> {
    for (key, value) in map {
        let name = key_string(&key)?;
        if document.contains(&name) {
            return Err(DialectError::structure(format!(
                "duplicate control name `{name}`"
            )));
        }
        let node = node_from_value(&name, value)?;
        document.insert(name, node);
    }
    Ok(())
}

fn node_from_value(name: &str, value: Value) -> Result<ControlNode, DialectError> {
    let Value::Mapping(map) = value else {
        return Err(DialectError::structure(format!(
            "control `{name}` must be a mapping"
        )));
    };

    let mut control = None;
    let mut properties = Properties::new();
    let mut extras = Properties::new();
    let mut children = ControlDocument::new();

    for (key, value) in map {
        let key = key_string(&key)?;
        match key.as_str() {
            CONTROL_KEY => match value {
                Value::String(s) => control = Some(TypeTag::parse(&unwrap_tag(&s))),
                other => {
                    return Err(DialectError::structure(format!(
                        "`Control` of `{name}` must be a type name, found {}",
                        describe(&other)
                    )));
                }
            },
            PROPERTIES_KEY => match value {
                Value::Mapping(props) => properties = properties_from_mapping(props, name)?,
                Value::Null => {}
                other => {
                    return Err(DialectError::structure(format!(
                        "`Properties` of `{name}` must be a mapping, found {}",
                        describe(&other)
                    )));
                }
            },
            CHILDREN_KEY => match value {
                Value::Null => {}
                tree @ Value::Sequence(_) => children = document_from_tree(tree)?,
                other => {
                    return Err(DialectError::structure(format!(
                        "`Children` of `{name}` must be a sequence, found {}",
                        describe(&other)
                    )));
                }
            },
            _ => {
                let value = classify(value, &key)?;
                extras.insert(key, value);
            }
        }
    }

    let control = control.ok_or_else(|| {
        DialectError::structure(format!("control `{name}` has no `Control` type"))
    })?;

    Ok(ControlNode {
        control,
        properties,
        extras,
        children,
    })
}

fn properties_from_mapping(map: Mapping, owner: &str) -> Result<Properties, DialectError> {
    let mut properties = Properties::new();
    for (key, value) in map {
        let key = key_string(&key)?;
        let path = format!("{owner}.{key}");
        let value = classify(value, &path)?;
        properties.insert(key, value);
    }
    Ok(properties)
}

/// Restore markers and classify a parsed leaf or nested mapping.
fn classify(value: Value, path: &str) -> Result<PropertyValue, DialectError> {
    match value {
        Value::Null => Ok(PropertyValue::Null),
        Value::Bool(b) => Ok(PropertyValue::Boolean(b)),
        Value::Number(n) => Ok(PropertyValue::Number(n)),
        Value::String(s) => Ok(classify_string(s)),
        Value::Mapping(map) => properties_from_mapping(map, path).map(PropertyValue::Object),
        Value::Sequence(_) => Err(DialectError::structure(format!(
            "`{path}` holds a sequence, which control properties do not support"
        ))),
        Value::Tagged(tagged) => Err(DialectError::structure(format!(
            "`{path}` uses tag `{}`, which control properties do not support",
            tagged.tag
        ))),
    }
}

fn classify_string(s: String) -> PropertyValue {
    if let Some(expr) = s.strip_prefix(FORMULA_MARK) {
        return PropertyValue::Formula(expr.to_string());
    }
    if let Some(word) = s.strip_prefix(KEYWORD_MARK) {
        if word.eq_ignore_ascii_case("true") {
            return PropertyValue::Boolean(true);
        }
        if word.eq_ignore_ascii_case("false") {
            return PropertyValue::Boolean(false);
        }
        return PropertyValue::String(word.to_string());
    }
    if let Some(literal) = s.strip_prefix(LITERAL_MARK) {
        return PropertyValue::String(literal.to_string());
    }
    PropertyValue::String(s)
}

fn unwrap_tag(tag: &str) -> String {
    match QUOTED_TAG.captures(tag) {
        Some(caps) => format!("{}@{}", &caps[1], &caps[2]),
        None => tag.to_string(),
    }
}

fn key_string(key: &Value) -> Result<String, DialectError> {
    match key {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(DialectError::structure(format!(
            "keys must be names, found {}",
            describe(other)
        ))),
    }
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

// ============================================================================
// DOCUMENT → TREE
// ============================================================================

fn document_to_tree(document: &ControlDocument) -> Value {
    let items = document
        .iter()
        .map(|(name, node)| {
            let mut entry = Mapping::new();
            entry.insert(Value::String(name.to_string()), node_to_tree(node));
            Value::Mapping(entry)
        })
        .collect();
    Value::Sequence(items)
}

fn node_to_tree(node: &ControlNode) -> Value {
    let mut map = Mapping::new();
    map.insert(
        Value::String(CONTROL_KEY.to_string()),
        Value::String(node.control.to_string()),
    );
    for (key, value) in &node.extras {
        map.insert(Value::String(key.clone()), value_to_tree(value));
    }
    map.insert(
        Value::String(PROPERTIES_KEY.to_string()),
        Value::Mapping(properties_to_mapping(&node.properties)),
    );
    if !node.children.is_empty() {
        map.insert(
            Value::String(CHILDREN_KEY.to_string()),
            document_to_tree(&node.children),
        );
    }
    Value::Mapping(map)
}

fn properties_to_mapping(properties: &Properties) -> Mapping {
    properties
        .iter()
        .map(|(key, value)| (Value::String(key.clone()), value_to_tree(value)))
        .collect()
}

fn value_to_tree(value: &PropertyValue) -> Value {
    match value {
        PropertyValue::Formula(expr) => Value::String(marked(FORMULA_MARK, expr)),
        PropertyValue::Boolean(b) => Value::Bool(*b),
        PropertyValue::Number(n) => Value::Number(n.clone()),
        PropertyValue::String(s) if needs_literal_guard(s) => Value::String(marked(LITERAL_MARK, s)),
        PropertyValue::String(s) => Value::String(s.clone()),
        PropertyValue::Object(map) => Value::Mapping(properties_to_mapping(map)),
        PropertyValue::Null => Value::Null,
    }
}

/// Strings that would not read back as the same string literal if the
/// serializer emitted them plain.
fn needs_literal_guard(s: &str) -> bool {
    let trimmed = s.trim();
    trimmed.starts_with('=')
        || s.starts_with([FORMULA_MARK, LITERAL_MARK, KEYWORD_MARK])
        || KEYWORDS.iter().any(|k| trimmed.eq_ignore_ascii_case(k))
        || !matches!(serde_yaml::from_str::<Value>(s), Ok(Value::String(ref parsed)) if parsed == s)
}

fn marked(mark: char, s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 1);
    out.push(mark);
    out.push_str(s);
    out
}
