//! Fast text scans that do not run the structural parser.

use super::escape;
use super::structural::{StructuralCodec, Yaml};
use crate::base::{Properties, PropertyValue, TypeTag};
use regex::Regex;
use std::sync::LazyLock;

/// A line starting `- Name:` followed by `Control: Type[@version]`.
static CONTROL_DECLARATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*-[ \t]+([^:\r\n]+):[ \t]*\r?\n[ \t]*Control:[ \t]*["']?([^@\s"']+)(?:@([\d.]+))?"#)
        .expect("control declaration pattern is valid")
});

/// Name and type of the first control declared in a document.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ControlInfo {
    pub name: String,
    /// Type without version (`Classic/Button`).
    pub control_type: String,
    pub version: Option<String>,
    /// Type as written (`Classic/Button@2.2.0`).
    pub full_type: String,
}

impl ControlInfo {
    pub fn type_tag(&self) -> TypeTag {
        TypeTag::parse(&self.full_type)
    }
}

/// Locate the first control declaration. `None` if the text declares none.
pub fn extract_control_info(text: &str) -> Option<ControlInfo> {
    let caps = CONTROL_DECLARATION.captures(text)?;
    let name = caps[1].trim().to_string();
    let control_type = caps[2].to_string();
    let version = caps.get(3).map(|m| m.as_str().to_string());
    let full_type = match &version {
        Some(v) => format!("{control_type}@{v}"),
        None => control_type.clone(),
    };
    Some(ControlInfo {
        name,
        control_type,
        version,
        full_type,
    })
}

/// `true` if the text looks like a control document or parses structurally.
pub fn validate(text: &str) -> bool {
    if text.contains("Control:") && text.contains("Properties:") {
        return true;
    }
    match Yaml.parse_tree(&escape::escape(text)) {
        Ok(_) => true,
        Err(e) => {
            tracing::debug!("dialect validation failed: {e}");
            false
        }
    }
}

/// Scrape the first-level entries of the first `Properties:` block.
///
/// Line-based: nested objects and multi-line values are skipped.
pub fn extract_properties(text: &str) -> Option<Properties> {
    let mut lines = text.lines();
    let header_indent = lines.by_ref().find_map(|line| {
        (line.trim() == "Properties:").then(|| indent_of(line))
    })?;

    let mut properties = Properties::new();
    let mut entry_indent = None;
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let indent = indent_of(line);
        if indent <= header_indent {
            break;
        }
        if *entry_indent.get_or_insert(indent) != indent {
            continue;
        }
        let Some((key, value)) = line.trim().split_once(':') else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }
        properties.insert(key.trim().to_string(), scalar_value(value));
    }
    Some(properties)
}

fn scalar_value(value: &str) -> PropertyValue {
    if let Some(expr) = value.strip_prefix('=') {
        return PropertyValue::formula(expr);
    }
    match value {
        "true" => return PropertyValue::Boolean(true),
        "false" => return PropertyValue::Boolean(false),
        _ => {}
    }
    if let Ok(i) = value.parse::<i64>() {
        return PropertyValue::from(i);
    }
    if let Ok(f) = value.parse::<f64>() {
        if f.is_finite() {
            return PropertyValue::from(f);
        }
    }
    let unquoted = value
        .strip_prefix('"')
        .and_then(|v| v.strip_suffix('"'))
        .unwrap_or(value);
    PropertyValue::from(unquoted)
}

fn indent_of(line: &str) -> usize {
    line.len() - line.trim_start().len()
}
