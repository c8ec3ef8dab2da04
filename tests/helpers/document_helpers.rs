//! Helpers for inspecting parsed documents and logs.

use pacontrol::dialect::parse_dialect;
use pacontrol::{ControlNode, LogEntry, Properties};

/// Parse `text` and return its first control.
pub fn parse_single(text: &str) -> (String, ControlNode) {
    let doc = parse_dialect(text).expect("source should parse");
    let (name, node) = doc.first().expect("document should hold a control");
    (name.to_string(), node.clone())
}

/// A one-property document `k: <value>` for a label.
pub fn single_property_doc(value_source: &str) -> String {
    format!("- L:\n    Control: Label\n    Properties:\n      k: {value_source}\n")
}

pub fn keys(props: &Properties) -> Vec<&str> {
    props.keys().map(String::as_str).collect()
}

pub fn messages(entries: &[LogEntry]) -> Vec<&str> {
    entries.iter().map(|e| e.message.as_str()).collect()
}
