use crate::helpers::document_helpers::{keys, parse_single};
use crate::helpers::source_fixtures::*;
use pacontrol::PropertyValue;
use pacontrol::dialect::{parse_dialect, render_dialect};
use walkdir::WalkDir;

fn assert_idempotent(source: &str) {
    let first = parse_dialect(source).expect("source should parse");
    let rendered = render_dialect(&first).expect("document should render");
    let second = parse_dialect(&rendered).expect("rendered text should parse");
    assert_eq!(second, first, "rendered:\n{rendered}");
}

#[test]
fn test_fixture_files_roundtrip() {
    let mut seen = 0;
    for entry in WalkDir::new(classic_fixture_dir())
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "yaml"))
    {
        let source = std::fs::read_to_string(entry.path()).unwrap();
        assert_idempotent(&source);
        seen += 1;
    }
    assert!(seen >= 4, "expected classic fixtures, found {seen}");
}

#[test]
fn test_inline_sources_roundtrip() {
    for source in [
        CLASSIC_BUTTON,
        CLASSIC_BUTTON_ALL_CORNERS,
        CLASSIC_BUTTON_CUSTOM_TYPE,
        CLASSIC_TEXT_INPUT,
        UNKNOWN_CONTROL,
        GALLERY_WITH_CHILD,
    ] {
        assert_idempotent(source);
    }
}

#[test]
fn test_render_keeps_property_order() {
    let source = "- L:\n    Control: Label\n    Properties:\n      Zeta: 1\n      Alpha: =2\n      Mid: x\n";
    let doc = parse_dialect(source).unwrap();
    let rendered = render_dialect(&doc).unwrap();
    assert_eq!(rendered, source);
    let (_, node) = parse_single(&rendered);
    assert_eq!(keys(&node.properties), vec!["Zeta", "Alpha", "Mid"]);
}

#[test]
fn test_values_keep_their_category() {
    let source = std::fs::read_to_string(classic_fixture_dir().join("label.yaml")).unwrap();
    let (name, node) = parse_single(&source);
    assert_eq!(name, "Label1");
    assert_eq!(node.property("Text"), Some(&PropertyValue::from("=not a formula")));
    assert_eq!(node.property("Tooltip"), Some(&PropertyValue::from("yes")));
    assert_eq!(node.property("Align"), Some(&PropertyValue::formula("Align.Center")));
    assert_eq!(node.property("Wrap"), Some(&PropertyValue::from("no")));
}

#[test]
fn test_block_formula_fixture() {
    let source = std::fs::read_to_string(classic_fixture_dir().join("text_input.yaml")).unwrap();
    let (_, node) = parse_single(&source);
    assert_eq!(
        node.property("OnChange"),
        Some(&PropertyValue::formula("Set(varQuery, Self.Text);\nRefresh(Orders)"))
    );
    assert_eq!(node.property("Visible"), Some(&PropertyValue::Boolean(true)));
    assert_eq!(node.property("MaxLength"), Some(&PropertyValue::from(120)));

    let rendered = render_dialect(&parse_dialect(&source).unwrap()).unwrap();
    assert!(rendered.contains("      OnChange: |-\n        =Set(varQuery, Self.Text);\n        Refresh(Orders)\n"));
}
