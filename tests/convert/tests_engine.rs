use crate::helpers::document_helpers::{keys, parse_single};
use crate::helpers::source_fixtures::*;
use pacontrol::mapping::{MappingConfig, TypeMapper, TypeMappingTable};
use pacontrol::{ConversionEngine, ConversionError, ConversionLog, Properties, PropertyValue};

#[test]
fn test_end_to_end_button() {
    let engine = ConversionEngine::new();
    let output = engine.convert(CLASSIC_BUTTON).unwrap();
    let (name, node) = parse_single(&output);

    assert_eq!(name, "Button1");
    assert_eq!(node.control.to_string(), "Button@0.0.45");
    assert_eq!(node.property("Text"), Some(&PropertyValue::from("Submit")));
    let radius = node.property("BorderRadius").and_then(PropertyValue::as_object).unwrap();
    assert_eq!(radius["TopLeft"], PropertyValue::from(5));
    assert!(output.contains("    Control: Button@0.0.45\n"));
}

#[test]
fn test_versioned_key_beats_bare_key() {
    let table: TypeMappingTable = [("Button", "LegacyButton"), ("Button@2.2.0", "Button@0.0.45")]
        .into_iter()
        .collect();
    let mut log = ConversionLog::new();
    let resolution = TypeMapper::new(&table).resolve("Button@2.2.0", &mut log).unwrap();
    assert_eq!(resolution.modern.to_string(), "Button@0.0.45");
}

#[test]
fn test_unknown_type_is_rejected_and_logged() {
    let outcome = ConversionEngine::new().convert_with_log(UNKNOWN_CONTROL);
    assert_eq!(
        outcome.result,
        Err(ConversionError::UnsupportedControlType {
            control_type: "Contoso/Widget@1.0.0".to_string()
        })
    );
    assert!(outcome.log.contains("Contoso/Widget@1.0.0"));
    assert!(outcome.log.contains("Unsupported control type: Contoso/Widget@1.0.0"));
}

#[test]
fn test_unsupported_input() {
    let engine = ConversionEngine::new();
    assert!(matches!(
        engine.convert(NOT_A_CONTROL),
        Err(ConversionError::UnsupportedInput(_))
    ));
}

#[test]
fn test_parse_failure_is_a_dialect_error() {
    let source = "- Button1:\n    Control: Classic/Button@2.2.0\n    Properties:\n      Text: \"open\n";
    let engine = ConversionEngine::new();
    assert!(matches!(engine.convert(source), Err(ConversionError::Dialect(_))));
    let log = engine.conversion_log();
    assert!(log.iter().any(|e| e.message.starts_with("Error: YAML parsing error")));
}

#[test]
fn test_dropped_property_never_reaches_output() {
    let engine = ConversionEngine::new();
    let outcome = engine.convert_with_log(CLASSIC_TEXT_INPUT);
    let (_, node) = parse_single(&outcome.result.unwrap());
    assert!(node.property("HoverFill").is_none());
    assert!(outcome.log.contains("Property dropped (no modern equivalent): HoverFill"));
}

#[test]
fn test_corner_radius_consolidation() {
    let output = ConversionEngine::new().convert(CLASSIC_BUTTON_ALL_CORNERS).unwrap();
    let (_, node) = parse_single(&output);

    let mut expected = Properties::new();
    for corner in ["TopLeft", "TopRight", "BottomLeft", "BottomRight"] {
        expected.insert(corner.to_string(), PropertyValue::from(5));
    }
    assert_eq!(node.property("BorderRadius"), Some(&PropertyValue::Object(expected)));
    for key in ["RadiusTopLeft", "RadiusTopRight", "RadiusBottomLeft", "RadiusBottomRight"] {
        assert!(node.property(key).is_none(), "{key} should be folded");
    }
    assert_eq!(keys(&node.properties), vec!["Text", "BorderRadius", "Appearance", "ButtonType"]);
}

#[test]
fn test_defaults_do_not_overwrite_input() {
    let output = ConversionEngine::new().convert(CLASSIC_BUTTON_CUSTOM_TYPE).unwrap();
    let (_, node) = parse_single(&output);
    assert_eq!(node.property("ButtonType"), Some(&PropertyValue::from("Custom")));
}

#[test]
fn test_text_input_mapping() {
    let output = ConversionEngine::new().convert(CLASSIC_TEXT_INPUT).unwrap();
    let (_, node) = parse_single(&output);
    assert_eq!(node.control.to_string(), "TextInput@0.0.54");
    assert_eq!(node.property("Value"), Some(&PropertyValue::formula("\"\"")));
    assert_eq!(node.property("Placeholder"), Some(&PropertyValue::formula("\"Search\"")));
    assert_eq!(
        node.property("Mode"),
        Some(&PropertyValue::formula("TextInputMode.SingleLine"))
    );
}

#[test]
fn test_children_are_converted() {
    let output = ConversionEngine::new().convert(GALLERY_WITH_CHILD).unwrap();
    let (_, gallery) = parse_single(&output);
    assert_eq!(gallery.control.to_string(), "Gallery@2.15.0");
    assert_eq!(gallery.property("Layout"), Some(&PropertyValue::from("Vertical")));

    let title = gallery.children.get("Title1").unwrap();
    assert_eq!(title.control.to_string(), "Text@0.0.51");
    assert_eq!(
        title.property("FontColor"),
        Some(&PropertyValue::formula("RGBA(0, 0, 0, 1)"))
    );
}

#[test]
fn test_engines_with_different_tables_coexist() {
    let builtin = ConversionEngine::new();
    let mut config = MappingConfig::builtin();
    config
        .control_types
        .insert("Classic/Button@2.2.0", "Button@9.9.9");
    let custom = ConversionEngine::with_config(config);

    let (_, a) = parse_single(&builtin.convert(CLASSIC_BUTTON).unwrap());
    let (_, b) = parse_single(&custom.convert(CLASSIC_BUTTON).unwrap());
    assert_eq!(a.control.to_string(), "Button@0.0.45");
    assert_eq!(b.control.to_string(), "Button@9.9.9");
}
