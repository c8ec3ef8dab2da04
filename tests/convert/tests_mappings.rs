use crate::helpers::document_helpers::parse_single;
use crate::helpers::source_fixtures::*;
use pacontrol::{ConversionEngine, ConversionError, MappingConfig, MappingError, PropertyValue};
use rstest::rstest;

const CUSTOM_MAPPINGS: &str = r#"{
    "controlTypes": { "classic/button@2.2.0": "Nope", "button": "FluentButton@1.0.0" },
    "properties": { "Text": "Label", "RadiusTopLeft": null }
}"#;

#[test]
fn test_imported_tables_drive_conversion() {
    let mut engine = ConversionEngine::new();
    engine.import_mappings(CUSTOM_MAPPINGS).unwrap();

    let outcome = engine.convert_with_log(CLASSIC_BUTTON);
    let (_, node) = parse_single(&outcome.result.unwrap());
    // The versioned key differs in case, so the bare local name matches.
    assert_eq!(node.control.to_string(), "FluentButton@1.0.0");
    assert_eq!(node.property("Label"), Some(&PropertyValue::from("Submit")));
    assert!(node.property("BorderRadius").is_none());
    assert!(outcome.log.contains("(using base type)"));
}

const BUTTON_TWO_CORNERS: &str = "- Button1:
    Control: Classic/Button@2.2.0
    Properties:
      RadiusTopLeft: 5
      RadiusTopRight: 5
";

#[test]
fn test_renamed_corner_still_folds_into_border_radius() {
    let mut engine = ConversionEngine::new();
    let mut config: serde_json::Value =
        serde_json::from_str(&engine.export_mappings().unwrap()).unwrap();
    config["properties"]["RadiusTopLeft"] = "BorderRadius.TopLeft".into();
    for table in config["typeProperties"].as_object_mut().unwrap().values_mut() {
        if table.get("RadiusTopLeft").is_some() {
            table["RadiusTopLeft"] = "BorderRadius.TopLeft".into();
        }
    }
    engine.import_mappings(&config.to_string()).unwrap();

    let output = engine.convert(BUTTON_TWO_CORNERS).unwrap();
    let (_, node) = parse_single(&output);
    assert!(node.property("BorderRadius.TopLeft").is_none());
    assert!(node.property("RadiusTopRight").is_none());
    let radius = node.property("BorderRadius").and_then(PropertyValue::as_object).unwrap();
    assert_eq!(radius["TopLeft"], PropertyValue::from(5));
    assert_eq!(radius["TopRight"], PropertyValue::from(5));
    assert_eq!(radius["BottomLeft"], PropertyValue::from(0));
    assert_eq!(radius["BottomRight"], PropertyValue::from(0));
}

#[test]
fn test_export_then_import_is_lossless() {
    let mut engine = ConversionEngine::new();
    let exported = engine.export_mappings().unwrap();
    engine.import_mappings(&exported).unwrap();
    assert_eq!(engine.config(), &MappingConfig::builtin());
}

#[rstest]
#[case("{}")]
#[case(r#"{"controlTypes": {"button": "Button"}}"#)]
#[case(r#"{"properties": {}}"#)]
#[case(r#"{"controlTypes": "button", "properties": {}}"#)]
fn test_invalid_mappings_are_rejected(#[case] json: &str) {
    let mut engine = ConversionEngine::new();
    assert!(matches!(
        engine.import_mappings(json),
        Err(MappingError::InvalidConfiguration(_))
    ));
    assert_eq!(engine.config(), &MappingConfig::builtin());
}

#[test]
fn test_empty_type_table_rejects_everything() {
    let mut engine = ConversionEngine::new();
    engine
        .import_mappings(r#"{"controlTypes": {}, "properties": {}}"#)
        .unwrap();
    assert!(matches!(
        engine.convert(CLASSIC_BUTTON),
        Err(ConversionError::UnsupportedControlType { .. })
    ));
}
