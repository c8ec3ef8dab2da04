use crate::helpers::document_helpers::parse_single;
use pacontrol::dialect::samples::{SampleKind, classic_sample};
use pacontrol::{ConversionEngine, PropertyValue};
use rstest::rstest;

#[rstest]
#[case(SampleKind::Button, "Button@0.0.45", "ButtonType")]
#[case(SampleKind::Gallery, "Gallery@2.15.0", "Layout")]
#[case(SampleKind::Form, "Form@2.4.4", "FormMode")]
fn test_samples_convert(#[case] kind: SampleKind, #[case] modern: &str, #[case] required: &str) {
    let engine = ConversionEngine::new();
    let source = classic_sample(kind).unwrap();
    assert!(engine.validate(&source));
    assert!(engine.extract_control_info(&source).is_some());

    let output = engine.convert(&source).unwrap();
    let (_, node) = parse_single(&output);
    assert_eq!(node.control.to_string(), modern);
    assert!(node.property(required).is_some(), "missing {required}");
}

#[test]
fn test_button_sample_output() {
    let engine = ConversionEngine::new();
    let output = engine.convert(&classic_sample(SampleKind::Button).unwrap()).unwrap();
    let (_, node) = parse_single(&output);
    assert_eq!(
        node.property("BasePaletteColor"),
        Some(&PropertyValue::formula("RGBA(56, 96, 178, 1)"))
    );
    assert!(node.property("DisabledFill").is_none());
    let radius = node.property("BorderRadius").and_then(PropertyValue::as_object).unwrap();
    assert_eq!(radius["BottomRight"], PropertyValue::formula("10"));
}
