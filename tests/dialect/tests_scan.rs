use crate::helpers::source_fixtures::*;
use pacontrol::PropertyValue;
use pacontrol::dialect::{extract_control_info, extract_properties, validate};

#[test]
fn test_control_info_from_fixtures() {
    let info = extract_control_info(CLASSIC_BUTTON).unwrap();
    assert_eq!(info.name, "Button1");
    assert_eq!(info.control_type, "Classic/Button");
    assert_eq!(info.version.as_deref(), Some("2.2.0"));

    let info = extract_control_info(GALLERY_WITH_CHILD).unwrap();
    assert_eq!(info.name, "Gallery1");
    assert_eq!(info.full_type, "Gallery@2.15.0");
}

#[test]
fn test_control_info_absent() {
    assert!(extract_control_info(NOT_A_CONTROL).is_none());
}

#[test]
fn test_validate_never_panics() {
    assert!(validate(CLASSIC_BUTTON));
    assert!(validate(NOT_A_CONTROL));
    assert!(!validate("k: \"open\n  - ]["));
}

#[test]
fn test_extract_properties_matches_parse_for_flat_documents() {
    let props = extract_properties(CLASSIC_BUTTON_ALL_CORNERS).unwrap();
    assert_eq!(props["Text"], PropertyValue::formula("\"Submit\""));
    assert_eq!(props["RadiusBottomRight"], PropertyValue::from(5));
    assert_eq!(props.len(), 5);
}
