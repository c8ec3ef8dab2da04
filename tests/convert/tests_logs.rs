use crate::helpers::document_helpers::messages;
use crate::helpers::source_fixtures::*;
use pacontrol::ConversionEngine;

#[test]
fn test_log_is_reset_between_calls() {
    let engine = ConversionEngine::new();
    engine.convert(CLASSIC_BUTTON).unwrap();
    let first = engine.conversion_log();
    assert!(messages(&first).contains(&"Applying button-specific rules"));

    engine.convert(GALLERY_WITH_CHILD).unwrap();
    let second = engine.conversion_log();
    let second = messages(&second);
    assert_eq!(second.iter().filter(|m| **m == "Starting conversion").count(), 1);
    assert!(!second.contains(&"Applying button-specific rules"));
    assert!(second.contains(&"Applying gallery-specific rules"));
}

#[test]
fn test_failed_conversion_still_has_a_log() {
    let engine = ConversionEngine::new();
    assert!(engine.convert(UNKNOWN_CONTROL).is_err());
    let log = engine.conversion_log();
    let log = messages(&log);
    assert_eq!(log.first(), Some(&"Starting conversion"));
    assert_eq!(log.last(), Some(&"Error: Unsupported control type: Contoso/Widget@1.0.0"));
    assert!(!log.contains(&"Conversion completed"));
}

#[test]
fn test_log_records_each_decision_in_order() {
    let outcome = ConversionEngine::new().convert_with_log(CLASSIC_BUTTON);
    let log: Vec<&str> = outcome.log.messages().collect();
    assert_eq!(
        log,
        vec![
            "Starting conversion",
            "Found control Button1 (Classic/Button@2.2.0)",
            "Converting control Button1",
            "Control type conversion: Classic/Button@2.2.0 -> Button@0.0.45",
            "Using property mappings for Button",
            "Property conversion: Text -> Text",
            "Property conversion: RadiusTopLeft -> RadiusTopLeft",
            "Added default property: Appearance = =ButtonAppearance.Primary",
            "Applying button-specific rules",
            "Added ButtonType property: Standard",
            "Converting border radius properties",
            "Conversion completed",
        ]
    );
}

#[test]
fn test_concurrent_conversions_keep_their_own_logs() {
    let engine = ConversionEngine::new();
    std::thread::scope(|scope| {
        let a = scope.spawn(|| engine.convert_with_log(CLASSIC_BUTTON));
        let b = scope.spawn(|| engine.convert_with_log(GALLERY_WITH_CHILD));
        let a = a.join().unwrap();
        let b = b.join().unwrap();
        assert!(a.log.contains("Button1") && !a.log.contains("Gallery1"));
        assert!(b.log.contains("Gallery1") && !b.log.contains("Button1"));
    });
}
