//! Classic-dialect sample documents.

use super::{ControlDocument, ControlNode, DialectError, render_dialect};
use crate::base::PropertyValue;

/// The built-in samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    Button,
    Gallery,
    Form,
}

impl SampleKind {
    pub const ALL: [SampleKind; 3] = [SampleKind::Button, SampleKind::Gallery, SampleKind::Form];

    pub fn name(self) -> &'static str {
        match self {
            SampleKind::Button => "button",
            SampleKind::Gallery => "gallery",
            SampleKind::Form => "form",
        }
    }
}

fn f(expr: &str) -> PropertyValue {
    PropertyValue::formula(expr)
}

/// Sample document for `kind`.
pub fn classic_sample_document(kind: SampleKind) -> ControlDocument {
    match kind {
        SampleKind::Button => ControlDocument::single(
            "Button1",
            ControlNode::new("Classic/Button@2.2.0")
                .with_property("Text", f("\"Submit\""))
                .with_property("X", f("40"))
                .with_property("Y", f("200"))
                .with_property("Width", f("280"))
                .with_property("Height", f("40"))
                .with_property("Fill", f("RGBA(56, 96, 178, 1)"))
                .with_property("Color", f("RGBA(255, 255, 255, 1)"))
                .with_property("DisabledFill", f("RGBA(166, 166, 166, 1)"))
                .with_property("BorderColor", f("RGBA(0, 0, 0, 0)"))
                .with_property("BorderThickness", f("0"))
                .with_property("RadiusTopLeft", f("10"))
                .with_property("RadiusTopRight", f("10"))
                .with_property("RadiusBottomLeft", f("10"))
                .with_property("RadiusBottomRight", f("10"))
                .with_property("DisplayMode", f("DisplayMode.Edit"))
                .with_property(
                    "OnSelect",
                    f("Notify(\"Button clicked\", NotificationType.Information)"),
                ),
        ),
        SampleKind::Gallery => ControlDocument::single(
            "Gallery1",
            ControlNode::new("Gallery@2.15.0")
                .with_extra("Variant", "Vertical")
                .with_property("X", f("40"))
                .with_property("Y", f("100"))
                .with_property("Width", f("320"))
                .with_property("Height", f("400"))
                .with_property("TemplateSize", f("80"))
                .with_property("TemplateFill", f("RGBA(255, 255, 255, 1)"))
                .with_property("Items", f("SampleCollection"))
                .with_property("OnSelect", f("Select(Self.Selected)"))
                .with_property("BorderColor", f("RGBA(225, 223, 221, 1)"))
                .with_property("BorderThickness", f("1")),
        ),
        SampleKind::Form => ControlDocument::single(
            "Form1",
            ControlNode::new("Form@2.4.4")
                .with_property("X", f("40"))
                .with_property("Y", f("100"))
                .with_property("Width", f("400"))
                .with_property("Height", f("550"))
                .with_property("DataSource", f("SampleTable"))
                .with_property("Item", f("First(SampleTable)"))
                .with_property("BorderColor", f("RGBA(225, 223, 221, 1)"))
                .with_property("BorderThickness", f("1"))
                .with_property("Fill", f("RGBA(255, 255, 255, 1)"))
                .with_property(
                    "OnSuccess",
                    f("Notify(\"Form submitted successfully\", NotificationType.Success)"),
                ),
        ),
    }
}

/// Sample document for `kind`, rendered as dialect text.
pub fn classic_sample(kind: SampleKind) -> Result<String, DialectError> {
    render_dialect(&classic_sample_document(kind))
}
