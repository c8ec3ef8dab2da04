//! Built-in mapping tables.

use super::config::{
    DefaultPropertyTable, MappingConfig, PropertyMap, PropertyMappingTable, TypeMappingTable,
};
use crate::base::{Properties, PropertyValue};

/// Versioned classic types with a known modern counterpart.
const VERSIONED_TYPES: &[(&str, &str)] = &[
    ("Classic/Button@2.2.0", "Button@0.0.45"),
    ("Classic/TextInput@2.3.2", "TextInput@0.0.54"),
    ("Classic/DropDown@2.3.1", "DropDown@0.0.44"),
    ("Classic/ComboBox@2.4.0", "ComboBox@0.0.51"),
    ("Classic/CheckBox@2.1.0", "Checkbox@0.0.30"),
    ("Classic/Toggle@2.1.0", "Toggle@1.1.5"),
    ("Classic/Radio@2.3.0", "Radio@0.0.25"),
    ("Classic/Slider@2.1.0", "Slider@1.0.32"),
    ("Classic/DatePicker@2.6.0", "DatePicker@0.0.46"),
    ("Label@2.5.1", "Text@0.0.51"),
    ("Gallery@2.15.0", "Gallery@2.15.0"),
    ("Form@2.4.4", "Form@2.4.4"),
];

/// Bare classic names, matched case-insensitively.
const BARE_TYPES: &[(&str, &str)] = &[
    // Basic
    ("button", "Button@0.0.45"),
    ("text", "Text@0.0.51"),
    ("label", "Text@0.0.51"),
    ("image", "Image"),
    ("htmltext", "HtmlViewer"),
    ("rectangle", "Rectangle"),
    ("icon", "Icon"),
    // Input
    ("textbox", "TextInput@0.0.54"),
    ("textinput", "TextInput@0.0.54"),
    ("textarea", "TextInput@0.0.54"),
    ("dropdown", "DropDown@0.0.44"),
    ("combobox", "ComboBox@0.0.51"),
    ("checkbox", "Checkbox@0.0.30"),
    ("toggle", "Toggle@1.1.5"),
    ("radio", "Radio@0.0.25"),
    ("slider", "Slider@1.0.32"),
    ("datepicker", "DatePicker@0.0.46"),
    ("rating", "Rating"),
    // Data
    ("gallery", "Gallery@2.15.0"),
    ("datatable", "Table"),
    ("chart", "Chart"),
    ("piechart", "PieChart"),
    ("barchart", "BarChart"),
    ("linechart", "LineChart"),
    // Navigation
    ("tab", "TabList"),
    ("menu", "Menu"),
    // Containers
    ("form", "Form@2.4.4"),
    ("group", "GroupContainer"),
    ("container", "GroupContainer"),
    ("card", "DataCard"),
    // Media
    ("video", "Video"),
    ("camera", "Camera"),
    ("microphone", "Microphone"),
    ("barcodescanner", "BarcodeReader"),
    // Advanced
    ("timer", "Timer"),
    ("pdf", "PdfViewer"),
    ("powerbi", "PowerBITile"),
    ("mapcontrol", "Map"),
];

/// Property renames shared by every modern type without its own table.
const COMMON_PROPERTIES: &[(&str, Option<&str>)] = &[
    // Layout and behaviour
    ("Visible", Some("Visible")),
    ("X", Some("X")),
    ("Y", Some("Y")),
    ("Width", Some("Width")),
    ("Height", Some("Height")),
    ("Fill", Some("Fill")),
    ("BorderColor", Some("BorderColor")),
    ("BorderThickness", Some("BorderThickness")),
    ("OnSelect", Some("OnSelect")),
    ("DisplayMode", Some("DisplayMode")),
    ("TabIndex", Some("TabIndex")),
    ("Tooltip", Some("Tooltip")),
    ("AccessibleLabel", Some("AccessibleLabel")),
    // Text
    ("Text", Some("Text")),
    ("FontWeight", Some("FontWeight")),
    ("Font", Some("Font")),
    ("Size", Some("Size")),
    ("Italic", Some("Italic")),
    ("Underline", Some("Underline")),
    ("Strikethrough", Some("Strikethrough")),
    ("Color", Some("Color")),
    ("Align", Some("Align")),
    ("VerticalAlign", Some("VerticalAlign")),
    ("LineHeight", Some("LineHeight")),
    ("Overflow", Some("Overflow")),
    // Input
    ("Default", Some("DefaultText")),
    ("HintText", Some("Placeholder")),
    ("Format", Some("Format")),
    ("MaxLength", Some("MaxLength")),
    ("Mode", Some("Mode")),
    // Selection
    ("Items", Some("Items")),
    ("Selected", Some("SelectedItem")),
    ("AllowEmptySelection", Some("AllowEmptySelection")),
    ("AllItems", Some("AllItems")),
    ("SearchPlaceholder", Some("Placeholder")),
    // Gallery
    ("TemplateSize", Some("TemplateSize")),
    ("TemplateFill", Some("TemplateFill")),
    ("TemplateGap", Some("TemplateGap")),
    ("Layout", Some("Layout")),
    ("WrapCount", Some("WrapCount")),
    ("ShowNavigation", Some("ShowNavigation")),
    ("ShowScrollbar", Some("ShowScrollbar")),
    // Form
    ("DataSource", Some("DataSource")),
    ("Item", Some("Item")),
    ("FormMode", Some("FormMode")),
    ("ShowHeader", Some("ShowHeader")),
    ("ShowFooter", Some("ShowFooter")),
    // Image
    ("Image", Some("Image")),
    ("ImagePosition", Some("ImagePosition")),
    ("ImageRotation", Some("ImageRotation")),
    // Corners, folded into BorderRadius by the button rules
    ("RadiusTopLeft", Some("RadiusTopLeft")),
    ("RadiusTopRight", Some("RadiusTopRight")),
    ("RadiusBottomLeft", Some("RadiusBottomLeft")),
    ("RadiusBottomRight", Some("RadiusBottomRight")),
    // Interaction states styled by the modern theme
    ("HoverFill", None),
    ("HoverColor", None),
    ("HoverBorderColor", None),
    ("PressedFill", None),
    ("PressedColor", None),
    ("PressedBorderColor", None),
    ("DisabledFill", None),
    ("DisabledColor", None),
    ("DisabledBorderColor", None),
    ("FocusedBorderThickness", None),
];

const BUTTON_PROPERTIES: &[(&str, Option<&str>)] = &[
    ("Fill", Some("BasePaletteColor")),
    ("Color", Some("FontColor")),
    ("Size", Some("FontSize")),
    ("Align", None),
    ("VerticalAlign", None),
];

const TEXT_INPUT_PROPERTIES: &[(&str, Option<&str>)] = &[
    ("Default", Some("Value")),
    ("Color", Some("FontColor")),
    ("Size", Some("FontSize")),
    ("Clear", None),
    ("EnableSpellCheck", None),
];

const TEXT_PROPERTIES: &[(&str, Option<&str>)] = &[
    ("Color", Some("FontColor")),
    ("Size", Some("FontSize")),
    ("LineHeight", None),
    ("Overflow", None),
];

fn property_map(entries: &[(&str, Option<&str>)]) -> PropertyMap {
    entries
        .iter()
        .map(|(classic, modern)| (classic.to_string(), modern.map(str::to_string)))
        .collect()
}

/// Common properties with type-specific overrides applied on top.
fn extend_common(overrides: &[(&str, Option<&str>)]) -> PropertyMap {
    let mut map = property_map(COMMON_PROPERTIES);
    map.extend(property_map(overrides));
    map
}

fn defaults(entries: &[(&str, PropertyValue)]) -> Properties {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect()
}

pub(super) fn config() -> MappingConfig {
    let control_types: TypeMappingTable = VERSIONED_TYPES
        .iter()
        .chain(BARE_TYPES)
        .copied()
        .collect();

    let mut type_properties = PropertyMappingTable::new();
    type_properties.insert("Button", extend_common(BUTTON_PROPERTIES));
    type_properties.insert("TextInput", extend_common(TEXT_INPUT_PROPERTIES));
    type_properties.insert("Text", extend_common(TEXT_PROPERTIES));

    let mut default_properties = DefaultPropertyTable::new();
    default_properties.insert(
        "Button",
        defaults(&[("Appearance", PropertyValue::formula("ButtonAppearance.Primary"))]),
    );
    default_properties.insert(
        "TextInput",
        defaults(&[("Mode", PropertyValue::formula("TextInputMode.SingleLine"))]),
    );

    MappingConfig {
        control_types,
        common_properties: property_map(COMMON_PROPERTIES),
        type_properties,
        default_properties,
    }
}
