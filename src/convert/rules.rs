//! Category-specific structural rules applied after property mapping.

use crate::base::{ConversionLog, Properties, PropertyValue, TypeTag};
use crate::mapping::PropertyMap;

/// Classic corner keys and their place inside `BorderRadius`.
const CORNERS: [(&str, &str); 4] = [
    ("RadiusTopLeft", "TopLeft"),
    ("RadiusTopRight", "TopRight"),
    ("RadiusBottomLeft", "BottomLeft"),
    ("RadiusBottomRight", "BottomRight"),
];

const BORDER_RADIUS: &str = "BorderRadius";

/// Control families that carry extra rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlCategory {
    Button,
    Gallery,
    Form,
    TextInput,
    Other,
}

impl ControlCategory {
    /// Category of a control, judged by its modern type, then its classic type.
    pub fn of(modern: &TypeTag, classic: &TypeTag) -> Self {
        [modern, classic]
            .into_iter()
            .map(|tag| Self::from_name(tag.local_name()))
            .find(|category| *category != Self::Other)
            .unwrap_or(Self::Other)
    }

    fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "button" => Self::Button,
            "gallery" => Self::Gallery,
            "form" | "editform" => Self::Form,
            "textinput" | "textbox" | "textarea" => Self::TextInput,
            _ => Self::Other,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Gallery => "gallery",
            Self::Form => "form",
            Self::TextInput => "text input",
            Self::Other => "generic",
        }
    }

    pub fn rules(self) -> &'static [StructuralRule] {
        match self {
            Self::Button => &[
                StructuralRule::EnsureProperty {
                    key: "ButtonType",
                    value: "Standard",
                },
                StructuralRule::ConsolidateBorderRadius,
            ],
            Self::Gallery => &[StructuralRule::EnsureProperty {
                key: "Layout",
                value: "Vertical",
            }],
            Self::Form => &[StructuralRule::EnsureProperty {
                key: "FormMode",
                value: "Edit",
            }],
            Self::TextInput => &[StructuralRule::CarryOver {
                from: "HintText",
                to: "Placeholder",
            }],
            Self::Other => &[],
        }
    }
}

/// One post-mapping rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralRule {
    /// Add `key` with a string value when absent.
    EnsureProperty {
        key: &'static str,
        value: &'static str,
    },
    /// Fold the four `Radius*` corners into one `BorderRadius` object.
    ConsolidateBorderRadius,
    /// Copy a classic property into the modern key when that key is absent.
    CarryOver {
        from: &'static str,
        to: &'static str,
    },
}

impl StructuralRule {
    /// Apply to the mapped properties. `classic` is the unmapped input and
    /// `table` the property table it was mapped with.
    pub fn apply(
        self,
        classic: &Properties,
        table: &PropertyMap,
        modern: &mut Properties,
        log: &mut ConversionLog,
    ) {
        match self {
            Self::EnsureProperty { key, value } => {
                if !modern.contains_key(key) {
                    modern.insert(key.to_string(), PropertyValue::from(value));
                    log.push(format!("Added {key} property: {value}"));
                }
            }
            Self::ConsolidateBorderRadius => consolidate_border_radius(classic, table, modern, log),
            Self::CarryOver { from, to } => {
                if modern.contains_key(to) {
                    return;
                }
                if let Some(value) = classic.get(from).filter(|v| !v.is_null()) {
                    modern.insert(to.to_string(), value.clone());
                    log.push(format!("Converted {from} to {to}"));
                }
            }
        }
    }
}

/// Run every rule of `category` in order.
pub fn apply_rules(
    category: ControlCategory,
    classic: &Properties,
    table: &PropertyMap,
    modern: &mut Properties,
    log: &mut ConversionLog,
) {
    let rules = category.rules();
    if rules.is_empty() {
        return;
    }
    log.push(format!("Applying {}-specific rules", category.label()));
    for rule in rules {
        rule.apply(classic, table, modern, log);
    }
}

/// Corners are read from the classic properties. Whatever key the table
/// mapped a corner to is removed; a corner the table drops stays unset.
fn consolidate_border_radius(
    classic: &Properties,
    table: &PropertyMap,
    props: &mut Properties,
    log: &mut ConversionLog,
) {
    let mut corners = Vec::with_capacity(CORNERS.len());
    for (key, corner) in CORNERS {
        let target = match table.get(key) {
            Some(None) => continue,
            Some(Some(target)) => target.as_str(),
            None => key,
        };
        if let Some(value) = classic.get(key).filter(|v| !v.is_null()) {
            corners.push((corner, target, value));
        }
    }
    if corners.is_empty() {
        return;
    }
    log.push("Converting border radius properties");

    // Only remove a mapped key that still holds this corner's value.
    let mapped: Vec<&str> = corners
        .iter()
        .filter(|(_, target, value)| props.get(*target) == Some(*value))
        .map(|(_, target, _)| *target)
        .collect();
    let position = mapped
        .iter()
        .filter_map(|target| props.get_index_of(*target))
        .min()
        .unwrap_or(props.len());
    for target in mapped {
        props.shift_remove(target);
    }

    if props.contains_key(BORDER_RADIUS) {
        log.push("BorderRadius already set; removed corner radius properties");
        return;
    }
    let mut radius = Properties::with_capacity(CORNERS.len());
    for (_, corner) in CORNERS {
        let value = corners
            .iter()
            .find(|(c, _, _)| *c == corner)
            .map_or_else(|| PropertyValue::from(0), |(_, _, v)| (*v).clone());
        radius.insert(corner.to_string(), value);
    }
    let position = position.min(props.len());
    props.shift_insert(position, BORDER_RADIUS.to_string(), PropertyValue::Object(radius));
}
