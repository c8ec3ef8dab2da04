//! Control name synthesis.
//!
//! Not used by the conversion pipeline. Generated names carry a random
//! suffix; callers that need reproducible output pass an explicit name.

use crate::base::TypeTag;
use rand::Rng;

/// `existing` if it is non-blank, otherwise a generated name.
pub fn control_name(existing: Option<&str>, control: &TypeTag) -> String {
    match existing.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name.to_string(),
        None => generate_control_name(control),
    }
}

/// `<BaseType><1..=9999>`, e.g. `Button4821` for `Classic/Button@2.2.0`.
pub fn generate_control_name(control: &TypeTag) -> String {
    let suffix: u32 = rand::thread_rng().gen_range(1..=9999);
    format!("{}{suffix}", control.local_name())
}
