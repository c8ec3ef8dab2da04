//! Property renaming and default injection.

use super::config::MappingConfig;
use crate::base::{ConversionLog, Properties, TypeTag};

/// Maps classic properties onto a modern type.
///
/// The output is a pure function of the input properties, the modern type
/// and the configured tables.
#[derive(Debug, Clone, Copy)]
pub struct PropertyMapper<'a> {
    config: &'a MappingConfig,
}

impl<'a> PropertyMapper<'a> {
    pub fn new(config: &'a MappingConfig) -> Self {
        Self { config }
    }

    /// Rename, drop or keep each classic property in order, then add the
    /// defaults for `modern` that are still missing.
    pub fn map_properties(
        &self,
        classic: &Properties,
        modern: &TypeTag,
        log: &mut ConversionLog,
    ) -> Properties {
        let (matched, table) = self.config.property_table(modern);
        if let Some(key) = matched {
            log.push(format!("Using property mappings for {key}"));
        }

        let mut mapped = Properties::with_capacity(classic.len());
        for (key, value) in classic {
            if value.is_null() {
                log.push(format!("Property skipped (no value): {key}"));
                continue;
            }
            let target = match table.get(key) {
                Some(None) => {
                    log.push(format!("Property dropped (no modern equivalent): {key}"));
                    continue;
                }
                Some(Some(target)) => {
                    log.push(format!("Property conversion: {key} -> {target}"));
                    target
                }
                None => {
                    log.push(format!("Using unmapped property as-is: {key}"));
                    key
                }
            };
            if mapped.contains_key(target) {
                log.push(format!(
                    "Property {key} not applied: {target} is already set"
                ));
                continue;
            }
            mapped.insert(target.clone(), value.clone());
        }

        self.add_defaults(&mut mapped, modern, log);
        mapped
    }

    fn add_defaults(&self, mapped: &mut Properties, modern: &TypeTag, log: &mut ConversionLog) {
        let Some((_, defaults)) = self.config.default_properties.lookup(modern) else {
            return;
        };
        for (key, value) in defaults {
            if mapped.contains_key(key) {
                continue;
            }
            log.push(format!("Added default property: {key} = {value}"));
            mapped.insert(key.clone(), value.clone());
        }
    }
}
