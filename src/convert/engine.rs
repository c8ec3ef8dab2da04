//! The conversion pipeline.
//!
//! ```text
//! text ─▶ extract_control_info ─▶ parse ─▶ for each control:
//!                                            resolve type ─▶ map properties
//!                                            ─▶ structural rules ─▶ children
//!      ◀──────────────────────── render ◀───────────────────────┘
//! ```
//!
//! Every step writes to the call's [`ConversionLog`] before it can fail, so
//! a failed conversion still explains how far it got.

use super::ConversionError;
use super::rules::{self, ControlCategory};
use crate::base::{ConversionLog, LogEntry};
use crate::dialect::{
    self, ControlDocument, ControlInfo, ControlNode, DialectCodec, StructuralCodec, Yaml,
};
use crate::mapping::{MappingConfig, MappingError, PropertyMapper, TypeMapper};
use parking_lot::Mutex;

/// Result of one conversion together with its log.
#[derive(Debug, Clone)]
pub struct ConversionOutcome {
    pub result: Result<String, ConversionError>,
    pub log: ConversionLog,
}

impl ConversionOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Converts classic control documents to modern ones.
///
/// The engine owns its mapping tables. Replacing them needs `&mut self`, so
/// it can never overlap a conversion; conversions themselves only read.
#[derive(Debug)]
pub struct ConversionEngine<C: StructuralCodec = Yaml> {
    config: MappingConfig,
    codec: DialectCodec<C>,
    /// Log of the most recent [`ConversionEngine::convert`] call.
    last_log: Mutex<ConversionLog>,
}

impl ConversionEngine {
    /// Engine with the built-in tables.
    pub fn new() -> Self {
        Self::with_config(MappingConfig::builtin())
    }

    pub fn with_config(config: MappingConfig) -> Self {
        Self::with_codec(config, Yaml)
    }
}

impl Default for ConversionEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: StructuralCodec> ConversionEngine<C> {
    pub fn with_codec(config: MappingConfig, codec: C) -> Self {
        Self {
            config,
            codec: DialectCodec::new(codec),
            last_log: Mutex::new(ConversionLog::new()),
        }
    }

    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Replace every mapping table.
    pub fn set_config(&mut self, config: MappingConfig) {
        self.config = config;
    }

    /// Replace the mapping tables from JSON. On error the current tables stay.
    pub fn import_mappings(&mut self, json: &str) -> Result<(), MappingError> {
        let config = MappingConfig::from_json(json)?;
        tracing::info!(
            control_types = config.control_types.len(),
            type_tables = config.type_properties.len(),
            "imported mapping tables"
        );
        self.config = config;
        Ok(())
    }

    /// The current mapping tables as JSON.
    pub fn export_mappings(&self) -> Result<String, MappingError> {
        self.config.to_json()
    }

    // ========================================================================
    // CONVERSION
    // ========================================================================

    /// Convert classic dialect text. The call's log is kept for
    /// [`ConversionEngine::conversion_log`].
    pub fn convert(&self, text: &str) -> Result<String, ConversionError> {
        let ConversionOutcome { result, log } = self.convert_with_log(text);
        *self.last_log.lock() = log;
        result
    }

    /// Convert classic dialect text, returning the call's own log.
    pub fn convert_with_log(&self, text: &str) -> ConversionOutcome {
        let mut log = ConversionLog::new();
        let result = self.run(text, &mut log);
        match &result {
            Ok(_) => tracing::info!(entries = log.len(), "conversion completed"),
            Err(e) => {
                log.push(format!("Error: {e}"));
                tracing::warn!(error = %e, "conversion failed");
            }
        }
        ConversionOutcome { result, log }
    }

    /// Entries of the most recent [`ConversionEngine::convert`] call.
    pub fn conversion_log(&self) -> Vec<LogEntry> {
        self.last_log.lock().entries().to_vec()
    }

    fn run(&self, text: &str, log: &mut ConversionLog) -> Result<String, ConversionError> {
        log.push("Starting conversion");

        let Some(info) = dialect::extract_control_info(text) else {
            log.push("No control declaration found");
            return Err(ConversionError::unsupported_input(
                "no `- Name:` / `Control:` declaration found",
            ));
        };
        log.push(format!("Found control {} ({})", info.name, info.full_type));

        let document = self.codec.parse(text)?;
        let converted = self.convert_document(&document, log)?;
        let output = self.codec.render(&converted)?;

        log.push("Conversion completed");
        Ok(output)
    }

    /// Convert every control of a parsed document, children included.
    pub fn convert_document(
        &self,
        document: &ControlDocument,
        log: &mut ConversionLog,
    ) -> Result<ControlDocument, ConversionError> {
        let mut converted = ControlDocument::new();
        for (name, node) in document.iter() {
            converted.insert(name, self.convert_node(name, node, log)?);
        }
        Ok(converted)
    }

    fn convert_node(
        &self,
        name: &str,
        node: &ControlNode,
        log: &mut ConversionLog,
    ) -> Result<ControlNode, ConversionError> {
        log.push(format!("Converting control {name}"));

        let token = node.control.to_string();
        let Some(resolution) = TypeMapper::new(&self.config.control_types).resolve(&token, log)
        else {
            log.push(format!("Unsupported control type: {token}"));
            return Err(ConversionError::unsupported_control_type(token));
        };

        let mut properties =
            PropertyMapper::new(&self.config).map_properties(&node.properties, &resolution.modern, log);

        let category = ControlCategory::of(&resolution.modern, &resolution.classic);
        let (_, table) = self.config.property_table(&resolution.modern);
        rules::apply_rules(category, &node.properties, table, &mut properties, log);

        let children = self.convert_document(&node.children, log)?;

        Ok(ControlNode {
            control: resolution.modern,
            properties,
            extras: node.extras.clone(),
            children,
        })
    }

    // ========================================================================
    // PASS-THROUGHS
    // ========================================================================

    /// `true` if the text looks like a control document.
    pub fn validate(&self, text: &str) -> bool {
        dialect::validate(text)
    }

    pub fn extract_control_info(&self, text: &str) -> Option<ControlInfo> {
        dialect::extract_control_info(text)
    }
}
