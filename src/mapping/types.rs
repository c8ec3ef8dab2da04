//! Classic → modern control type resolution.

use super::config::TypeMappingTable;
use crate::base::{ConversionLog, TypeTag};

/// How a type token was matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    /// The whole token matched a table key.
    Exact,
    /// Matched after dropping the version or namespace.
    BaseType,
}

/// A successful type resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeResolution {
    pub classic: TypeTag,
    pub modern: TypeTag,
    pub matched: MatchKind,
}

/// Resolves classic type tokens against a [`TypeMappingTable`].
///
/// Lookup order:
/// 1. the full token, case-sensitive (`Classic/Button@2.2.0`)
/// 2. the bare name, case-insensitive (`Classic/Button`)
/// 3. the bare name without namespace, case-insensitive (`Button`)
#[derive(Debug, Clone, Copy)]
pub struct TypeMapper<'a> {
    table: &'a TypeMappingTable,
}

impl<'a> TypeMapper<'a> {
    pub fn new(table: &'a TypeMappingTable) -> Self {
        Self { table }
    }

    /// Resolve `token`, logging the decision. `None` if nothing matches.
    pub fn resolve(&self, token: &str, log: &mut ConversionLog) -> Option<TypeResolution> {
        let token = token.trim();
        let classic = TypeTag::parse(token);
        let (modern, matched) = self.lookup(token, &classic)?;

        match matched {
            MatchKind::Exact => log.push(format!("Control type conversion: {token} -> {modern}")),
            MatchKind::BaseType => log.push(format!(
                "Control type conversion (using base type): {token} -> {modern}"
            )),
        }

        Some(TypeResolution {
            classic,
            modern: TypeTag::parse(modern),
            matched,
        })
    }

    fn lookup(&self, token: &str, classic: &TypeTag) -> Option<(&'a str, MatchKind)> {
        if let Some(modern) = self.table.get_exact(token) {
            return Some((modern, MatchKind::Exact));
        }
        if let Some(modern) = self.table.get_bare(classic.name()) {
            let matched = if classic.is_versioned() {
                MatchKind::BaseType
            } else {
                MatchKind::Exact
            };
            return Some((modern, matched));
        }
        if classic.local_name() != classic.name() {
            if let Some(modern) = self.table.get_bare(classic.local_name()) {
                return Some((modern, MatchKind::BaseType));
            }
        }
        None
    }
}
