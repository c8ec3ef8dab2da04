//! Control type identifiers.
//!
//! A control type is written `Name` or `Name@major.minor.patch`, where the
//! name may carry a namespace prefix (`Classic/Button@2.2.0`).

use std::fmt;
use std::str::FromStr;

/// A control type identifier with an optional version suffix.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TypeTag {
    name: String,
    version: Option<String>,
}

impl TypeTag {
    /// Create a bare (unversioned) tag.
    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: None,
        }
    }

    /// Create a versioned tag.
    pub fn versioned(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: Some(version.into()),
        }
    }

    /// Parse a type token. Never fails: a suffix that is not a dotted
    /// numeric version stays part of the name.
    pub fn parse(token: &str) -> Self {
        let token = token.trim();
        if let Some((name, version)) = token.rsplit_once('@') {
            if !name.is_empty() && is_version(version) {
                return Self::versioned(name, version);
            }
        }
        Self::bare(token)
    }

    /// The type name without version (`Classic/Button`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The version suffix, if any (`2.2.0`).
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn is_versioned(&self) -> bool {
        self.version.is_some()
    }

    /// The name with any `Namespace/` prefix removed (`Button`).
    pub fn local_name(&self) -> &str {
        self.name
            .rsplit_once('/')
            .map(|(_, local)| local)
            .unwrap_or(&self.name)
    }

    /// Same tag with the version dropped.
    pub fn without_version(&self) -> Self {
        Self::bare(self.name.clone())
    }
}

/// `true` for dotted numeric versions such as `2`, `2.2` or `2.2.0`.
fn is_version(s: &str) -> bool {
    !s.is_empty()
        && s.split('.')
            .all(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(version) => write!(f, "{}@{}", self.name, version),
            None => write!(f, "{}", self.name),
        }
    }
}

impl FromStr for TypeTag {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl From<&str> for TypeTag {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}
