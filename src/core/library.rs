//! Library and bundle entries.

use std::fmt;

use serde::Serialize;

use crate::core::alias::Alias;
use crate::core::version::RichVersion;

/// A module coordinate without version: `group:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModuleId {
    group: String,
    name: String,
}

impl ModuleId {
    /// Create a module coordinate.
    pub fn new(group: impl Into<String>, name: impl Into<String>) -> Self {
        ModuleId {
            group: group.into(),
            name: name.into(),
        }
    }

    /// Parse `group:name`. Both parts must be non-empty.
    pub fn parse(notation: &str) -> Option<Self> {
        let (group, name) = notation.split_once(':')?;
        if group.is_empty() || name.is_empty() || name.contains(':') {
            return None;
        }
        Some(ModuleId::new(group, name))
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.group, self.name)
    }
}

/// A library entry: the descriptor returned for a dependency lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    alias: Alias,
    module: ModuleId,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_ref: Option<Alias>,
    #[serde(skip_serializing_if = "RichVersion::is_empty")]
    version: RichVersion,
}

impl Library {
    pub(crate) fn new(
        alias: Alias,
        module: ModuleId,
        version_ref: Option<Alias>,
        version: RichVersion,
    ) -> Self {
        Library {
            alias,
            module,
            version_ref,
            version,
        }
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    pub fn module(&self) -> &ModuleId {
        &self.module
    }

    /// The `[versions]` entry this library's version came from, if any.
    pub fn version_ref(&self) -> Option<&Alias> {
        self.version_ref.as_ref()
    }

    /// The resolved version constraint (empty if unspecified).
    pub fn version(&self) -> &RichVersion {
        &self.version
    }

    /// `group:name:version`, or `group:name` when the version is not a single string.
    pub fn coordinates(&self) -> String {
        match self.version.single_version() {
            "" => self.module.to_string(),
            version => format!("{}:{}", self.module, version),
        }
    }
}

/// A named, ordered group of libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bundle {
    alias: Alias,
    members: Vec<Alias>,
}

impl Bundle {
    pub(crate) fn new(alias: Alias, members: Vec<Alias>) -> Self {
        Bundle { alias, members }
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    /// Member library aliases in declaration order.
    pub fn members(&self) -> &[Alias] {
        &self.members
    }
}
