//! Plugin entries.

use serde::Serialize;

use crate::core::alias::Alias;
use crate::core::version::RichVersion;

/// A plugin entry: an id plus the version it should be applied at.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plugin {
    alias: Alias,
    id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version_ref: Option<Alias>,
    #[serde(skip_serializing_if = "RichVersion::is_empty")]
    version: RichVersion,
}

impl Plugin {
    pub(crate) fn new(
        alias: Alias,
        id: String,
        version_ref: Option<Alias>,
        version: RichVersion,
    ) -> Self {
        Plugin {
            alias,
            id,
            version_ref,
            version,
        }
    }

    pub fn alias(&self) -> &Alias {
        &self.alias
    }

    /// The plugin id, e.g. `org.jetbrains.kotlin.jvm`.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn version_ref(&self) -> Option<&Alias> {
        self.version_ref.as_ref()
    }

    pub fn version(&self) -> &RichVersion {
        &self.version
    }

    /// `id:version`, or just the id when the version is not a single string.
    pub fn notation(&self) -> String {
        match self.version.single_version() {
            "" => self.id.clone(),
            version => format!("{}:{}", self.id, version),
        }
    }
}
