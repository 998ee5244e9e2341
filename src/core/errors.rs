//! Catalog error types and diagnostics.

use std::fmt;

use miette::Diagnostic as MietteDiagnostic;
use serde::Serialize;
use thiserror::Error;

use crate::util::diagnostic::{suggestions, Diagnostic};

/// The four kinds of catalog entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Library,
    Version,
    Bundle,
    Plugin,
}

impl Section {
    /// All sections in document order.
    pub const ALL: [Section; 4] = [
        Section::Version,
        Section::Library,
        Section::Bundle,
        Section::Plugin,
    ];

    /// The document table holding entries of this section.
    pub fn table(&self) -> &'static str {
        match self {
            Section::Library => "libraries",
            Section::Version => "versions",
            Section::Bundle => "bundles",
            Section::Plugin => "plugins",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Library => write!(f, "library"),
            Section::Version => write!(f, "version"),
            Section::Bundle => write!(f, "bundle"),
            Section::Plugin => write!(f, "plugin"),
        }
    }
}

/// Error building or querying a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error, MietteDiagnostic)]
pub enum CatalogError {
    #[error("{section} `{key}` not found in catalog `{catalog}`")]
    #[diagnostic(code(vercat::catalog::key_not_found))]
    KeyNotFound {
        section: Section,
        key: String,
        catalog: String,
        suggestions: Vec<String>,
    },

    #[error("invalid alias `{alias}`: {reason}")]
    #[diagnostic(code(vercat::catalog::invalid_alias))]
    InvalidAlias { alias: String, reason: String },

    #[error("duplicate {section} alias `{alias}`")]
    #[diagnostic(
        code(vercat::catalog::duplicate_alias),
        help("aliases differing only in `-`, `_` or `.` name the same entry")
    )]
    DuplicateAlias {
        section: Section,
        alias: String,
        first: String,
        second: String,
    },

    #[error("{section} `{alias}` references undefined version `{version_ref}`")]
    #[diagnostic(code(vercat::catalog::undefined_version_ref))]
    UndefinedVersionRef {
        section: Section,
        alias: String,
        version_ref: String,
    },

    #[error("bundle `{bundle}` references unknown library `{member}`")]
    #[diagnostic(code(vercat::catalog::unknown_bundle_member))]
    UnknownBundleMember { bundle: String, member: String },

    #[error("invalid {section} notation for `{alias}`: {reason}")]
    #[diagnostic(code(vercat::catalog::invalid_notation))]
    InvalidNotation {
        section: Section,
        alias: String,
        reason: String,
    },

    #[error("unsupported catalog format version `{found}`")]
    #[diagnostic(
        code(vercat::catalog::unsupported_format),
        help("supported format versions are 1.0 and 1.1")
    )]
    UnsupportedFormat { found: String },
}

impl CatalogError {
    /// True for a failed lookup, as opposed to a malformed catalog.
    pub fn is_key_not_found(&self) -> bool {
        matches!(self, CatalogError::KeyNotFound { .. })
    }

    /// Convert to a user-friendly diagnostic.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            CatalogError::KeyNotFound {
                section,
                key,
                catalog,
                suggestions: nearby,
            } => {
                let mut diag = Diagnostic::error(self.to_string());

                if !nearby.is_empty() {
                    diag = diag.with_context(format!("did you mean: {}?", nearby.join(", ")));
                }

                diag.with_suggestion(format!(
                    "Declare `{}` under [{}] in {}.versions.toml",
                    key,
                    section.table(),
                    catalog
                ))
                .with_suggestion(suggestions::LIST_ENTRIES)
            }

            CatalogError::InvalidAlias { reason, .. } => Diagnostic::error(self.to_string())
                .with_context(reason.clone())
                .with_suggestion(suggestions::ALIAS_SHAPE),

            CatalogError::DuplicateAlias { first, second, .. } => {
                Diagnostic::error(self.to_string())
                    .with_context(format!("declared as `{}` and `{}`", first, second))
                    .with_suggestion("Remove or rename one of the declarations")
            }

            CatalogError::UndefinedVersionRef { version_ref, .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(format!(
                    "Add `{}` to the [versions] table",
                    version_ref
                ))
            }

            CatalogError::UnknownBundleMember { member, .. } => {
                Diagnostic::error(self.to_string()).with_suggestion(format!(
                    "Add `{}` to the [libraries] table or remove it from the bundle",
                    member
                ))
            }

            CatalogError::InvalidNotation { section, .. } => {
                let expected = match section {
                    Section::Library => "`group:name[:version]` or a table with `module` or `group` and `name`",
                    Section::Plugin => "`id:version` or a table with `id`",
                    Section::Version => "a version string or a table of `require`, `strictly`, `prefer`, `reject`",
                    Section::Bundle => "an array of library aliases",
                };
                Diagnostic::error(self.to_string())
                    .with_suggestion(format!("Write the entry as {}", expected))
            }

            CatalogError::UnsupportedFormat { .. } => Diagnostic::error(self.to_string())
                .with_suggestion("Set `format.version = \"1.1\"` under [metadata]"),
        }
    }
}
