//! `<name>.versions.toml` catalog documents.
//!
//! The document has four optional tables (`[versions]`, `[libraries]`,
//! `[bundles]`, `[plugins]`) plus an optional `[metadata]` table carrying the
//! format version. Entries are deserialized into raw shapes here and handed to
//! [`CatalogBuilder`] for validation.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::core::catalog::{Catalog, CatalogBuilder, LibraryDecl, PluginDecl};
use crate::core::errors::{CatalogError, Section};
use crate::core::library::ModuleId;
use crate::core::version::{RichVersion, VersionSpec};

/// File suffix shared by every catalog document.
pub const CATALOG_SUFFIX: &str = ".versions.toml";

/// Catalog name used when none is configured.
pub const DEFAULT_CATALOG_NAME: &str = "libs";

/// Format versions this crate understands.
const SUPPORTED_FORMATS: &[&str] = &["1.0", "1.1"];

/// Raw document as deserialized from TOML.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCatalog {
    #[serde(default)]
    metadata: Option<RawMetadata>,

    #[serde(default)]
    versions: BTreeMap<String, RawVersion>,

    #[serde(default)]
    libraries: BTreeMap<String, RawLibrary>,

    #[serde(default)]
    bundles: BTreeMap<String, Vec<String>>,

    #[serde(default)]
    plugins: BTreeMap<String, RawPlugin>,
}

#[derive(Debug, Default, Deserialize)]
struct RawMetadata {
    #[serde(default)]
    format: Option<RawFormat>,
}

#[derive(Debug, Deserialize)]
struct RawFormat {
    version: String,
}

/// A `[versions]` entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVersion {
    Simple(String),
    Rich(RawRichVersion),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
struct RawRichVersion {
    require: Option<String>,
    strictly: Option<String>,
    prefer: Option<String>,
    reject: Vec<String>,
    reject_all: bool,
}

/// The `version` key of a library or plugin table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawVersionDecl {
    Simple(String),
    Reference(RawVersionRef),
    Rich(RawRichVersion),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawVersionRef {
    #[serde(rename = "ref")]
    version_ref: String,
}

/// A `[libraries]` entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawLibrary {
    /// `group:name` or `group:name:version`
    Notation(String),
    Detailed(RawLibraryTable),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawLibraryTable {
    #[serde(default)]
    module: Option<String>,

    #[serde(default)]
    group: Option<String>,

    #[serde(default)]
    name: Option<String>,

    #[serde(default)]
    version: Option<RawVersionDecl>,
}

/// A `[plugins]` entry.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawPlugin {
    /// `id:version`
    Notation(String),
    Detailed(RawPluginTable),
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPluginTable {
    id: String,

    #[serde(default)]
    version: Option<RawVersionDecl>,
}

impl Catalog {
    /// Load a catalog document from a file path; the name comes from the file name.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog: {}", path.display()))?;

        let name = catalog_name(path);
        tracing::debug!("loading catalog `{}` from {}", name, path.display());

        Self::parse(&content, &name)
            .with_context(|| format!("invalid catalog: {}", path.display()))
    }

    /// Parse catalog document content.
    pub fn parse(content: &str, name: &str) -> Result<Self> {
        let raw: RawCatalog = toml::from_str(content)
            .with_context(|| format!("failed to parse {}{}", name, CATALOG_SUFFIX))?;

        Ok(convert(raw, name)?)
    }
}

/// Derive the catalog name from a document path (`gradle/libs.versions.toml` -> `libs`).
pub fn catalog_name(path: &Path) -> String {
    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    match file_name.strip_suffix(CATALOG_SUFFIX) {
        Some(stem) if !stem.is_empty() => stem.to_string(),
        _ => path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_CATALOG_NAME.to_string()),
    }
}

fn convert(raw: RawCatalog, name: &str) -> Result<Catalog, CatalogError> {
    if let Some(format) = raw.metadata.and_then(|m| m.format) {
        if !SUPPORTED_FORMATS.contains(&format.version.as_str()) {
            return Err(CatalogError::UnsupportedFormat {
                found: format.version,
            });
        }
    }

    let mut builder = CatalogBuilder::new(name);

    for (alias, version) in raw.versions {
        let version = match version {
            RawVersion::Simple(s) => parse_version_string(Section::Version, &alias, &s)?,
            RawVersion::Rich(rich) => convert_rich(Section::Version, &alias, rich)?,
        };
        builder = builder.version(alias, version);
    }

    for (alias, library) in raw.libraries {
        let decl = convert_library(&alias, library)?;
        builder = builder.library(alias, decl);
    }

    for (alias, members) in raw.bundles {
        builder = builder.bundle(alias, members);
    }

    for (alias, plugin) in raw.plugins {
        let decl = convert_plugin(&alias, plugin)?;
        builder = builder.plugin(alias, decl);
    }

    builder.build()
}

fn convert_library(alias: &str, raw: RawLibrary) -> Result<LibraryDecl, CatalogError> {
    let invalid = |reason: &str| CatalogError::InvalidNotation {
        section: Section::Library,
        alias: alias.to_string(),
        reason: reason.to_string(),
    };

    match raw {
        RawLibrary::Notation(notation) => {
            let parts: Vec<&str> = notation.split(':').collect();
            let (module, version) = match parts.as_slice() {
                [group, name] => (ModuleId::parse(&format!("{group}:{name}")), None),
                [group, name, version] => {
                    (ModuleId::parse(&format!("{group}:{name}")), Some(*version))
                }
                _ => (None, None),
            };
            let module =
                module.ok_or_else(|| invalid(&format!("`{}` is not `group:name[:version]`", notation)))?;
            let version = match version {
                Some(v) => VersionSpec::Inline(parse_version_string(Section::Library, alias, v)?),
                None => VersionSpec::Unspecified,
            };
            Ok(LibraryDecl::new(module, version))
        }
        RawLibrary::Detailed(table) => {
            let module = match (table.module, table.group, table.name) {
                (Some(module), None, None) => ModuleId::parse(&module)
                    .ok_or_else(|| invalid(&format!("`{}` is not `group:name`", module)))?,
                (None, Some(group), Some(name)) if !group.is_empty() && !name.is_empty() => {
                    ModuleId::new(group, name)
                }
                (Some(_), _, _) => {
                    return Err(invalid("`module` cannot be combined with `group` or `name`"))
                }
                _ => return Err(invalid("expected `module`, or both `group` and `name`")),
            };
            let version = convert_version_decl(Section::Library, alias, table.version)?;
            Ok(LibraryDecl::new(module, version))
        }
    }
}

fn convert_plugin(alias: &str, raw: RawPlugin) -> Result<PluginDecl, CatalogError> {
    match raw {
        RawPlugin::Notation(notation) => match notation.split_once(':') {
            Some((id, version)) if !id.is_empty() && !version.contains(':') => {
                let version = parse_version_string(Section::Plugin, alias, version)?;
                Ok(PluginDecl::new(id, VersionSpec::Inline(version)))
            }
            _ => Err(CatalogError::InvalidNotation {
                section: Section::Plugin,
                alias: alias.to_string(),
                reason: format!("`{}` is not `id:version`", notation),
            }),
        },
        RawPlugin::Detailed(table) => {
            let version = convert_version_decl(Section::Plugin, alias, table.version)?;
            Ok(PluginDecl::new(table.id, version))
        }
    }
}

fn convert_version_decl(
    section: Section,
    alias: &str,
    raw: Option<RawVersionDecl>,
) -> Result<VersionSpec, CatalogError> {
    Ok(match raw {
        None => VersionSpec::Unspecified,
        Some(RawVersionDecl::Simple(s)) => {
            VersionSpec::Inline(parse_version_string(section, alias, &s)?)
        }
        Some(RawVersionDecl::Reference(r)) => VersionSpec::Ref(r.version_ref),
        Some(RawVersionDecl::Rich(rich)) => VersionSpec::Inline(convert_rich(section, alias, rich)?),
    })
}

fn parse_version_string(
    section: Section,
    alias: &str,
    notation: &str,
) -> Result<RichVersion, CatalogError> {
    if notation.trim().is_empty() || notation.starts_with("!!") {
        return Err(CatalogError::InvalidNotation {
            section,
            alias: alias.to_string(),
            reason: format!("`{}` is not a version", notation),
        });
    }
    Ok(RichVersion::parse(notation))
}

fn convert_rich(
    section: Section,
    alias: &str,
    raw: RawRichVersion,
) -> Result<RichVersion, CatalogError> {
    let version = RichVersion {
        require: raw.require,
        strictly: raw.strictly,
        prefer: raw.prefer,
        reject: raw.reject,
        reject_all: raw.reject_all,
    };
    if version.is_empty() {
        return Err(CatalogError::InvalidNotation {
            section,
            alias: alias.to_string(),
            reason: "version table declares no constraint".to_string(),
        });
    }
    Ok(version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::alias::Alias;
    use crate::test_support::LIBS_VERSIONS_TOML;
    use tempfile::TempDir;

    #[test]
    fn test_parse_fixture_document() {
        let catalog = Catalog::parse(LIBS_VERSIONS_TOML, "libs").unwrap();
        assert_eq!(catalog.name(), "libs");

        let assertj = catalog.lookup_dependency("assertj").unwrap();
        assert_eq!(assertj.coordinates(), "org.assertj:assertj-core:3.24.2");

        let h2 = catalog.lookup_dependency("h2").unwrap();
        assert_eq!(h2.coordinates(), "com.h2database:h2:2.2.224");

        let jackson = catalog.lookup_dependency("jackson.kotlin").unwrap();
        assert!(jackson.version().is_empty());

        let ktlint = catalog.lookup_plugin("ktlint").unwrap();
        assert_eq!(ktlint.id(), "org.jlleitschuh.gradle.ktlint");
        assert_eq!(ktlint.version().single_version(), "12.0.3");
    }

    #[test]
    fn test_parse_rich_versions() {
        let content = r#"
[versions]
spring-boot = { strictly = "[3.1,3.3)", prefer = "3.2.0" }
legacy = "1.0!!1.2"
guava = { require = "32.0", reject = ["32.0.0-android"] }

[libraries]
guava = { module = "com.google.guava:guava", version = { require = "32.1", rejectAll = true } }
"#;
        let catalog = Catalog::parse(content, "libs").unwrap();

        let boot = catalog.lookup_rich_version("spring.boot").unwrap();
        assert_eq!(boot.strictly.as_deref(), Some("[3.1,3.3)"));
        assert_eq!(boot.prefer.as_deref(), Some("3.2.0"));
        assert_eq!(catalog.lookup_version("spring.boot").unwrap(), "");

        let legacy = catalog.lookup_rich_version("legacy").unwrap();
        assert_eq!(legacy, &RichVersion::strictly("1.0").with_prefer("1.2"));

        assert_eq!(catalog.lookup_version("guava").unwrap(), "");

        let guava = catalog.lookup_dependency("guava").unwrap();
        assert!(guava.version().reject_all);
        assert_eq!(guava.coordinates(), "com.google.guava:guava");
    }

    #[test]
    fn test_group_and_name_form() {
        let content = r#"
[libraries]
mysql-connector = { group = "com.mysql", name = "mysql-connector-j", version = "8.2.0" }
"#;
        let catalog = Catalog::parse(content, "libs").unwrap();
        let lib = catalog.lookup_dependency("mysql.connector").unwrap();
        assert_eq!(lib.module().group(), "com.mysql");
        assert_eq!(lib.module().name(), "mysql-connector-j");
        assert_eq!(lib.alias(), &Alias::parse("mysql.connector").unwrap());
    }

    #[test]
    fn test_rejects_unknown_table() {
        let content = r#"
[dependencies]
foo = "1.0"
"#;
        let err = Catalog::parse(content, "libs").unwrap_err();
        assert!(format!("{:#}", err).contains("failed to parse libs.versions.toml"));
    }

    #[test]
    fn test_rejects_bad_module_notation() {
        let content = r#"
[libraries]
broken = "com.example"
"#;
        let err = Catalog::parse(content, "libs").unwrap_err();
        let err = err.downcast_ref::<CatalogError>().unwrap();
        assert!(matches!(
            err,
            CatalogError::InvalidNotation { section: Section::Library, .. }
        ));
    }

    #[test]
    fn test_rejects_module_with_group() {
        let content = r#"
[libraries]
broken = { module = "com.example:broken", group = "com.example" }
"#;
        let err = Catalog::parse(content, "libs").unwrap_err();
        assert!(err.downcast_ref::<CatalogError>().is_some());
    }

    #[test]
    fn test_rejects_bad_plugin_notation() {
        let content = r#"
[plugins]
ktlint = "org.jlleitschuh.gradle.ktlint"
"#;
        let err = Catalog::parse(content, "libs").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CatalogError>(),
            Some(CatalogError::InvalidNotation { section: Section::Plugin, .. })
        ));
    }

    #[test]
    fn test_unsupported_format_version() {
        let content = r#"
[metadata]
format.version = "2.0"
"#;
        let err = Catalog::parse(content, "libs").unwrap_err();
        assert_eq!(
            err.downcast_ref::<CatalogError>(),
            Some(&CatalogError::UnsupportedFormat {
                found: "2.0".to_string()
            })
        );
    }

    #[test]
    fn test_load_uses_file_name() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("tools.versions.toml");
        std::fs::write(&path, "[versions]\nktlint = \"1.0.1\"\n").unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.name(), "tools");
        assert_eq!(catalog.lookup_version("ktlint").unwrap(), "1.0.1");
    }

    #[test]
    fn test_catalog_name() {
        assert_eq!(catalog_name(Path::new("gradle/libs.versions.toml")), "libs");
        assert_eq!(catalog_name(Path::new("deps.toml")), "deps");
    }
}
