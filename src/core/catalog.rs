//! The immutable catalog and its builder.
//!
//! A [`Catalog`] is built once from declarations (usually a
//! `<name>.versions.toml` document, see [`crate::core::document`]) and is
//! read-only afterwards. All four lookups go through a normalized [`Alias`],
//! so `spring-boot` and `spring.boot` find the same entry.

use std::collections::BTreeMap;

use crate::core::alias::{Alias, RESERVED_LIBRARY_PREFIXES};
use crate::core::errors::{CatalogError, Section};
use crate::core::library::{Bundle, Library, ModuleId};
use crate::core::plugin::Plugin;
use crate::core::version::{RichVersion, VersionSpec};
use crate::util::hash::Fingerprint;

/// Maximum number of nearby keys offered when a lookup fails.
const MAX_SUGGESTIONS: usize = 3;

/// An immutable dependency catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    name: String,
    versions: BTreeMap<Alias, RichVersion>,
    libraries: BTreeMap<Alias, Library>,
    bundles: BTreeMap<Alias, Bundle>,
    plugins: BTreeMap<Alias, Plugin>,
}

impl Catalog {
    /// The catalog name (`libs` for `libs.versions.toml`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up a library by key.
    pub fn lookup_dependency(&self, key: &str) -> Result<&Library, CatalogError> {
        self.find(&self.libraries, Section::Library, key)
    }

    /// Look up a version as a single string.
    ///
    /// Returns `""` when the version exists but is not expressible as one string.
    pub fn lookup_version(&self, key: &str) -> Result<String, CatalogError> {
        self.lookup_rich_version(key)
            .map(|version| version.single_version().to_string())
    }

    /// Look up the full version constraint.
    pub fn lookup_rich_version(&self, key: &str) -> Result<&RichVersion, CatalogError> {
        self.find(&self.versions, Section::Version, key)
    }

    /// Look up a bundle's libraries, in declaration order.
    pub fn lookup_bundle(&self, key: &str) -> Result<Vec<&Library>, CatalogError> {
        let bundle = self.find(&self.bundles, Section::Bundle, key)?;
        bundle
            .members()
            .iter()
            .map(|member| self.lookup_dependency(member.as_str()))
            .collect()
    }

    /// Look up a plugin by key.
    pub fn lookup_plugin(&self, key: &str) -> Result<&Plugin, CatalogError> {
        self.find(&self.plugins, Section::Plugin, key)
    }

    /// Look up the bundle declaration itself.
    pub fn bundle(&self, key: &str) -> Result<&Bundle, CatalogError> {
        self.find(&self.bundles, Section::Bundle, key)
    }

    /// Whether `key` names an entry of `section`.
    pub fn contains(&self, section: Section, key: &str) -> bool {
        let Ok(alias) = Alias::parse(key) else {
            return false;
        };
        match section {
            Section::Library => self.libraries.contains_key(&alias),
            Section::Version => self.versions.contains_key(&alias),
            Section::Bundle => self.bundles.contains_key(&alias),
            Section::Plugin => self.plugins.contains_key(&alias),
        }
    }

    /// All aliases of a section, sorted.
    pub fn aliases(&self, section: Section) -> Vec<&Alias> {
        match section {
            Section::Library => self.libraries.keys().collect(),
            Section::Version => self.versions.keys().collect(),
            Section::Bundle => self.bundles.keys().collect(),
            Section::Plugin => self.plugins.keys().collect(),
        }
    }

    pub fn version_entries(&self) -> impl Iterator<Item = (&Alias, &RichVersion)> {
        self.versions.iter()
    }

    pub fn library_entries(&self) -> impl Iterator<Item = &Library> {
        self.libraries.values()
    }

    pub fn bundle_entries(&self) -> impl Iterator<Item = &Bundle> {
        self.bundles.values()
    }

    pub fn plugin_entries(&self) -> impl Iterator<Item = &Plugin> {
        self.plugins.values()
    }

    /// Number of entries across all sections.
    pub fn len(&self) -> usize {
        self.versions.len() + self.libraries.len() + self.bundles.len() + self.plugins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Content fingerprint. Equal catalogs always share a fingerprint,
    /// regardless of how their aliases were spelled.
    pub fn fingerprint(&self) -> String {
        let mut fp = Fingerprint::new();
        fp.update_str(&self.name);

        for (alias, version) in &self.versions {
            fp.update_str("version").update_str(alias.as_str());
            update_version(&mut fp, version);
        }
        for library in self.libraries.values() {
            fp.update_str("library")
                .update_str(library.alias().as_str())
                .update_str(&library.module().to_string())
                .update_opt(library.version_ref().map(Alias::as_str));
            update_version(&mut fp, library.version());
        }
        for bundle in self.bundles.values() {
            fp.update_str("bundle")
                .update_str(bundle.alias().as_str())
                .update_strs(bundle.members().iter().map(Alias::as_str));
        }
        for plugin in self.plugins.values() {
            fp.update_str("plugin")
                .update_str(plugin.alias().as_str())
                .update_str(plugin.id())
                .update_opt(plugin.version_ref().map(Alias::as_str));
            update_version(&mut fp, plugin.version());
        }

        fp.finish()
    }

    fn find<'a, T>(
        &'a self,
        entries: &'a BTreeMap<Alias, T>,
        section: Section,
        key: &str,
    ) -> Result<&'a T, CatalogError> {
        Alias::parse(key)
            .ok()
            .and_then(|alias| entries.get(&alias))
            .ok_or_else(|| self.not_found(section, key))
    }

    /// Build the KeyNotFound error, with nearby keys of the same section.
    pub(crate) fn not_found(&self, section: Section, key: &str) -> CatalogError {
        let wanted = crate::core::alias::normalize(key);
        let mut nearby: Vec<((usize, usize), &Alias)> = self
            .aliases(section)
            .into_iter()
            .map(|alias| (alias.closeness(&wanted), alias))
            .filter(|((shared, _), _)| *shared > 0)
            .collect();
        nearby.sort_by(|a, b| b.0.cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        CatalogError::KeyNotFound {
            section,
            key: key.to_string(),
            catalog: self.name.clone(),
            suggestions: nearby
                .into_iter()
                .take(MAX_SUGGESTIONS)
                .map(|(_, alias)| alias.to_string())
                .collect(),
        }
    }
}

fn update_version(fp: &mut Fingerprint, version: &RichVersion) {
    fp.update_opt(version.require.as_deref())
        .update_opt(version.strictly.as_deref())
        .update_opt(version.prefer.as_deref())
        .update_strs(version.reject.iter().map(String::as_str))
        .update_bool(version.reject_all);
}

/// A library declaration before validation.
#[derive(Debug, Clone)]
pub struct LibraryDecl {
    pub module: ModuleId,
    pub version: VersionSpec,
}

impl LibraryDecl {
    pub fn new(module: ModuleId, version: VersionSpec) -> Self {
        LibraryDecl { module, version }
    }
}

/// A plugin declaration before validation.
#[derive(Debug, Clone)]
pub struct PluginDecl {
    pub id: String,
    pub version: VersionSpec,
}

impl PluginDecl {
    pub fn new(id: impl Into<String>, version: VersionSpec) -> Self {
        PluginDecl {
            id: id.into(),
            version,
        }
    }
}

/// Collects raw declarations and validates them into a [`Catalog`].
///
/// Declarations keep their raw aliases until [`CatalogBuilder::build`], which
/// normalizes them, rejects duplicates and resolves version references.
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    name: String,
    versions: Vec<(String, RichVersion)>,
    libraries: Vec<(String, LibraryDecl)>,
    bundles: Vec<(String, Vec<String>)>,
    plugins: Vec<(String, PluginDecl)>,
}

impl CatalogBuilder {
    /// Start a catalog with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        CatalogBuilder {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Declare a version.
    pub fn version(mut self, alias: impl Into<String>, version: RichVersion) -> Self {
        self.versions.push((alias.into(), version));
        self
    }

    /// Declare a library.
    pub fn library(mut self, alias: impl Into<String>, decl: LibraryDecl) -> Self {
        self.libraries.push((alias.into(), decl));
        self
    }

    /// Declare a bundle of library aliases.
    pub fn bundle<I, S>(mut self, alias: impl Into<String>, members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.bundles
            .push((alias.into(), members.into_iter().map(Into::into).collect()));
        self
    }

    /// Declare a plugin.
    pub fn plugin(mut self, alias: impl Into<String>, decl: PluginDecl) -> Self {
        self.plugins.push((alias.into(), decl));
        self
    }

    /// Validate every declaration and freeze the catalog.
    pub fn build(self) -> Result<Catalog, CatalogError> {
        let mut versions = BTreeMap::new();
        let mut seen = BTreeMap::new();
        for (raw, version) in self.versions {
            let alias = unique_alias(&mut seen, Section::Version, &raw)?;
            versions.insert(alias, version);
        }

        let mut libraries = BTreeMap::new();
        let mut seen = BTreeMap::new();
        for (raw, decl) in self.libraries {
            let alias = unique_alias(&mut seen, Section::Library, &raw)?;
            if RESERVED_LIBRARY_PREFIXES.contains(&alias.first_segment()) {
                return Err(CatalogError::InvalidAlias {
                    alias: raw,
                    reason: format!(
                        "library aliases cannot start with `{}`",
                        alias.first_segment()
                    ),
                });
            }
            let (version_ref, version) =
                resolve_version(&versions, Section::Library, &alias, decl.version)?;
            let library = Library::new(alias.clone(), decl.module, version_ref, version);
            libraries.insert(alias, library);
        }

        let mut bundles = BTreeMap::new();
        let mut seen = BTreeMap::new();
        for (raw, members) in self.bundles {
            let alias = unique_alias(&mut seen, Section::Bundle, &raw)?;
            let members = members
                .into_iter()
                .map(|member| {
                    Alias::parse(&member)
                        .ok()
                        .filter(|m| libraries.contains_key(m))
                        .ok_or_else(|| CatalogError::UnknownBundleMember {
                            bundle: alias.to_string(),
                            member,
                        })
                })
                .collect::<Result<Vec<_>, _>>()?;
            bundles.insert(alias.clone(), Bundle::new(alias, members));
        }

        let mut plugins = BTreeMap::new();
        let mut seen = BTreeMap::new();
        for (raw, decl) in self.plugins {
            let alias = unique_alias(&mut seen, Section::Plugin, &raw)?;
            if decl.id.is_empty() {
                return Err(CatalogError::InvalidNotation {
                    section: Section::Plugin,
                    alias: raw,
                    reason: "plugin id is empty".to_string(),
                });
            }
            let (version_ref, version) =
                resolve_version(&versions, Section::Plugin, &alias, decl.version)?;
            let plugin = Plugin::new(alias.clone(), decl.id, version_ref, version);
            plugins.insert(alias, plugin);
        }

        tracing::debug!(
            "built catalog `{}`: {} versions, {} libraries, {} bundles, {} plugins",
            self.name,
            versions.len(),
            libraries.len(),
            bundles.len(),
            plugins.len()
        );

        Ok(Catalog {
            name: self.name,
            versions,
            libraries,
            bundles,
            plugins,
        })
    }
}

/// Parse `raw`, failing if another raw alias of the section already normalized to it.
fn unique_alias(
    seen: &mut BTreeMap<Alias, String>,
    section: Section,
    raw: &str,
) -> Result<Alias, CatalogError> {
    let alias = Alias::parse(raw)?;
    if let Some(first) = seen.get(&alias) {
        return Err(CatalogError::DuplicateAlias {
            section,
            alias: alias.to_string(),
            first: first.clone(),
            second: raw.to_string(),
        });
    }
    seen.insert(alias.clone(), raw.to_string());
    Ok(alias)
}

fn resolve_version(
    versions: &BTreeMap<Alias, RichVersion>,
    section: Section,
    alias: &Alias,
    spec: VersionSpec,
) -> Result<(Option<Alias>, RichVersion), CatalogError> {
    match spec {
        VersionSpec::Unspecified => Ok((None, RichVersion::default())),
        VersionSpec::Inline(version) => Ok((None, version)),
        VersionSpec::Ref(raw) => {
            let undefined = || CatalogError::UndefinedVersionRef {
                section,
                alias: alias.to_string(),
                version_ref: raw.clone(),
            };
            let target = Alias::parse(&raw).map_err(|_| undefined())?;
            let version = versions.get(&target).cloned().ok_or_else(undefined)?;
            Ok((Some(target), version))
        }
    }
}
