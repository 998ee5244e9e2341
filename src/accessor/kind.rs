//! Entry kinds an accessor can be typed over.

use crate::core::errors::{CatalogError, Section};
use crate::core::library::Library;
use crate::core::plugin::Plugin;
use crate::core::Catalog;

/// A catalog section together with the descriptor its leaf lookups return.
pub trait EntryKind {
    /// What a leaf lookup returns.
    type Output<'a>;

    /// The section this kind reads from.
    const SECTION: Section;

    /// Whether accessing this kind from a `plugins {}` block is deprecated.
    const DEPRECATED_IN_PLUGINS_BLOCK: bool;

    /// Look up one key of this section.
    fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<Self::Output<'a>, CatalogError>;
}

/// `[libraries]`: leaf lookups return the library descriptor.
#[derive(Debug, Clone, Copy)]
pub struct LibraryKind;

impl EntryKind for LibraryKind {
    type Output<'a> = &'a Library;
    const SECTION: Section = Section::Library;
    const DEPRECATED_IN_PLUGINS_BLOCK: bool = true;

    fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a Library, CatalogError> {
        catalog.lookup_dependency(key)
    }
}

/// `[versions]`: leaf lookups return the single version string (or `""`).
#[derive(Debug, Clone, Copy)]
pub struct VersionKind;

impl EntryKind for VersionKind {
    type Output<'a> = String;
    const SECTION: Section = Section::Version;
    const DEPRECATED_IN_PLUGINS_BLOCK: bool = false;

    fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<String, CatalogError> {
        catalog.lookup_version(key)
    }
}

/// `[bundles]`: leaf lookups return the member libraries in order.
#[derive(Debug, Clone, Copy)]
pub struct BundleKind;

impl EntryKind for BundleKind {
    type Output<'a> = Vec<&'a Library>;
    const SECTION: Section = Section::Bundle;
    const DEPRECATED_IN_PLUGINS_BLOCK: bool = true;

    fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<Vec<&'a Library>, CatalogError> {
        catalog.lookup_bundle(key)
    }
}

/// `[plugins]`: leaf lookups return the plugin descriptor.
#[derive(Debug, Clone, Copy)]
pub struct PluginKind;

impl EntryKind for PluginKind {
    type Output<'a> = &'a Plugin;
    const SECTION: Section = Section::Plugin;
    const DEPRECATED_IN_PLUGINS_BLOCK: bool = false;

    fn lookup<'a>(catalog: &'a Catalog, key: &str) -> Result<&'a Plugin, CatalogError> {
        catalog.lookup_plugin(key)
    }
}
