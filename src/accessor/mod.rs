//! Nested accessors over a catalog.
//!
//! An [`Accessor`] is a view of one namespace prefix of one catalog section.
//! Descending with [`Accessor::group`] appends a segment; [`Accessor::get`]
//! looks up the entry one segment below. The path walked through accessors
//! always reconstructs the dotted key, so
//!
//! ```rust,ignore
//! catalog.libraries().group("spring")?.group("boot")?.group("starter")?.get("web")?
//! ```
//!
//! returns exactly what `catalog.lookup_dependency("spring.boot.starter.web")`
//! returns.

pub mod deprecation;
pub mod kind;

use std::collections::BTreeMap;
use std::marker::PhantomData;

use serde::Serialize;

use crate::core::alias::{join, normalize};
use crate::core::errors::CatalogError;
use crate::core::Catalog;

pub use deprecation::Advisory;
pub use kind::{BundleKind, EntryKind, LibraryKind, PluginKind, VersionKind};

/// Where accessors are being used from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Scope {
    /// Regular build script code.
    #[default]
    Standard,
    /// The `plugins {}` block, where libraries and bundles are deprecated.
    PluginsBlock,
}

/// A stateless view of one namespace prefix.
#[derive(Debug)]
pub struct Accessor<'a, K> {
    catalog: &'a Catalog,
    prefix: String,
    scope: Scope,
    kind: PhantomData<K>,
}

impl<K> Clone for Accessor<'_, K> {
    fn clone(&self) -> Self {
        Accessor {
            catalog: self.catalog,
            prefix: self.prefix.clone(),
            scope: self.scope,
            kind: PhantomData,
        }
    }
}

/// One segment directly below an accessor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Child {
    pub segment: String,
    /// An entry lives exactly at this path.
    pub leaf: bool,
    /// Further entries live below this path.
    pub group: bool,
}

impl<'a, K: EntryKind> Accessor<'a, K> {
    pub(crate) fn root(catalog: &'a Catalog, scope: Scope) -> Self {
        Accessor {
            catalog,
            prefix: String::new(),
            scope,
            kind: PhantomData,
        }
    }

    /// The dotted path of this node (empty at the root).
    pub fn path(&self) -> &str {
        &self.prefix
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    /// Descend into the group at `segment`.
    ///
    /// Fails with KeyNotFound when no entry lives below the new path.
    pub fn group(&self, segment: &str) -> Result<Accessor<'a, K>, CatalogError> {
        let path = self.child_path(segment)?;
        self.advise(&path);

        let exists = self
            .catalog
            .aliases(K::SECTION)
            .into_iter()
            .any(|alias| alias.is_under(&path));
        if !exists {
            return Err(self.catalog.not_found(K::SECTION, &path));
        }

        Ok(Accessor {
            catalog: self.catalog,
            prefix: path,
            scope: self.scope,
            kind: PhantomData,
        })
    }

    /// Look up the entry at `segment` below this node.
    pub fn get(&self, segment: &str) -> Result<K::Output<'a>, CatalogError> {
        let key = self.child_path(segment)?;
        self.advise(&key);
        K::lookup(self.catalog, &key)
    }

    /// Look up the entry whose key is this node's own path.
    ///
    /// Used when a key is both an entry and a group, e.g. version
    /// `spring.boot` next to `spring.boot.gradle`.
    pub fn as_provider(&self) -> Result<K::Output<'a>, CatalogError> {
        if self.prefix.is_empty() {
            return Err(self.catalog.not_found(K::SECTION, ""));
        }
        self.advise(&self.prefix);
        K::lookup(self.catalog, &self.prefix)
    }

    /// Walk a dotted key one segment at a time and look up its entry.
    pub fn resolve(&self, dotted: &str) -> Result<K::Output<'a>, CatalogError> {
        let normalized = normalize(dotted);
        let mut segments: Vec<&str> = normalized.split('.').collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err(self.catalog.not_found(K::SECTION, dotted));
        }
        let Some(last) = segments.pop() else {
            return Err(self.catalog.not_found(K::SECTION, dotted));
        };

        let mut node = self.clone();
        for segment in segments {
            node = node.group(segment)?;
        }
        node.get(last)
    }

    /// The segments directly below this node, sorted.
    pub fn children(&self) -> Vec<Child> {
        let mut children: BTreeMap<&str, Child> = BTreeMap::new();

        for alias in self.catalog.aliases(K::SECTION) {
            let Some(segment) = alias.child_segment(&self.prefix) else {
                continue;
            };
            let child = children.entry(segment).or_insert_with(|| Child {
                segment: segment.to_string(),
                leaf: false,
                group: false,
            });
            if alias.as_str() == join(&self.prefix, segment) {
                child.leaf = true;
            } else {
                child.group = true;
            }
        }

        children.into_values().collect()
    }

    /// The path of `segment` below this node; empty segments name nothing.
    fn child_path(&self, segment: &str) -> Result<String, CatalogError> {
        let segment = normalize(segment);
        if segment.split('.').any(str::is_empty) {
            return Err(self
                .catalog
                .not_found(K::SECTION, &join(&self.prefix, &segment)));
        }
        Ok(join(&self.prefix, &segment))
    }

    fn advise(&self, key: &str) {
        if self.scope == Scope::PluginsBlock && K::DEPRECATED_IN_PLUGINS_BLOCK {
            Advisory::plugins_block(K::SECTION, key).emit();
        }
    }
}

/// Accessor roots for catalog use inside a `plugins {}` block.
#[derive(Debug, Clone, Copy)]
pub struct PluginsBlock<'a> {
    catalog: &'a Catalog,
}

impl<'a> PluginsBlock<'a> {
    /// Deprecated: every access emits an advisory before proceeding.
    pub fn libraries(&self) -> Accessor<'a, LibraryKind> {
        Accessor::root(self.catalog, Scope::PluginsBlock)
    }

    /// Deprecated: every access emits an advisory before proceeding.
    pub fn bundles(&self) -> Accessor<'a, BundleKind> {
        Accessor::root(self.catalog, Scope::PluginsBlock)
    }

    pub fn versions(&self) -> Accessor<'a, VersionKind> {
        Accessor::root(self.catalog, Scope::PluginsBlock)
    }

    pub fn plugins(&self) -> Accessor<'a, PluginKind> {
        Accessor::root(self.catalog, Scope::PluginsBlock)
    }
}

impl Catalog {
    /// Root accessor over `[libraries]`.
    pub fn libraries(&self) -> Accessor<'_, LibraryKind> {
        Accessor::root(self, Scope::Standard)
    }

    /// Root accessor over `[versions]`.
    pub fn versions(&self) -> Accessor<'_, VersionKind> {
        Accessor::root(self, Scope::Standard)
    }

    /// Root accessor over `[bundles]`.
    pub fn bundles(&self) -> Accessor<'_, BundleKind> {
        Accessor::root(self, Scope::Standard)
    }

    /// Root accessor over `[plugins]`.
    pub fn plugins(&self) -> Accessor<'_, PluginKind> {
        Accessor::root(self, Scope::Standard)
    }

    /// Accessors as seen from a `plugins {}` block.
    pub fn plugins_block(&self) -> PluginsBlock<'_> {
        PluginsBlock { catalog: self }
    }
}
