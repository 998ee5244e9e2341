//! Locating catalog documents on disk.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use crate::core::document::{catalog_name, CATALOG_SUFFIX};
use crate::core::Catalog;
use crate::util::diagnostic::suggestions;
use crate::util::Config;

/// A catalog document found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogFile {
    /// Catalog name (`libs` for `libs.versions.toml`)
    pub name: String,
    pub path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        CatalogFile {
            name: catalog_name(&path),
            path,
        }
    }

    pub fn load(&self) -> Result<Catalog> {
        Catalog::load(&self.path)
    }
}

/// Find the catalog directory by searching `start` and its ancestors.
///
/// An absolute `dir` is returned as-is if it exists.
pub fn find_catalog_dir(start: &Path, dir: &Path) -> Option<PathBuf> {
    if dir.is_absolute() {
        return dir.is_dir().then(|| dir.to_path_buf());
    }

    start
        .ancestors()
        .map(|ancestor| ancestor.join(dir))
        .find(|candidate| candidate.is_dir())
}

/// List every `*.versions.toml` in `dir`, sorted by name.
pub fn discover_catalogs(dir: &Path) -> Result<Vec<CatalogFile>> {
    let pattern = format!(
        "{}/*{}",
        glob::Pattern::escape(&dir.to_string_lossy()),
        CATALOG_SUFFIX
    );

    let mut files = Vec::new();
    for entry in glob::glob(&pattern).with_context(|| format!("invalid glob: {}", pattern))? {
        let path = entry.with_context(|| format!("failed to read {}", dir.display()))?;
        if path.is_file() {
            files.push(CatalogFile::new(path));
        }
    }
    files.sort_by(|a, b| a.name.cmp(&b.name));

    tracing::debug!("found {} catalog(s) in {}", files.len(), dir.display());
    Ok(files)
}

/// Find all catalogs visible from `start` under the configured directory.
pub fn discover_from(start: &Path, config: &Config) -> Result<Vec<CatalogFile>> {
    let Some(dir) = find_catalog_dir(start, config.catalog_dir()) else {
        bail!(
            "could not find `{}` in {} or any parent directory\nhelp: {}",
            config.catalog_dir().display(),
            start.display(),
            suggestions::NO_CATALOG
        );
    };
    discover_catalogs(&dir)
}

/// Pick the catalog called `name` (or the configured default) among the discovered ones.
pub fn select_catalog(files: &[CatalogFile], name: Option<&str>, config: &Config) -> Result<CatalogFile> {
    let wanted = name.unwrap_or_else(|| config.default_catalog_name());

    if let Some(file) = files.iter().find(|f| f.name == wanted) {
        return Ok(file.clone());
    }

    let available: Vec<&str> = files.iter().map(|f| f.name.as_str()).collect();
    if available.is_empty() {
        bail!(
            "no catalogs found (looked for *{})\nhelp: {}",
            CATALOG_SUFFIX,
            suggestions::NO_CATALOG
        );
    }
    bail!(
        "catalog `{}` not found; available: {}",
        wanted,
        available.join(", ")
    )
}
