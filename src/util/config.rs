//! Configuration file support for vercat.
//!
//! Two configuration file locations are read:
//! - Global: `<config dir>/vercat/config.toml` - User-wide defaults
//! - Project: `.vercat/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::core::document::DEFAULT_CATALOG_NAME;

/// Directory searched for catalog documents when none is configured.
pub const DEFAULT_CATALOG_DIR: &str = "gradle";

/// Project-local configuration directory.
pub const PROJECT_CONFIG_DIR: &str = ".vercat";

static PROJECT_DIRS: LazyLock<Option<ProjectDirs>> =
    LazyLock::new(|| ProjectDirs::from("dev", "vercat", "vercat"));

/// vercat configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog discovery settings
    pub catalog: CatalogConfig,

    /// Output settings
    pub output: OutputConfig,
}

/// Where catalogs live and which one is used by default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct CatalogConfig {
    /// Directory (relative to the project root) holding `*.versions.toml`
    pub dir: Option<PathBuf>,

    /// Catalog used when `--name` is not given
    pub default_name: Option<String>,
}

/// Terminal output settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Force colored output on or off (None = detect)
    pub color: Option<bool>,
}

impl Config {
    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse config file: {}", path.display()))
    }

    /// Load configuration with fallback to defaults if file doesn't exist.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
                Self::default()
            })
        } else {
            Self::default()
        }
    }

    /// Merge another config into this one (other takes precedence).
    pub fn merge(&mut self, other: Config) {
        if other.catalog.dir.is_some() {
            self.catalog.dir = other.catalog.dir;
        }
        if other.catalog.default_name.is_some() {
            self.catalog.default_name = other.catalog.default_name;
        }
        if other.output.color.is_some() {
            self.output.color = other.output.color;
        }
    }

    /// Catalog directory name, relative to the project root.
    pub fn catalog_dir(&self) -> &Path {
        self.catalog
            .dir
            .as_deref()
            .unwrap_or(Path::new(DEFAULT_CATALOG_DIR))
    }

    /// Name of the catalog used when none is requested.
    pub fn default_catalog_name(&self) -> &str {
        self.catalog
            .default_name
            .as_deref()
            .unwrap_or(DEFAULT_CATALOG_NAME)
    }
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Project config (.vercat/config.toml)
/// 2. Global config
/// 3. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge(Config::load_or_default(global));
    }

    config.merge(Config::load_or_default(project_path));

    config
}

/// Get the global config path.
pub fn global_config_path() -> Option<PathBuf> {
    PROJECT_DIRS
        .as_ref()
        .map(|dirs| dirs.config_dir().join("config.toml"))
}

/// Get the project config path (.vercat/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(PROJECT_CONFIG_DIR).join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.catalog_dir(), Path::new("gradle"));
        assert_eq!(config.default_catalog_name(), "libs");
        assert_eq!(config.output.color, None);
    }

    #[test]
    fn test_project_overrides_global() {
        let tmp = TempDir::new().unwrap();
        let global = tmp.path().join("global.toml");
        std::fs::write(
            &global,
            "[catalog]\ndir = \"deps\"\ndefault-name = \"tools\"\n\n[output]\ncolor = false\n",
        )
        .unwrap();

        let project = project_config_path(tmp.path());
        std::fs::create_dir_all(project.parent().unwrap()).unwrap();
        std::fs::write(&project, "[catalog]\ndefault-name = \"libs\"\n").unwrap();

        let config = load_config(Some(&global), &project);
        assert_eq!(config.catalog_dir(), Path::new("deps"));
        assert_eq!(config.default_catalog_name(), "libs");
        assert_eq!(config.output.color, Some(false));
    }

    #[test]
    fn test_broken_config_falls_back_to_defaults() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[catalog\n").unwrap();

        let config = Config::load_or_default(&path);
        assert_eq!(config.default_catalog_name(), "libs");
    }
}
