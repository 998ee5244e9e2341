//! Command implementations

pub mod check;
pub mod completions;
pub mod get;
pub mod list;
pub mod tree;

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};

use vercat::ops::discover::{discover_from, find_catalog_dir, select_catalog, CatalogFile};
use vercat::util::config::{global_config_path, load_config, project_config_path, PROJECT_CONFIG_DIR};
use vercat::util::Config;
use vercat::Catalog;

use crate::cli::Cli;

/// State shared by every command: working directory, merged config and
/// catalog selection flags.
pub struct Context {
    cwd: PathBuf,
    config: Config,
    catalog: Option<PathBuf>,
    name: Option<String>,
    color: bool,
}

impl Context {
    pub fn new(cli: &Cli) -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to determine current directory")?;

        let project_root = find_catalog_dir(&cwd, Path::new(PROJECT_CONFIG_DIR))
            .and_then(|dir| dir.parent().map(Path::to_path_buf))
            .unwrap_or_else(|| cwd.clone());
        let config = load_config(
            global_config_path().as_deref(),
            &project_config_path(&project_root),
        );

        let color = use_color(cli.no_color, config.output.color, || {
            std::io::stderr().is_terminal()
        });

        Ok(Context {
            cwd,
            config,
            catalog: cli.catalog.clone(),
            name: cli.name.clone(),
            color,
        })
    }

    /// Whether diagnostics on stderr are coloured.
    pub fn color(&self) -> bool {
        self.color
    }

    /// The catalog files a command should look at.
    pub fn catalog_files(&self) -> Result<Vec<CatalogFile>> {
        match self.catalog {
            Some(ref path) => Ok(vec![CatalogFile::new(self.cwd.join(path))]),
            None => discover_from(&self.cwd, &self.config),
        }
    }

    /// Load the selected catalog.
    pub fn load_catalog(&self) -> Result<Catalog> {
        let file = match self.catalog {
            Some(ref path) => CatalogFile::new(self.cwd.join(path)),
            None => {
                let files = discover_from(&self.cwd, &self.config)?;
                select_catalog(&files, self.name.as_deref(), &self.config)?
            }
        };

        tracing::debug!("using catalog `{}` at {}", file.name, file.path.display());
        file.load()
    }
}

/// `--no-color` wins, then `[output] color`, then terminal detection.
fn use_color(no_color: bool, configured: Option<bool>, terminal: impl FnOnce() -> bool) -> bool {
    !no_color && configured.unwrap_or_else(terminal)
}
