//! Validating catalog documents.

use std::path::PathBuf;

use serde::Serialize;

use crate::core::{Catalog, Section};
use crate::ops::discover::CatalogFile;

/// Entry counts and fingerprint of a valid catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogSummary {
    pub fingerprint: String,
    pub versions: usize,
    pub libraries: usize,
    pub bundles: usize,
    pub plugins: usize,
}

impl CatalogSummary {
    pub fn of(catalog: &Catalog) -> Self {
        CatalogSummary {
            fingerprint: catalog.fingerprint(),
            versions: catalog.aliases(Section::Version).len(),
            libraries: catalog.aliases(Section::Library).len(),
            bundles: catalog.aliases(Section::Bundle).len(),
            plugins: catalog.aliases(Section::Plugin).len(),
        }
    }

    /// The first 16 hex digits of the fingerprint.
    pub fn short_fingerprint(&self) -> &str {
        self.fingerprint.get(..16).unwrap_or(&self.fingerprint)
    }

    pub fn is_empty(&self) -> bool {
        self.versions + self.libraries + self.bundles + self.plugins == 0
    }
}

/// Outcome of checking one catalog file.
#[derive(Debug, Clone, Serialize)]
pub struct CheckReport {
    pub name: String,
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: CheckOutcome,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum CheckOutcome {
    Valid(CatalogSummary),
    Invalid { error: String },
}

impl CheckReport {
    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, CheckOutcome::Valid(_))
    }
}

/// Load every file and report whether it is a valid catalog.
pub fn check_catalogs(files: &[CatalogFile]) -> Vec<CheckReport> {
    files
        .iter()
        .map(|file| {
            let outcome = match file.load() {
                Ok(catalog) => CheckOutcome::Valid(CatalogSummary::of(&catalog)),
                Err(e) => {
                    tracing::debug!("catalog `{}` is invalid: {:#}", file.name, e);
                    CheckOutcome::Invalid {
                        error: format!("{:#}", e),
                    }
                }
            };
            CheckReport {
                name: file.name.clone(),
                path: file.path.clone(),
                outcome,
            }
        })
        .collect()
}
