//! Flat listing of catalog entries.

use serde::Serialize;

use crate::core::{Alias, Catalog, Section};

/// One catalog entry, rendered for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryRow {
    pub section: Section,
    pub alias: String,
    /// Coordinates, plugin notation, version or bundle members.
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_ref: Option<String>,
}

/// Every entry of `section` (or of all sections), in document order.
pub fn entries(catalog: &Catalog, section: Option<Section>) -> Vec<EntryRow> {
    let sections: Vec<Section> = match section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    for section in sections {
        match section {
            Section::Version => rows.extend(catalog.version_entries().map(|(alias, version)| {
                EntryRow {
                    section,
                    alias: alias.to_string(),
                    value: version.to_string(),
                    version_ref: None,
                }
            })),
            Section::Library => rows.extend(catalog.library_entries().map(|lib| EntryRow {
                section,
                alias: lib.alias().to_string(),
                value: match lib.version().single_version() {
                    "" if !lib.version().is_empty() => {
                        format!("{} {}", lib.module(), lib.version())
                    }
                    _ => lib.coordinates(),
                },
                version_ref: lib.version_ref().map(Alias::to_string),
            })),
            Section::Bundle => rows.extend(catalog.bundle_entries().map(|bundle| EntryRow {
                section,
                alias: bundle.alias().to_string(),
                value: bundle
                    .members()
                    .iter()
                    .map(Alias::as_str)
                    .collect::<Vec<_>>()
                    .join(", "),
                version_ref: None,
            })),
            Section::Plugin => rows.extend(catalog.plugin_entries().map(|plugin| EntryRow {
                section,
                alias: plugin.alias().to_string(),
                value: plugin.notation(),
                version_ref: plugin.version_ref().map(Alias::to_string),
            })),
        }
    }
    rows
}
