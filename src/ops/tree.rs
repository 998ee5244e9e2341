//! Rendering the accessor namespace as a tree.

use crate::accessor::{Accessor, EntryKind};
use crate::core::{Catalog, CatalogError, Section};

/// Render one section's accessor tree, one line per node.
///
/// A node that is both an entry and a group is marked with `(*)`.
pub fn render_section(catalog: &Catalog, section: Section) -> Result<Vec<String>, CatalogError> {
    let mut lines = vec![format!("{}.{}", catalog.name(), section.table())];
    match section {
        Section::Library => render_node(&catalog.libraries(), "", &mut lines)?,
        Section::Version => render_node(&catalog.versions(), "", &mut lines)?,
        Section::Bundle => render_node(&catalog.bundles(), "", &mut lines)?,
        Section::Plugin => render_node(&catalog.plugins(), "", &mut lines)?,
    }
    Ok(lines)
}

/// Render every section, separated by blank lines.
pub fn render_catalog(catalog: &Catalog) -> Result<Vec<String>, CatalogError> {
    let mut lines = Vec::new();
    for section in Section::ALL {
        if catalog.aliases(section).is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.extend(render_section(catalog, section)?);
    }
    Ok(lines)
}

fn render_node<K: EntryKind>(
    node: &Accessor<'_, K>,
    indent: &str,
    lines: &mut Vec<String>,
) -> Result<(), CatalogError> {
    let children = node.children();
    let count = children.len();

    for (i, child) in children.into_iter().enumerate() {
        let last = i + 1 == count;
        let branch = if last { "└── " } else { "├── " };
        let marker = if child.leaf && child.group { " (*)" } else { "" };
        lines.push(format!("{}{}{}{}", indent, branch, child.segment, marker));

        if child.group {
            let nested = format!("{}{}", indent, if last { "    " } else { "│   " });
            render_node(&node.group(&child.segment)?, &nested, lines)?;
        }
    }
    Ok(())
}
