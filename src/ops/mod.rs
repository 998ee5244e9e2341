//! High-level catalog operations used by the CLI.

pub mod check;
pub mod discover;
pub mod list;
pub mod tree;

pub use check::{check_catalogs, CheckOutcome, CheckReport};
pub use discover::{discover_catalogs, discover_from, select_catalog, CatalogFile};
pub use list::{entries, EntryRow};
pub use tree::{render_catalog, render_section};
