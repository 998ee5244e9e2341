//! vercat - typed accessors over dependency version catalogs
//!
//! This crate loads `<name>.versions.toml` catalogs into an immutable
//! [`Catalog`] and exposes its entries through nested [`Accessor`] views
//! whose nesting mirrors the dotted entry keys.

pub mod accessor;
pub mod core;
pub mod ops;
pub mod util;

/// Test fixtures for vercat unit tests.
#[cfg(test)]
pub mod test_support;

pub use accessor::{Accessor, EntryKind, Scope};
pub use core::{
    alias::Alias, catalog::Catalog, catalog::CatalogBuilder, errors::CatalogError,
    errors::Section, library::Library, plugin::Plugin, version::RichVersion,
};
