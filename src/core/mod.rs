//! Core data structures for vercat.
//!
//! This module contains the foundational catalog types:
//! - Aliases (normalized dotted keys)
//! - Version, library, bundle and plugin descriptors
//! - The immutable catalog and its document format

pub mod alias;
pub mod catalog;
pub mod document;
pub mod errors;
pub mod library;
pub mod plugin;
pub mod version;

pub use alias::Alias;
pub use catalog::{Catalog, CatalogBuilder, LibraryDecl, PluginDecl};
pub use document::{catalog_name, CATALOG_SUFFIX, DEFAULT_CATALOG_NAME};
pub use errors::{CatalogError, Section};
pub use library::{Bundle, Library, ModuleId};
pub use plugin::Plugin;
pub use version::{RichVersion, VersionSpec};
