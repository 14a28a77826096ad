//! `tablesync_core` keeps a markdown table in a documentation file in sync
//! with a structured dataset catalog. The catalog is rendered into a
//! fixed-column table and spliced over the existing table in the document,
//! leaving everything around it untouched.
//!
//! ## Processing Pipeline
//!
//! ```text
//! Catalog file (JSON / YAML)
//!   → Catalog reader (ordered records, fields kept in source order)
//!   → Field renderer (single-line, `|`-escaped cells)
//!   → Table formatter (header, separator, one row per record)
//!   → Document splicer (finds the header row, replaces the contiguous table)
//!   → Writer (overwrites the document)
//! ```
//!
//! ## Modules
//!
//! - [`config`] — Paths and the optional `tablesync.toml` file.
//!
//! ## Key Types
//!
//! - [`Catalog`] and [`Record`] — The parsed dataset catalog.
//! - [`SyncTarget`] — The catalog and document paths for one run.
//! - [`SyncResult`] — The regenerated document, ready to be written.
//! - [`CheckResult`] — Whether the document's table matches the catalog.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use tablesync_core::SyncTarget;
//! use tablesync_core::compute_sync;
//! use tablesync_core::write_sync;
//!
//! let target = SyncTarget::resolve(Path::new("."), None, None).unwrap();
//! let result = compute_sync(&target).unwrap();
//! write_sync(&result).unwrap();
//! ```

pub use catalog::*;
pub use config::*;
pub use error::*;
pub use render::*;
pub use splice::*;
pub use sync::*;
pub use table::*;

mod catalog;
pub mod config;
#[allow(unused_assignments)]
mod error;
mod render;
mod splice;
mod sync;
mod table;

#[cfg(test)]
mod __fixtures;
