//! **A grouping, filtering and rendering engine for schematic bills of materials.**
//!
//! `bomgen` consumes a flat list of electronic-component records (one per
//! schematic symbol instance, with field values already resolved upstream)
//! and produces grouped, sorted, filtered and re-labeled tabular output in
//! CSV, HTML, XML and XLSX.
//!
//! The crate is a pure, in-memory batch transform: no file I/O, no CLI
//! handling, no network. Schematic parsing, sheet-path resolution and
//! variant computation are upstream concerns; this library starts where a
//! resolved [`ComponentRecord`] sequence exists and stops at rendered bytes.
//!
//! ## Key Features
//!
//! - **Configurable grouping**: case-insensitive equality keys over a
//!   configurable field set, with a component-type alias table and a
//!   connector rule that ignores `Value` for connector-class references.
//! - **Regex filtering**: include-only / exclude-any rules over any field,
//!   with a stock exclusion table for test points, fiducials and mounting
//!   holes.
//! - **Reference compaction**: optional `R1-R5` range notation that is
//!   losslessly invertible.
//! - **Fitted/DNF/DNC classification**: not-fitted groups surface in a
//!   separate DNF table instead of vanishing, and DNC members annotate the
//!   quantity cell.
//! - **Four renderers, one table model**: every format consumes the same
//!   [`reports::BomDocument`], so headers and cell text match
//!   byte-for-byte across formats.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`ComponentRecord`], reference designator parsing, and
//!   [`BomGroup`] with its field-merge and collision semantics.
//! - **[`config`]**: [`BomConfig`] and friends. All values arrive already
//!   resolved; validation happens up front and structural errors abort the
//!   run before any output exists.
//! - **[`pipeline`]**: the stages themselves (unit collapse, filter,
//!   group, sort, project) and [`generate_bom`] which runs them all.
//! - **[`reports`]**: the abstract [`reports::BomDocument`] plus the CSV,
//!   HTML, XML and XLSX renderers behind the [`reports::BomRenderer`]
//!   trait.
//!
//! ## Getting Started
//!
//! ```
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use bomgen::reports::{create_renderer, OutputFormat};
//! use bomgen::{generate_bom, BomConfig, ColumnSpec, ComponentRecord, DocumentInfo};
//!
//! let records = vec![
//!     ComponentRecord::new("R1")
//!         .with_field("Part", "R")
//!         .with_field("Value", "10K")
//!         .with_field("Footprint", "R_0805"),
//!     ComponentRecord::new("R2")
//!         .with_field("Part", "R")
//!         .with_field("Value", "10K")
//!         .with_field("Footprint", "R_0805"),
//! ];
//!
//! let mut config = BomConfig::default();
//! config.columns = vec![
//!     ColumnSpec::new("References"),
//!     ColumnSpec::new("Value"),
//!     ColumnSpec::new("Quantity Per PCB"),
//! ];
//!
//! let document = generate_bom(records, &config, DocumentInfo::new())?;
//! let csv = create_renderer(OutputFormat::Csv).render(&document, &config)?;
//! assert_eq!(
//!     String::from_utf8(csv)?,
//!     "References,Value,Quantity Per PCB\nR1 R2,10K,2\n"
//! );
//! # Ok(())
//! # }
//! ```
//!
//! ## Diagnostics
//!
//! Field collisions (group members disagreeing on a field with no merge
//! resolution) are never fatal: they are logged through [`tracing`] as
//! `Field conflict` warnings, resolved by keeping the first-seen value,
//! and collected on the finished document for the caller.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    // Doc completeness: # Errors / # Panics sections are aspirational
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Config structs legitimately use many bools for toggle flags
    clippy::struct_excessive_bools
)]

pub mod config;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{
    BomConfig, ColumnSpec, ConfigError, FilterMode, FilterRule, HtmlOptions, SortMode,
    Validatable, XlsxOptions, XlsxTheme,
};
pub use error::{BomError, Result};
pub use model::{BomGroup, ComponentRecord, FieldCollision};
pub use pipeline::{generate_outputs, run as generate_bom, AliasTable, PipelineError};
pub use reports::{BomDocument, BomRenderer, BomStats, DocumentInfo, OutputFormat};
