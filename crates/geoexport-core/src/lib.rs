// crates/geoexport-core/src/lib.rs

//! geoexport-core
//! ==============
//!
//! Static country → region → city reference data and three deterministic
//! exporters over it: a structured record (JSON), a flat table (CSV) and a
//! statement batch (SQL `INSERT`s).
//!
//! ```rust
//! use geoexport_core::prelude::*;
//!
//! let db = DatasetVariant::Mexico.load()?;
//! let exporter = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Mexico));
//!
//! assert_eq!(db.countries()[0].total_regions(), 32);
//! assert_eq!(exporter.to_flat_table().len(), db.total_cities());
//! # Ok::<(), geoexport_core::ExportError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod common;
pub mod data;
pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod raw;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::ExportStats;
pub use crate::data::DatasetVariant;
pub use crate::error::{ExportError, MappingTable, Result};
pub use crate::export::{
    CompressionMode, ExportOptions, ExportSummary, Exporter, OutputFormat, OutputPaths,
    RecordShape, SqlLayout, TableLayout, Terminology,
};
pub use crate::model::{build_dataset, City, CityEntry, Country, Dataset, Region};
pub use crate::raw::{CountryTable, RegionEntry};
