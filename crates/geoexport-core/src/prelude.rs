//! geoexport prelude: bring common types and traits into scope for demos.

#![allow(unused_imports)]

pub use crate::common::ExportStats;
pub use crate::data::DatasetVariant;
pub use crate::error::{ExportError, MappingTable, Result};
pub use crate::export::{
    escape_sql_literal, parse_structured_record, CompressionMode, ExportOptions, ExportSummary,
    Exporter, FlatTable, OutputFormat, OutputPaths, RecordShape, SqlLayout, StatementBatch,
    TableLayout, Terminology,
};
pub use crate::model::{build_dataset, City, CityEntry, Country, Dataset, Region};
pub use crate::raw::{CountryTable, RegionEntry};
pub use crate::text::{equals_folded, fold_key};
pub use crate::traits::NameMatch;
