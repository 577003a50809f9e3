// crates/geoexport-core/src/loader/mod.rs

//! # Data Loader
//!
//! Builds the built-in datasets once per process and reads structured records
//! back from disk.

pub mod common_io;

use crate::data::DatasetVariant;
use crate::error::Result;
use crate::export::parse_structured_record;
use crate::model::{build_dataset, Dataset};
use once_cell::sync::OnceCell;
use std::path::Path;
use tracing::debug;

// One cache per variant so each literal table is joined at most once.
static MEXICO_CACHE: OnceCell<Dataset> = OnceCell::new();
static GLOBAL_CACHE: OnceCell<Dataset> = OnceCell::new();

impl DatasetVariant {
    /// Build a fresh dataset from the literal tables.
    pub fn build(self) -> Result<Dataset> {
        build_dataset(self.tables())
    }

    /// The process-wide dataset for this variant, built on first use.
    pub fn load(self) -> Result<&'static Dataset> {
        let cache = match self {
            DatasetVariant::Mexico => &MEXICO_CACHE,
            DatasetVariant::Global => &GLOBAL_CACHE,
        };
        cache.get_or_try_init(|| {
            debug!(dataset = %self, "building built-in dataset");
            self.build()
        })
    }
}

impl Dataset {
    /// Load a structured record (`.json` or `.json.gz`) written by the exporter.
    pub fn load_structured_record(path: impl AsRef<Path>) -> Result<Self> {
        let json = common_io::read_to_string(path.as_ref())?;
        parse_structured_record(&json)
    }
}
