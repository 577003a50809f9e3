// crates/geoexport-core/src/data/mod.rs

//! # Built-in Tables
//!
//! The literal reference data compiled into the crate. Two variants exist and
//! are kept apart on purpose: the detailed Mexico table (32 coded states) and
//! the global table, which embeds its own abbreviated Mexico entry.

mod global;
mod mexico;

use crate::export::{RecordShape, SqlLayout, TableLayout, Terminology};
use crate::raw::CountryTable;
use std::fmt;
use std::str::FromStr;

pub use global::GLOBAL;
pub use mexico::MEXICO;

const MEXICO_ONLY: &[CountryTable<'static>] = &[MEXICO];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetVariant {
    /// All Mexican states with INEGI codes.
    Mexico,
    /// Several countries, abbreviated Mexico appended last.
    Global,
}

impl DatasetVariant {
    pub const ALL: [DatasetVariant; 2] = [DatasetVariant::Mexico, DatasetVariant::Global];

    pub fn tables(self) -> &'static [CountryTable<'static>] {
        match self {
            DatasetVariant::Mexico => MEXICO_ONLY,
            DatasetVariant::Global => GLOBAL,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DatasetVariant::Mexico => "mexico",
            DatasetVariant::Global => "global",
        }
    }

    /// File stem used when no explicit one is configured.
    pub fn default_stem(self) -> &'static str {
        match self {
            DatasetVariant::Mexico => "mexico_cities",
            DatasetVariant::Global => "global_cities",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            DatasetVariant::Mexico => "Mexico principal cities",
            DatasetVariant::Global => "Global principal cities",
        }
    }

    pub fn terminology(self) -> Terminology {
        Terminology::States
    }

    pub fn record_shape(self) -> RecordShape {
        match self {
            DatasetVariant::Mexico => RecordShape::Single,
            DatasetVariant::Global => RecordShape::Collection,
        }
    }

    /// Mexico keys rows by state code; the global table has no codes and
    /// leads with the country instead.
    pub fn table_layout(self) -> TableLayout {
        match self {
            DatasetVariant::Mexico => TableLayout::RegionFirst,
            DatasetVariant::Global => TableLayout::CountryFirst,
        }
    }

    pub fn sql_layout(self) -> SqlLayout {
        match self {
            DatasetVariant::Mexico => SqlLayout::Normalized,
            DatasetVariant::Global => SqlLayout::Locations,
        }
    }
}

impl fmt::Display for DatasetVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mexico" | "mx" => Ok(DatasetVariant::Mexico),
            "global" | "world" => Ok(DatasetVariant::Global),
            other => Err(format!("unknown dataset `{other}` (expected mexico or global)")),
        }
    }
}
