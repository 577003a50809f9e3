// crates/geoexport-core/src/error.rs
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which side of a join was missing the key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MappingTable {
    /// The primary region table of a country.
    Regions,
    /// The principal-cities lookup keyed by region name.
    PrincipalCities,
}

impl fmt::Display for MappingTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MappingTable::Regions => f.write_str("region table"),
            MappingTable::PrincipalCities => f.write_str("principal cities lookup"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    /// A key present on one side of the region/city join is absent on the other.
    #[error("missing mapping: `{key}` has no entry in the {table} of {country}")]
    MissingMapping {
        country: String,
        table: MappingTable,
        key: String,
    },

    #[error("country `{0}` has an empty country code")]
    EmptyCountryCode(String),

    #[error("duplicate country code `{0}`")]
    DuplicateCountryCode(String),

    #[error("duplicate region `{region}` in {country}")]
    DuplicateRegion { country: String, region: String },

    #[error("duplicate principal cities entry `{key}` in {country}")]
    DuplicateLookupKey { country: String, key: String },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl ExportError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExportError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
