// crates/geoexport-core/src/model/mod.rs
pub mod convert;
pub mod nested;
pub mod search;

pub use convert::build_dataset;
pub use nested::{City, Country, Dataset, Region};
pub use search::CityEntry;
