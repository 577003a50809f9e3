// crates/geoexport-core/src/raw.rs

//! Raw literal input shared by the built-in tables and by callers that
//! assemble their own tables.
//!
//! Regions and their principal cities live in two separate tables, the way
//! the source lists were maintained. [`build_dataset`](crate::build_dataset)
//! joins them by region name.

/// A region (state / province) as listed in a country's primary table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegionEntry<'a> {
    pub code: Option<&'a str>,
    pub name: &'a str,
}

impl<'a> RegionEntry<'a> {
    pub const fn new(name: &'a str) -> Self {
        Self { code: None, name }
    }

    pub const fn coded(code: &'a str, name: &'a str) -> Self {
        Self {
            code: Some(code),
            name,
        }
    }
}

/// Principal cities of one region, keyed by the region name.
pub type PrincipalCities<'a> = (&'a str, &'a [&'a str]);

/// One country worth of literal data.
#[derive(Debug, Clone, Copy)]
pub struct CountryTable<'a> {
    pub name: &'a str,
    pub code: &'a str,
    pub regions: &'a [RegionEntry<'a>],
    pub principal_cities: &'a [PrincipalCities<'a>],
}
