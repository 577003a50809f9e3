// crates/geoexport-core/src/model/nested.rs
use serde::{Deserialize, Serialize};

/// # The Nested Model
///
/// Ownership mirrors the hierarchy: a `Dataset` owns its countries, a country
/// owns its regions, a region owns its cities. Vectors keep insertion order,
/// which is the order every exporter emits.
///
/// **Structure:** `Dataset` -> `Vec<Country>` -> `Vec<Region>` -> `Vec<City>`
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    pub countries: Vec<Country>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub code: String, // ISO2, e.g. "MX"
    pub regions: Vec<Region>,
}

/// A state / province within a country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub code: Option<String>, // e.g. "19" for Nuevo León
    pub name: String,
    pub cities: Vec<City>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    /// Always `true` for the built-in tables, which only list principal cities.
    pub is_major: bool,
}

impl Dataset {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    pub fn total_regions(&self) -> usize {
        self.countries.iter().map(Country::total_regions).sum()
    }

    pub fn total_cities(&self) -> usize {
        self.countries.iter().map(Country::total_cities).sum()
    }
}

impl Country {
    pub fn new(name: impl Into<String>, code: impl Into<String>, regions: Vec<Region>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            regions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn total_regions(&self) -> usize {
        self.regions.len()
    }

    /// Sum of the city counts of all regions.
    pub fn total_cities(&self) -> usize {
        self.regions.iter().map(Region::total_cities).sum()
    }
}

impl Region {
    pub fn new(code: Option<&str>, name: impl Into<String>, cities: Vec<City>) -> Self {
        Self {
            code: code.map(str::to_owned),
            name: name.into(),
            cities,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn total_cities(&self) -> usize {
        self.cities.len()
    }
}

impl City {
    /// A principal city.
    pub fn major(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_major: true,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn is_major(&self) -> bool {
        self.is_major
    }
}
