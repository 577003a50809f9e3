// crates/geoexport-core/src/model/search.rs
use super::nested::{City, Country, Dataset, Region};
use crate::common::ExportStats;
use crate::traits::NameMatch;

/// A city together with its parent region and country.
///
/// The nested model has no back-pointers; this view is how exporters and
/// searches reach a city's parents.
#[derive(Debug, Clone, Copy)]
pub struct CityEntry<'a> {
    pub country: &'a Country,
    pub region: &'a Region,
    pub city: &'a City,
}

impl Dataset {
    pub fn stats(&self) -> ExportStats {
        ExportStats {
            countries: self.countries.len(),
            regions: self.total_regions(),
            cities: self.total_cities(),
        }
    }

    /// Every city in output order: country by country, region by region.
    pub fn cities(&self) -> impl Iterator<Item = CityEntry<'_>> + '_ {
        self.countries.iter().flat_map(|country| {
            country.regions.iter().flat_map(move |region| {
                region.cities.iter().map(move |city| CityEntry {
                    country,
                    region,
                    city,
                })
            })
        })
    }

    /// Find a country by its code, case-insensitive (e.g. "MX", "de").
    pub fn find_country_by_code(&self, code: &str) -> Option<&Country> {
        let code = code.trim();
        self.countries
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code))
    }

    /// Accent- and case-insensitive substring search over city names.
    pub fn find_cities_by_substring(&self, substr: &str) -> Vec<CityEntry<'_>> {
        self.cities()
            .filter(|entry| entry.city.name_contains(substr))
            .collect()
    }
}

impl Country {
    /// Find a region by name, ignoring accents and case ("nuevo leon").
    pub fn find_region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.is_named(name))
    }
}
