// crates/geoexport-core/src/model/convert.rs

use crate::error::{ExportError, MappingTable, Result};
use crate::model::nested::{City, Country, Dataset, Region};
use crate::raw::CountryTable;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// **Table Converter:** Raw literal tables -> Nested `Dataset`.
///
/// Joins each country's region table with its principal-cities lookup. Both
/// directions of the join are checked: a lookup key without a region and a
/// region without a lookup entry are both [`ExportError::MissingMapping`].
/// A region mapped to an empty city list is valid.
///
/// Country codes must be unique ignoring case, matching
/// [`Dataset::find_country_by_code`].
///
/// Country and region order follows the tables; nothing is sorted.
pub fn build_dataset(tables: &[CountryTable<'_>]) -> Result<Dataset> {
    let mut seen_codes = HashSet::new();
    let mut countries = Vec::with_capacity(tables.len());

    for table in tables {
        if table.code.trim().is_empty() {
            return Err(ExportError::EmptyCountryCode(table.name.to_owned()));
        }
        // Lookups by code ignore case, so uniqueness must too.
        if !seen_codes.insert(table.code.trim().to_ascii_uppercase()) {
            return Err(ExportError::DuplicateCountryCode(table.code.to_owned()));
        }
        countries.push(convert_country(table)?);
    }

    let dataset = Dataset { countries };
    debug!(
        countries = dataset.country_count(),
        regions = dataset.total_regions(),
        cities = dataset.total_cities(),
        "built dataset"
    );
    Ok(dataset)
}

fn convert_country(table: &CountryTable<'_>) -> Result<Country> {
    // 1. Index the lookup, rejecting duplicate keys
    let mut lookup: HashMap<&str, &[&str]> = HashMap::with_capacity(table.principal_cities.len());
    for &(region_name, cities) in table.principal_cities {
        if lookup.insert(region_name, cities).is_some() {
            return Err(ExportError::DuplicateLookupKey {
                country: table.name.to_owned(),
                key: region_name.to_owned(),
            });
        }
    }

    // 2. Every lookup key must name a region
    let region_names: HashSet<&str> = table.regions.iter().map(|r| r.name).collect();
    if let Some((orphan, _)) = table
        .principal_cities
        .iter()
        .find(|(name, _)| !region_names.contains(name))
    {
        return Err(ExportError::MissingMapping {
            country: table.name.to_owned(),
            table: MappingTable::Regions,
            key: (*orphan).to_owned(),
        });
    }

    // 3. Build regions in table order
    let mut seen_regions = HashSet::with_capacity(table.regions.len());
    let mut regions = Vec::with_capacity(table.regions.len());
    for entry in table.regions {
        if !seen_regions.insert(entry.name) {
            return Err(ExportError::DuplicateRegion {
                country: table.name.to_owned(),
                region: entry.name.to_owned(),
            });
        }

        let cities = lookup
            .get(entry.name)
            .ok_or_else(|| ExportError::MissingMapping {
                country: table.name.to_owned(),
                table: MappingTable::PrincipalCities,
                key: entry.name.to_owned(),
            })?
            .iter()
            .map(|name| City::major(*name))
            .collect();

        regions.push(Region::new(entry.code, entry.name, cities));
    }

    Ok(Country::new(table.name, table.code, regions))
}
