// crates/geoexport-core/src/export/record.rs

//! Structured record (JSON) projection and its inverse.
//!
//! Keys are emitted in a fixed order per level:
//!
//! ```text
//! country, country_code, total_states, states
//!   state_code?, state_name, cities, total_cities
//!     city_name, state, country, is_major
//! ```
//!
//! With [`Terminology::Regions`] every `state` becomes `region`. A region
//! without a code omits its code key.

use super::Terminology;
use crate::error::{ExportError, Result};
use crate::model::{City, Country, Dataset, Region};
use serde::ser::{SerializeSeq, SerializeStruct, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Top-level document shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordShape {
    /// A single country object. Only valid for single-country datasets.
    Single,
    /// An array of country objects.
    #[default]
    Collection,
}

/// Borrowed view over a dataset that serializes as the structured record.
#[derive(Debug, Clone, Copy)]
pub struct StructuredRecord<'a> {
    dataset: &'a Dataset,
    terms: Terminology,
    shape: RecordShape,
}

pub fn to_structured_record(
    dataset: &Dataset,
    terms: Terminology,
    shape: RecordShape,
) -> Result<StructuredRecord<'_>> {
    if shape == RecordShape::Single && dataset.countries.len() != 1 {
        return Err(ExportError::InvalidData(format!(
            "single-country record requested for a dataset with {} countries",
            dataset.countries.len()
        )));
    }
    Ok(StructuredRecord {
        dataset,
        terms,
        shape,
    })
}

impl StructuredRecord<'_> {
    /// Pretty JSON, two-space indent, non-ASCII kept verbatim, trailing newline.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>> {
        let mut out = serde_json::to_vec_pretty(self)?;
        out.push(b'\n');
        Ok(out)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn to_value(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl Serialize for StructuredRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let terms = self.terms;
        match self.shape {
            RecordShape::Single => CountryRecord {
                country: &self.dataset.countries[0],
                terms,
            }
            .serialize(serializer),
            RecordShape::Collection => {
                let mut seq = serializer.serialize_seq(Some(self.dataset.countries.len()))?;
                for country in &self.dataset.countries {
                    seq.serialize_element(&CountryRecord { country, terms })?;
                }
                seq.end()
            }
        }
    }
}

struct CountryRecord<'a> {
    country: &'a Country,
    terms: Terminology,
}

impl Serialize for CountryRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let c = self.country;
        let mut st = serializer.serialize_struct("Country", 4)?;
        st.serialize_field("country", &c.name)?;
        st.serialize_field("country_code", &c.code)?;
        st.serialize_field(self.terms.total_key(), &c.total_regions())?;
        st.serialize_field(
            self.terms.plural(),
            &RegionList {
                country: c,
                terms: self.terms,
            },
        )?;
        st.end()
    }
}

struct RegionList<'a> {
    country: &'a Country,
    terms: Terminology,
}

impl Serialize for RegionList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut seq = serializer.serialize_seq(Some(self.country.regions.len()))?;
        for region in &self.country.regions {
            seq.serialize_element(&RegionRecord {
                country: self.country,
                region,
                terms: self.terms,
            })?;
        }
        seq.end()
    }
}

struct RegionRecord<'a> {
    country: &'a Country,
    region: &'a Region,
    terms: Terminology,
}

impl Serialize for RegionRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let r = self.region;
        let mut st = serializer.serialize_struct("Region", 4)?;
        match r.code() {
            Some(code) => st.serialize_field(self.terms.code_key(), code)?,
            None => st.skip_field(self.terms.code_key())?,
        }
        st.serialize_field(self.terms.name_key(), &r.name)?;
        st.serialize_field("cities", &CityList { parent: self })?;
        st.serialize_field("total_cities", &r.total_cities())?;
        st.end()
    }
}

struct CityList<'a> {
    parent: &'a RegionRecord<'a>,
}

impl Serialize for CityList<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let region = self.parent.region;
        let mut seq = serializer.serialize_seq(Some(region.cities.len()))?;
        for city in &region.cities {
            seq.serialize_element(&CityRecord {
                city,
                region,
                country: self.parent.country,
                terms: self.parent.terms,
            })?;
        }
        seq.end()
    }
}

struct CityRecord<'a> {
    city: &'a City,
    region: &'a Region,
    country: &'a Country,
    terms: Terminology,
}

impl Serialize for CityRecord<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut st = serializer.serialize_struct("City", 4)?;
        st.serialize_field("city_name", &self.city.name)?;
        st.serialize_field(self.terms.singular(), &self.region.name)?;
        st.serialize_field("country", &self.country.name)?;
        st.serialize_field("is_major", &self.city.is_major)?;
        st.end()
    }
}

// -----------------------------------------------------------------------------
// PARSING (structured record -> Dataset)
// -----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct CountryDoc {
    country: String,
    country_code: String,
    #[serde(alias = "total_regions")]
    total_states: usize,
    #[serde(alias = "regions")]
    states: Vec<RegionDoc>,
}

#[derive(Debug, Deserialize)]
struct RegionDoc {
    #[serde(default, alias = "region_code")]
    state_code: Option<String>,
    #[serde(alias = "region_name")]
    state_name: String,
    cities: Vec<CityDoc>,
    total_cities: usize,
}

#[derive(Debug, Deserialize)]
struct CityDoc {
    city_name: String,
    #[serde(default, alias = "region")]
    state: Option<String>,
    #[serde(default)]
    country: Option<String>,
    #[serde(default = "principal")]
    is_major: bool,
}

fn principal() -> bool {
    true
}

/// Parse a structured record back into a [`Dataset`].
///
/// Accepts either shape and either vocabulary. Declared totals and the
/// parent names repeated on each city must agree with the nesting; any
/// disagreement is [`ExportError::InvalidData`].
pub fn parse_structured_record(json: &str) -> Result<Dataset> {
    let value: Value = serde_json::from_str(json)?;
    let docs: Vec<CountryDoc> = match value {
        Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };

    let countries = docs
        .into_iter()
        .map(country_from_doc)
        .collect::<Result<Vec<_>>>()?;
    Ok(Dataset::new(countries))
}

fn country_from_doc(doc: CountryDoc) -> Result<Country> {
    if doc.total_states != doc.states.len() {
        return Err(ExportError::InvalidData(format!(
            "{} declares {} regions but lists {}",
            doc.country,
            doc.total_states,
            doc.states.len()
        )));
    }

    let mut regions = Vec::with_capacity(doc.states.len());
    for r in doc.states {
        if r.total_cities != r.cities.len() {
            return Err(ExportError::InvalidData(format!(
                "{} / {} declares {} cities but lists {}",
                doc.country,
                r.state_name,
                r.total_cities,
                r.cities.len()
            )));
        }

        let mut cities = Vec::with_capacity(r.cities.len());
        for c in r.cities {
            let region_ok = c.state.as_deref().map_or(true, |s| s == r.state_name);
            let country_ok = c.country.as_deref().map_or(true, |s| s == doc.country);
            if !(region_ok && country_ok) {
                return Err(ExportError::InvalidData(format!(
                    "city `{}` is listed under {} / {} but names a different parent",
                    c.city_name, doc.country, r.state_name
                )));
            }
            cities.push(City {
                name: c.city_name,
                is_major: c.is_major,
            });
        }

        regions.push(Region {
            code: r.state_code,
            name: r.state_name,
            cities,
        });
    }

    Ok(Country::new(doc.country, doc.country_code, regions))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bavaria() -> Dataset {
        Dataset::new(vec![Country::new(
            "Germany",
            "DE",
            vec![Region::new(
                None,
                "Bavaria",
                vec![City::major("Munich"), City::major("O'Hara")],
            )],
        )])
    }

    #[test]
    fn keys_follow_fixed_order() {
        let db = bavaria();
        let json = to_structured_record(&db, Terminology::States, RecordShape::Single)
            .unwrap()
            .to_json_string()
            .unwrap();

        let positions: Vec<usize> = ["\"country\"", "\"country_code\"", "\"total_states\"", "\"states\""]
            .iter()
            .map(|k| json.find(k).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{json}");
        assert!(!json.contains("state_code"), "absent code must be omitted");
    }

    #[test]
    fn regions_vocabulary() {
        let db = bavaria();
        let value = to_structured_record(&db, Terminology::Regions, RecordShape::Collection)
            .unwrap()
            .to_value()
            .unwrap();

        assert_eq!(value[0]["total_regions"], 1);
        assert_eq!(value[0]["regions"][0]["region_name"], "Bavaria");
        assert_eq!(value[0]["regions"][0]["cities"][1]["region"], "Bavaria");
    }

    #[test]
    fn single_shape_needs_one_country() {
        let db = Dataset::default();
        assert!(matches!(
            to_structured_record(&db, Terminology::States, RecordShape::Single),
            Err(ExportError::InvalidData(_))
        ));
    }

    #[test]
    fn mismatched_total_is_rejected() {
        let json = r#"{"country":"Germany","country_code":"DE","total_states":2,"states":[]}"#;
        assert!(matches!(
            parse_structured_record(json),
            Err(ExportError::InvalidData(_))
        ));
    }
}
