// crates/geoexport-core/src/export/table.rs

//! Flat table (CSV) projection: a fixed header, then one row per city.

use super::Terminology;
use crate::error::Result;
use crate::model::Dataset;
use csv::{QuoteStyle, Terminator, WriterBuilder};
use std::io::Write;

/// Column set of the flat table. Fixed per call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableLayout {
    /// `state_code, state_name, city_name, country_code, is_major`
    #[default]
    RegionFirst,
    /// `country, country_code, state, city, is_major`
    CountryFirst,
}

impl TableLayout {
    pub fn header(self, terms: Terminology) -> Vec<&'static str> {
        match self {
            TableLayout::RegionFirst => vec![
                terms.code_key(),
                terms.name_key(),
                "city_name",
                "country_code",
                "is_major",
            ],
            TableLayout::CountryFirst => vec![
                "country",
                "country_code",
                terms.singular(),
                "city",
                "is_major",
            ],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatTable {
    pub header: Vec<&'static str>,
    pub rows: Vec<Vec<String>>,
}

/// Boolean as written into both the CSV and the SQL output.
pub(crate) fn bool_text(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

pub fn to_flat_table(dataset: &Dataset, layout: TableLayout, terms: Terminology) -> FlatTable {
    let rows = dataset
        .cities()
        .map(|e| match layout {
            TableLayout::RegionFirst => vec![
                e.region.code().unwrap_or_default().to_owned(),
                e.region.name.clone(),
                e.city.name.clone(),
                e.country.code.clone(),
                bool_text(e.city.is_major).to_owned(),
            ],
            TableLayout::CountryFirst => vec![
                e.country.name.clone(),
                e.country.code.clone(),
                e.region.name.clone(),
                e.city.name.clone(),
                bool_text(e.city.is_major).to_owned(),
            ],
        })
        .collect();

    FlatTable {
        header: layout.header(terms),
        rows,
    }
}

impl FlatTable {
    /// Write header and rows as CSV: comma-delimited, `\n` line endings,
    /// fields quoted only when they need it.
    pub fn write_csv<W: Write>(&self, out: W) -> Result<()> {
        let mut wtr = WriterBuilder::new()
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(out);

        wtr.write_record(&self.header)?;
        for row in &self.rows {
            wtr.write_record(row)?;
        }
        wtr.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn to_csv_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_csv(&mut buf)?;
        Ok(buf)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{City, Country, Region};

    #[test]
    fn quotes_only_when_needed() {
        let db = Dataset::new(vec![Country::new(
            "Spain",
            "ES",
            vec![Region::new(
                None,
                "Catalonia",
                vec![City::major("Badalona"), City::major("Sant Adrià, \"Besòs\"")],
            )],
        )]);

        let csv = to_flat_table(&db, TableLayout::CountryFirst, Terminology::States)
            .to_csv_bytes()
            .unwrap();
        let text = String::from_utf8(csv).unwrap();
        assert_eq!(
            text,
            "country,country_code,state,city,is_major\n\
             Spain,ES,Catalonia,Badalona,TRUE\n\
             Spain,ES,Catalonia,\"Sant Adrià, \"\"Besòs\"\"\",TRUE\n"
        );
    }

    #[test]
    fn missing_region_code_is_an_empty_field() {
        let db = Dataset::new(vec![Country::new(
            "Japan",
            "JP",
            vec![Region::new(None, "Osaka", vec![City::major("Sakai")])],
        )]);
        let table = to_flat_table(&db, TableLayout::RegionFirst, Terminology::Regions);
        assert_eq!(
            table.header,
            ["region_code", "region_name", "city_name", "country_code", "is_major"]
        );
        assert_eq!(table.rows, [["", "Osaka", "Sakai", "JP", "TRUE"]]);
    }
}
