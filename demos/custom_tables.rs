//! Export a caller-supplied table instead of a built-in one.
//!
//! Uses the `regions` vocabulary, the country-first CSV layout and the
//! denormalized `locations` SQL block.

use geoexport_core::prelude::*;

const NORDICS: &[CountryTable<'static>] = &[
    CountryTable {
        name: "Norway",
        code: "NO",
        regions: &[RegionEntry::coded("03", "Oslo"), RegionEntry::coded("46", "Vestland")],
        principal_cities: &[("Oslo", &["Oslo"]), ("Vestland", &["Bergen", "Førde"])],
    },
    CountryTable {
        name: "Sweden",
        code: "SE",
        regions: &[RegionEntry::new("Skåne")],
        principal_cities: &[("Skåne", &["Malmö", "Helsingborg", "Lund"])],
    },
];

fn main() -> Result<()> {
    let db = build_dataset(NORDICS)?;

    let options = ExportOptions {
        title: "Nordic principal cities".to_owned(),
        terminology: Terminology::Regions,
        record_shape: RecordShape::Collection,
        table_layout: TableLayout::CountryFirst,
        sql_layout: SqlLayout::Locations,
        compression: CompressionMode::None,
    };
    let exporter = Exporter::new(&db, options);

    println!("{}", exporter.to_structured_record()?.to_json_string()?);
    println!();
    print!("{}", String::from_utf8_lossy(&exporter.render(OutputFormat::Csv)?));
    println!();
    print!("{}", exporter.to_statement_batch()?);

    Ok(())
}
