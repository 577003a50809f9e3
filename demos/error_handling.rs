//! Error handling example for geoexport-rs
//!
//! Shows the errors a caller can run into: broken joins, lookups that find
//! nothing, records that do not add up and destinations that cannot be
//! written.

use geoexport_core::prelude::*;

const BROKEN: &[CountryTable<'static>] = &[CountryTable {
    name: "Spain",
    code: "ES",
    regions: &[RegionEntry::new("Madrid"), RegionEntry::new("Catalonia")],
    principal_cities: &[("Madrid", &["Madrid", "Alcalá de Henares"])],
}];

fn main() -> Result<()> {
    println!("=== geoexport-rs Error Handling Example ===\n");

    println!("--- Example 1: Region without principal cities ---");
    match build_dataset(BROKEN) {
        Ok(_) => println!("  unexpectedly built"),
        Err(ExportError::MissingMapping {
            country,
            table,
            key,
        }) => println!("  {country}: `{key}` is missing from the {table}"),
        Err(e) => return Err(e),
    }
    println!();

    let db = DatasetVariant::Global.load()?;

    println!("--- Example 2: Unknown country codes ---");
    for code in ["XX", "", "usa", "us"] {
        match db.find_country_by_code(code) {
            Some(c) => println!("  Found: {} ({})", c.name(), c.code()),
            None => println!("  Not found: {code:?}"),
        }
    }
    println!();

    println!("--- Example 3: A record whose totals do not add up ---");
    let json = r#"{"country":"Japan","country_code":"JP","total_states":3,"states":[]}"#;
    match parse_structured_record(json) {
        Ok(_) => println!("  unexpectedly parsed"),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    println!("--- Example 4: Single-country record for a multi-country dataset ---");
    let options = ExportOptions {
        record_shape: RecordShape::Single,
        ..ExportOptions::for_variant(DatasetVariant::Global)
    };
    if let Err(e) = Exporter::new(db, options).render(OutputFormat::Json) {
        println!("  Rejected: {e}");
    }
    println!();

    println!("--- Example 5: Unwritable destination ---");
    let blocker = std::env::temp_dir().join("geoexport-demo-blocker");
    std::fs::write(&blocker, b"a file, not a directory").map_err(|e| {
        ExportError::InvalidData(format!("cannot prepare {}: {e}", blocker.display()))
    })?;
    let exporter = Exporter::new(db, ExportOptions::for_variant(DatasetVariant::Global));
    match exporter.write_all(&OutputPaths::in_dir(&blocker, "global_cities")) {
        Ok(_) => println!("  unexpectedly written"),
        Err(e) => println!("  {e}"),
    }

    Ok(())
}
