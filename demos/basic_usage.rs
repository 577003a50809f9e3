//! Basic usage example for geoexport-rs
//!
//! Loads the built-in Mexico table, looks around in it and renders all three
//! formats into a temporary directory.

use geoexport_core::prelude::*;

fn main() -> Result<()> {
    println!("=== geoexport-rs Basic Usage Example ===\n");

    let variant = DatasetVariant::Mexico;
    let db = variant.load()?;

    let stats = db.stats();
    println!("--- Dataset: {} ---", variant.title());
    println!("  Countries: {}", stats.countries);
    println!("  States: {}", stats.regions);
    println!("  Cities: {}", stats.cities);
    println!();

    println!("--- First five states ---");
    if let Some(mx) = db.find_country_by_code("MX") {
        for region in mx.regions().iter().take(5) {
            println!(
                "  [{}] {} ({} cities)",
                region.code().unwrap_or("--"),
                region.name(),
                region.total_cities()
            );
        }
    }
    println!();

    println!("--- Cities matching 'san' ---");
    for e in db.find_cities_by_substring("san").iter().take(5) {
        println!("  {} ({})", e.city.name(), e.region.name());
    }
    println!();

    let exporter = Exporter::new(db, ExportOptions::for_variant(variant));

    println!("--- First CSV rows ---");
    let table = exporter.to_flat_table();
    println!("  {}", table.header.join(","));
    for row in table.rows.iter().take(3) {
        println!("  {}", row.join(","));
    }
    println!();

    println!("--- Writing all formats ---");
    let dir = std::env::temp_dir().join("geoexport-demo");
    let summary = exporter.write_all(&OutputPaths::in_dir(&dir, variant.default_stem()))?;
    for file in &summary.files {
        println!("  {} -> {} ({} bytes)", file.format, file.path.display(), file.bytes);
    }

    Ok(())
}
