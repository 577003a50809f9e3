//! geoexport - Command-line interface for geoexport-core
//!
//! Writes the built-in reference tables as a structured record (JSON), a
//! flat table (CSV) and a statement batch (SQL), and offers a few read-only
//! commands to inspect them.
//!
//! Usage examples
//! --------------
//!
//! - Export the detailed Mexico table to ./out
//!   $ geoexport export
//!
//! - Export the global table, gzip-compressed, to another directory
//!   $ geoexport --dataset global --gzip --out-dir /tmp/geo export
//!
//! - Show counts / list countries / list regions of a country
//!   $ geoexport stats
//!   $ geoexport --dataset global countries
//!   $ geoexport regions MX
//!
//! - Search cities by substring (accents and case are ignored)
//!   $ geoexport cities queretaro
//!
//! - Check a written record against the built-in data
//!   $ geoexport verify ./out/mexico_cities.json
//!
//! Any lookup, write or parse failure exits non-zero with the offending key
//! or path in the message.
mod args;
mod config;
mod logging;

use crate::args::{CliArgs, Commands};
use crate::config::ExportConfig;
use anyhow::{bail, Context};
use clap::Parser;
use geoexport_core::{Dataset, ExportOptions, Exporter, OutputPaths};

fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();

    let config = ExportConfig::from_env()
        .context("invalid configuration")?
        .apply_args(&args);
    logging::init_logging(config.log_filter.as_deref())?;
    tracing::debug!(?config, "effective configuration");

    let variant = config.dataset;
    let db = variant
        .load()
        .with_context(|| format!("failed to build the {variant} dataset"))?;

    match args.command {
        Commands::Export { stem } => {
            let stem = stem.as_deref().unwrap_or(variant.default_stem());
            let paths = OutputPaths::in_dir(&config.out_dir, stem);
            let options = ExportOptions::for_variant(variant).with_compression(config.compression);

            let summary = Exporter::new(db, options)
                .write_all(&paths)
                .context("export aborted")?;

            println!("Export of the {variant} dataset complete:");
            println!("  Countries: {}", summary.stats.countries);
            println!("  States/Regions: {}", summary.stats.regions);
            println!("  Cities: {}", summary.stats.cities);
            println!("Files:");
            for file in &summary.files {
                println!("  {} ({} bytes)", file.path.display(), file.bytes);
            }
        }

        Commands::Stats => {
            let stats = db.stats();
            println!("Dataset statistics ({variant}):");
            println!("  Countries: {}", stats.countries);
            println!("  States/Regions: {}", stats.regions);
            println!("  Cities: {}", stats.cities);
        }

        Commands::Countries => {
            for c in db.countries() {
                println!(
                    "{} ({}) - {} regions, {} cities",
                    c.name(),
                    c.code(),
                    c.total_regions(),
                    c.total_cities()
                );
            }
        }

        Commands::Regions { code } => match db.find_country_by_code(&code) {
            Some(c) => {
                println!("Regions in {}:", c.name());
                for r in c.regions() {
                    match r.code() {
                        Some(rc) => println!("- {} [{}] ({} cities)", r.name(), rc, r.total_cities()),
                        None => println!("- {} ({} cities)", r.name(), r.total_cities()),
                    }
                }
            }
            None => bail!("country {code} not found in the {variant} dataset"),
        },

        Commands::Cities { query } => {
            let matches = db.find_cities_by_substring(&query);
            if matches.is_empty() {
                println!("No cities found matching: {query}");
            } else {
                for e in matches {
                    println!("{} - {}, {}", e.city.name(), e.region.name(), e.country.name());
                }
            }
        }

        Commands::Verify { path } => {
            let loaded = Dataset::load_structured_record(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            if &loaded != db {
                bail!(
                    "{} does not match the built-in {variant} dataset",
                    path.display()
                );
            }
            let stats = loaded.stats();
            println!(
                "{} matches the {variant} dataset ({} regions, {} cities)",
                path.display(),
                stats.regions,
                stats.cities
            );
        }
    }

    Ok(())
}
