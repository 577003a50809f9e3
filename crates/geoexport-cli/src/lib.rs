//! geoexport-cli
//! =============
//!
//! Command-line interface for the `geoexport-core` reference datasets.
//!
//! This crate primarily provides a binary (`geoexport`). We include a small
//! library target so that docs.rs renders a documentation page and shows this
//! overview.
//!
//! Quick start
//! -----------
//!
//! ```text
//! geoexport --help
//! geoexport export                          # ./out/mexico_cities.{json,csv,sql}
//! geoexport --dataset global -o /tmp/geo export
//! geoexport --gzip export --stem mx         # ./out/mx.json.gz, ...
//! geoexport stats
//! geoexport regions MX
//! geoexport cities leon
//! geoexport verify ./out/mexico_cities.json
//! ```
//!
//! Configuration
//! -------------
//!
//! `GEOEXPORT_DATASET`, `GEOEXPORT_OUT_DIR`, `GEOEXPORT_GZIP` and
//! `GEOEXPORT_LOG` are read from the environment (and a `.env` file);
//! command-line flags take precedence.
//!
//! For programmatic access use the [`geoexport-core`] crate directly.
#![cfg_attr(docsrs, feature(doc_cfg))]

// This library target intentionally exposes no API; the binary is the primary
// deliverable.
