use clap::{Parser, Subcommand, ValueEnum};
use geoexport_core::DatasetVariant;
use std::path::PathBuf;

/// CLI arguments for geoexport
#[derive(Debug, Parser)]
#[command(
    name = "geoexport",
    version,
    about = "Export the built-in country/region/city tables as JSON, CSV and SQL"
)]
pub struct CliArgs {
    /// Dataset to work on [env: GEOEXPORT_DATASET, default: mexico]
    #[arg(short = 'd', long = "dataset", value_enum, global = true)]
    pub dataset: Option<DatasetArg>,

    /// Output directory for `export` [env: GEOEXPORT_OUT_DIR, default: ./out]
    #[arg(short = 'o', long = "out-dir", global = true)]
    pub out_dir: Option<PathBuf>,

    /// Gzip every output file (appends .gz) [env: GEOEXPORT_GZIP]
    #[arg(long = "gzip", global = true)]
    pub gzip: bool,

    /// Log filter, e.g. `info` or `geoexport_core=debug` [env: GEOEXPORT_LOG]
    #[arg(long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DatasetArg {
    Mexico,
    Global,
}

impl From<DatasetArg> for DatasetVariant {
    fn from(arg: DatasetArg) -> Self {
        match arg {
            DatasetArg::Mexico => DatasetVariant::Mexico,
            DatasetArg::Global => DatasetVariant::Global,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Write <stem>.json, <stem>.csv and <stem>.sql
    Export {
        /// File stem (default: mexico_cities / global_cities)
        #[arg(long)]
        stem: Option<String>,
    },

    /// Show region and city counts
    Stats,

    /// List all countries of the dataset
    Countries,

    /// List the regions of a country
    Regions {
        /// Country code (e.g. MX)
        code: String,
    },

    /// Search for cities containing a substring (accent/case-insensitive)
    Cities {
        query: String,
    },

    /// Check that a written JSON record matches the built-in dataset
    Verify {
        /// Path to a .json or .json.gz file
        path: PathBuf,
    },
}
