use crate::args::CliArgs;
use anyhow::{anyhow, bail};
use dotenvy::dotenv;
use geoexport_core::{CompressionMode, DatasetVariant};
use std::env;
use std::path::PathBuf;

/// Effective settings: defaults, overridden by the environment (and `.env`),
/// overridden by command-line flags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    pub dataset: DatasetVariant,
    pub out_dir: PathBuf,
    pub compression: CompressionMode,
    pub log_filter: Option<String>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            dataset: DatasetVariant::Mexico,
            out_dir: PathBuf::from("./out"),
            compression: CompressionMode::None,
            log_filter: None,
        }
    }
}

impl ExportConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let defaults = Self::default();

        let dataset = match lookup("GEOEXPORT_DATASET") {
            Some(value) => value
                .parse::<DatasetVariant>()
                .map_err(|e: String| anyhow!("GEOEXPORT_DATASET: {e}"))?,
            None => defaults.dataset,
        };

        let out_dir = lookup("GEOEXPORT_OUT_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or(defaults.out_dir);

        let compression = match lookup("GEOEXPORT_GZIP").as_deref().map(str::trim) {
            Some("1") | Some("true") | Some("yes") => CompressionMode::Gzip,
            Some("0") | Some("false") | Some("no") | Some("") | None => CompressionMode::None,
            Some(other) => bail!("GEOEXPORT_GZIP: expected true/false, got `{other}`"),
        };

        Ok(Self {
            dataset,
            out_dir,
            compression,
            log_filter: lookup("GEOEXPORT_LOG").filter(|s| !s.trim().is_empty()),
        })
    }

    pub fn apply_args(mut self, args: &CliArgs) -> Self {
        if let Some(dataset) = args.dataset {
            self.dataset = dataset.into();
        }
        if let Some(dir) = &args.out_dir {
            self.out_dir = dir.clone();
        }
        if args.gzip {
            self.compression = CompressionMode::Gzip;
        }
        if let Some(filter) = &args.log_level {
            self.log_filter = Some(filter.clone());
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let cfg = ExportConfig::from_lookup(|_| None).unwrap();
        assert_eq!(cfg, ExportConfig::default());
    }

    #[test]
    fn environment_values_are_read() {
        let cfg = ExportConfig::from_lookup(lookup_from(&[
            ("GEOEXPORT_DATASET", "Global"),
            ("GEOEXPORT_OUT_DIR", "/srv/geo"),
            ("GEOEXPORT_GZIP", "true"),
        ]))
        .unwrap();

        assert_eq!(cfg.dataset, DatasetVariant::Global);
        assert_eq!(cfg.out_dir, PathBuf::from("/srv/geo"));
        assert_eq!(cfg.compression, CompressionMode::Gzip);
    }

    #[test]
    fn bad_values_name_the_variable() {
        let err = ExportConfig::from_lookup(lookup_from(&[("GEOEXPORT_GZIP", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("GEOEXPORT_GZIP"));

        let err = ExportConfig::from_lookup(lookup_from(&[("GEOEXPORT_DATASET", "mars")])).unwrap_err();
        assert!(err.to_string().contains("GEOEXPORT_DATASET"));
    }

    #[test]
    fn flags_override_environment() {
        let env_cfg = ExportConfig::from_lookup(lookup_from(&[
            ("GEOEXPORT_DATASET", "global"),
            ("GEOEXPORT_OUT_DIR", "/srv/geo"),
        ]))
        .unwrap();
        let args = CliArgs::try_parse_from(["geoexport", "-d", "mexico", "-o", "/tmp/x", "stats"]).unwrap();

        let cfg = env_cfg.apply_args(&args);
        assert_eq!(cfg.dataset, DatasetVariant::Mexico);
        assert_eq!(cfg.out_dir, PathBuf::from("/tmp/x"));
    }
}
