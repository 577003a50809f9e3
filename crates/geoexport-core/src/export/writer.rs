// crates/geoexport-core/src/export/writer.rs
use crate::common::ExportStats;
use crate::error::{ExportError, Result};
use std::fmt;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

#[cfg(feature = "compact")]
use flate2::{write::GzEncoder, Compression};

// -----------------------------------------------------------------------------
// CONFIGURATION
// -----------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CompressionMode {
    Gzip,
    #[default]
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    Json,
    Csv,
    Sql,
}

impl OutputFormat {
    /// Write order.
    pub const ALL: [OutputFormat; 3] = [OutputFormat::Json, OutputFormat::Csv, OutputFormat::Sql];

    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Sql => "sql",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Destination of each format. Set individually or derive all three from a
/// directory and a file stem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub json: PathBuf,
    pub csv: PathBuf,
    pub sql: PathBuf,
}

impl OutputPaths {
    /// `<dir>/<stem>.json`, `<dir>/<stem>.csv`, `<dir>/<stem>.sql`
    pub fn in_dir(dir: impl AsRef<Path>, stem: &str) -> Self {
        let dir = dir.as_ref();
        let path = |format: OutputFormat| dir.join(format!("{stem}.{}", format.extension()));
        Self {
            json: path(OutputFormat::Json),
            csv: path(OutputFormat::Csv),
            sql: path(OutputFormat::Sql),
        }
    }

    pub fn get(&self, format: OutputFormat) -> &Path {
        match format {
            OutputFormat::Json => &self.json,
            OutputFormat::Csv => &self.csv,
            OutputFormat::Sql => &self.sql,
        }
    }

    /// The path actually written: gzip appends `.gz`.
    pub fn resolve(&self, format: OutputFormat, compression: CompressionMode) -> PathBuf {
        let path = self.get(format);
        match compression {
            CompressionMode::None => path.to_path_buf(),
            CompressionMode::Gzip => {
                let mut name = path.as_os_str().to_owned();
                name.push(".gz");
                PathBuf::from(name)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub format: OutputFormat,
    pub path: PathBuf,
    /// Uncompressed size.
    pub bytes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub stats: ExportStats,
    pub files: Vec<WrittenFile>,
}

// -----------------------------------------------------------------------------
// WRITER
// -----------------------------------------------------------------------------

/// Create (or truncate) `path` and write `contents`, creating the parent
/// directory if needed. The file is flushed before returning and closed when
/// the writer drops, on success and on error alike.
///
/// Every I/O failure is reported with the path it happened on. An unsupported
/// compression mode is rejected before anything is created.
pub fn write_output(path: &Path, contents: &[u8], compression: CompressionMode) -> Result<usize> {
    #[cfg(not(feature = "compact"))]
    {
        if compression == CompressionMode::Gzip {
            return Err(ExportError::InvalidData(format!(
                "cannot write {}: gzip requested but 'compact' is disabled",
                path.display()
            )));
        }
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| ExportError::io(parent, e))?;
    }

    let file = File::create(path).map_err(|e| ExportError::io(path, e))?;
    let mut writer = BufWriter::new(file);

    match compression {
        CompressionMode::Gzip => {
            // Without 'compact' this arm is unreachable; rejected above.
            #[cfg(feature = "compact")]
            {
                // GzEncoder leaves the header mtime at zero, so reruns stay byte-identical.
                let mut encoder = GzEncoder::new(&mut writer, Compression::default());
                encoder
                    .write_all(contents)
                    .map_err(|e| ExportError::io(path, e))?;
                encoder.finish().map_err(|e| ExportError::io(path, e))?;
            }
        }
        CompressionMode::None => {
            writer
                .write_all(contents)
                .map_err(|e| ExportError::io(path, e))?;
        }
    }

    writer.flush().map_err(|e| ExportError::io(path, e))?;
    Ok(contents.len())
}
