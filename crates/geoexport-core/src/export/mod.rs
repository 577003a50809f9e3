// crates/geoexport-core/src/export/mod.rs

//! # Exporters
//!
//! Three pure projections of a [`Dataset`] plus the step that persists them:
//!
//! - [`record`]: nested structured record (JSON)
//! - [`table`]: one row per city (CSV)
//! - [`sql`]: `INSERT` statement batch (SQL text, never executed)
//! - [`writer`]: scoped file output, optional gzip
//!
//! All projections walk the dataset in insertion order, so identical input
//! always renders byte-identical output.

pub mod record;
pub mod sql;
pub mod table;
pub mod writer;

use crate::data::DatasetVariant;
use crate::error::Result;
use crate::model::Dataset;
use tracing::{debug, info};

pub use record::{parse_structured_record, RecordShape, StructuredRecord};
pub use sql::{escape_sql_literal, InsertStatement, SqlLayout, SqlValue, StatementBatch};
pub use table::{FlatTable, TableLayout};
pub use writer::{CompressionMode, ExportSummary, OutputFormat, OutputPaths, WrittenFile};

/// Vocabulary used for the middle level of the hierarchy in keys, columns
/// and table names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminology {
    /// `state`, `states`, `state_code`, ...
    #[default]
    States,
    /// `region`, `regions`, `region_code`, ...
    Regions,
}

impl Terminology {
    pub fn singular(self) -> &'static str {
        match self {
            Terminology::States => "state",
            Terminology::Regions => "region",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            Terminology::States => "states",
            Terminology::Regions => "regions",
        }
    }

    pub fn total_key(self) -> &'static str {
        match self {
            Terminology::States => "total_states",
            Terminology::Regions => "total_regions",
        }
    }

    pub fn code_key(self) -> &'static str {
        match self {
            Terminology::States => "state_code",
            Terminology::Regions => "region_code",
        }
    }

    pub fn name_key(self) -> &'static str {
        match self {
            Terminology::States => "state_name",
            Terminology::Regions => "region_name",
        }
    }
}

/// Per-call-site choices for the three formats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOptions {
    /// Written into the SQL comment header.
    pub title: String,
    pub terminology: Terminology,
    pub record_shape: RecordShape,
    pub table_layout: TableLayout,
    pub sql_layout: SqlLayout,
    pub compression: CompressionMode,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            title: "Principal cities".to_owned(),
            terminology: Terminology::States,
            record_shape: RecordShape::Collection,
            table_layout: TableLayout::RegionFirst,
            sql_layout: SqlLayout::Normalized,
            compression: CompressionMode::None,
        }
    }
}

impl ExportOptions {
    /// The layouts each built-in dataset has always been exported with.
    pub fn for_variant(variant: DatasetVariant) -> Self {
        Self {
            title: variant.title().to_owned(),
            terminology: variant.terminology(),
            record_shape: variant.record_shape(),
            table_layout: variant.table_layout(),
            sql_layout: variant.sql_layout(),
            compression: CompressionMode::None,
        }
    }

    pub fn with_compression(mut self, compression: CompressionMode) -> Self {
        self.compression = compression;
        self
    }
}

/// The Geo-Hierarchy Exporter: a read-only dataset plus its output options.
#[derive(Debug, Clone)]
pub struct Exporter<'a> {
    dataset: &'a Dataset,
    options: ExportOptions,
}

impl<'a> Exporter<'a> {
    pub fn new(dataset: &'a Dataset, options: ExportOptions) -> Self {
        Self { dataset, options }
    }

    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    pub fn to_structured_record(&self) -> Result<StructuredRecord<'a>> {
        record::to_structured_record(
            self.dataset,
            self.options.terminology,
            self.options.record_shape,
        )
    }

    pub fn to_flat_table(&self) -> FlatTable {
        table::to_flat_table(
            self.dataset,
            self.options.table_layout,
            self.options.terminology,
        )
    }

    pub fn to_statement_batch(&self) -> Result<StatementBatch> {
        sql::to_statement_batch(
            self.dataset,
            self.options.sql_layout,
            self.options.terminology,
            &self.options.title,
        )
    }

    /// Render one format to the exact bytes that land on disk (before
    /// compression).
    pub fn render(&self, format: OutputFormat) -> Result<Vec<u8>> {
        let bytes = match format {
            OutputFormat::Json => self.to_structured_record()?.to_json_bytes()?,
            OutputFormat::Csv => self.to_flat_table().to_csv_bytes()?,
            OutputFormat::Sql => self.to_statement_batch()?.to_string().into_bytes(),
        };
        debug!(format = %format, bytes = bytes.len(), "rendered output");
        Ok(bytes)
    }

    /// Render all three formats, then persist them. Nothing is written unless
    /// every format rendered; writing stops at the first failure.
    pub fn write_all(&self, paths: &OutputPaths) -> Result<ExportSummary> {
        let rendered = OutputFormat::ALL
            .into_iter()
            .map(|format| -> Result<(OutputFormat, Vec<u8>)> {
                Ok((format, self.render(format)?))
            })
            .collect::<Result<Vec<_>>>()?;

        let mut files = Vec::with_capacity(rendered.len());
        for (format, contents) in rendered {
            let path = paths.resolve(format, self.options.compression);
            let bytes = writer::write_output(&path, &contents, self.options.compression)?;
            info!(path = %path.display(), bytes, "wrote {format} output");
            files.push(WrittenFile {
                format,
                path,
                bytes,
            });
        }

        Ok(ExportSummary {
            stats: self.dataset.stats(),
            files,
        })
    }
}
