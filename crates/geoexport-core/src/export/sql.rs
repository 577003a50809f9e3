// crates/geoexport-core/src/export/sql.rs

//! Statement batch (SQL) projection.
//!
//! Output is text meant for an external database tool. Every string value is
//! wrapped in [`SqlValue::Text`], and `Text` only renders through
//! [`escape_sql_literal`], so no literal reaches the batch unescaped.

use super::table::bool_text;
use super::Terminology;
use crate::error::{ExportError, Result};
use crate::model::{Country, Dataset, Region};
use std::borrow::Cow;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SqlLayout {
    /// Regions first, then cities referencing them by code. Every region
    /// needs a code.
    #[default]
    Normalized,
    /// One denormalized `locations` block.
    Locations,
}

/// Double every single quote: `O'Hara` -> `O''Hara`.
pub fn escape_sql_literal(s: &str) -> Cow<'_, str> {
    if s.contains('\'') {
        Cow::Owned(s.replace('\'', "''"))
    } else {
        Cow::Borrowed(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SqlValue {
    Text(String),
    Bool(bool),
}

impl SqlValue {
    pub fn text(s: impl Into<String>) -> Self {
        SqlValue::Text(s.into())
    }
}

impl fmt::Display for SqlValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SqlValue::Text(s) => write!(f, "'{}'", escape_sql_literal(s)),
            SqlValue::Bool(b) => f.write_str(bool_text(*b)),
        }
    }
}

/// One multi-row `INSERT` for a single entity type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertStatement {
    pub comment: String,
    pub table: &'static str,
    pub columns: Vec<&'static str>,
    pub rows: Vec<Vec<SqlValue>>,
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- {}", one_line(&self.comment))?;
        // `VALUES` with nothing after it is not valid SQL.
        if self.rows.is_empty() {
            return writeln!(f, "-- (no rows for {})", self.table);
        }

        writeln!(
            f,
            "INSERT INTO {} ({}) VALUES",
            self.table,
            self.columns.join(", ")
        )?;
        for (i, row) in self.rows.iter().enumerate() {
            f.write_str("  (")?;
            for (j, value) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{value}")?;
            }
            f.write_str(if i + 1 == self.rows.len() { ");\n" } else { "),\n" })?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatementBatch {
    pub title: String,
    pub statements: Vec<InsertStatement>,
}

impl StatementBatch {
    pub fn row_count(&self) -> usize {
        self.statements.iter().map(|s| s.rows.len()).sum()
    }
}

impl fmt::Display for StatementBatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "-- SQL INSERT statements: {}", one_line(&self.title))?;
        writeln!(f, "-- Generated by geoexport")?;
        for statement in &self.statements {
            writeln!(f)?;
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

// A newline inside a `--` comment would turn the rest into live SQL.
fn one_line(s: &str) -> Cow<'_, str> {
    if s.contains(['\n', '\r']) {
        Cow::Owned(s.replace(['\n', '\r'], " "))
    } else {
        Cow::Borrowed(s)
    }
}

/// Build the batch for `layout`.
///
/// [`SqlLayout::Normalized`] links each city to its region by code, so a
/// region without one is [`ExportError::InvalidData`]. Use
/// [`SqlLayout::Locations`] for codeless tables.
pub fn to_statement_batch(
    dataset: &Dataset,
    layout: SqlLayout,
    terms: Terminology,
    title: &str,
) -> Result<StatementBatch> {
    let statements = match layout {
        SqlLayout::Normalized => vec![region_block(dataset, terms)?, city_block(dataset, terms)?],
        SqlLayout::Locations => vec![location_block(dataset, terms)],
    };
    Ok(StatementBatch {
        title: title.to_owned(),
        statements,
    })
}

fn region_code<'a>(country: &Country, region: &'a Region) -> Result<&'a str> {
    region.code().ok_or_else(|| {
        ExportError::InvalidData(format!(
            "region `{}` of {} has no code; the normalized SQL layout needs one to link its cities",
            region.name, country.name
        ))
    })
}

fn region_block(dataset: &Dataset, terms: Terminology) -> Result<InsertStatement> {
    let rows = dataset
        .countries
        .iter()
        .flat_map(|country| {
            country.regions.iter().map(move |region| -> Result<Vec<SqlValue>> {
                Ok(vec![
                    SqlValue::text(region_code(country, region)?),
                    SqlValue::text(region.name.as_str()),
                    SqlValue::text(country.code.as_str()),
                ])
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(InsertStatement {
        comment: format!("Insert {}", terms.plural()),
        table: terms.plural(),
        columns: vec!["code", "name", "country_code"],
        rows,
    })
}

fn city_block(dataset: &Dataset, terms: Terminology) -> Result<InsertStatement> {
    let rows = dataset
        .cities()
        .map(|e| -> Result<Vec<SqlValue>> {
            Ok(vec![
                SqlValue::text(e.city.name.as_str()),
                SqlValue::text(region_code(e.country, e.region)?),
                SqlValue::text(e.country.code.as_str()),
                SqlValue::Bool(e.city.is_major),
            ])
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(InsertStatement {
        comment: "Insert principal cities".to_owned(),
        table: "cities",
        columns: vec!["name", terms.code_key(), "country_code", "is_major"],
        rows,
    })
}

fn location_block(dataset: &Dataset, terms: Terminology) -> InsertStatement {
    let rows = dataset
        .cities()
        .map(|e| {
            vec![
                SqlValue::text(e.country.name.as_str()),
                SqlValue::text(e.country.code.as_str()),
                SqlValue::text(e.region.name.as_str()),
                SqlValue::text(e.city.name.as_str()),
                SqlValue::Bool(e.city.is_major),
            ]
        })
        .collect();

    InsertStatement {
        comment: "Insert locations".to_owned(),
        table: "locations",
        columns: vec!["country", "country_code", terms.singular(), "city", "is_major"],
        rows,
    }
}
