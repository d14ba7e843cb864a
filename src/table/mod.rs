//! In-memory CSV table
//!
//! The table owns the full dataset for the lifetime of one CLI run. It is
//! organized into logical components:
//! - [`value`] - typed cell values with eager numeric inference
//! - [`record`] - single rows with ordered, name-based field access
//! - this module - the table container: loading, filtering, aggregation
//!
//! Filtering replaces the record sequence with a subset. Aggregation only
//! replaces the presentation state: the underlying records are untouched,
//! so later operations still see real rows.

pub mod record;
pub mod value;

#[cfg(test)]
pub mod tests;

use std::path::Path;

use tracing::{debug, info};

use crate::error::{QueryError, Result};
use crate::query::evaluator;

pub use record::Record;
pub use value::CellValue;

/// Single-key aggregate result, labelled `<column>_<function>`
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateResult {
    pub label: String,
    pub value: f64,
}

/// The full in-memory dataset plus at most one aggregate result
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<String>,
    records: Vec<Record>,
    aggregated: Option<AggregateResult>,
}

impl Table {
    /// Load a table from a CSV file with a header row.
    ///
    /// The whole file is read at once; the handle is released as soon as
    /// loading finishes. Column names come from the header, and every
    /// field goes through numeric inference as it is read.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(QueryError::file_not_found(path));
        }

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .from_path(path)?;

        let columns: Vec<String> = reader.headers()?.iter().map(|name| name.to_string()).collect();
        debug!("Header columns: {:?}", columns);

        let mut records = Vec::new();
        for result in reader.records() {
            let raw = result?;
            records.push(Record::from_raw_fields(&columns, raw.iter()));
        }

        info!(
            "Loaded {} records ({} columns) from {}",
            records.len(),
            columns.len(),
            path.display()
        );

        Ok(Self {
            columns,
            records,
            aggregated: None,
        })
    }

    /// Build a table directly from columns and records (used by tests)
    pub fn from_parts(columns: Vec<String>, records: Vec<Record>) -> Self {
        Self {
            columns,
            records,
            aggregated: None,
        }
    }

    /// Keep only the records matching a `<column><op><value>` condition
    pub fn filter(&mut self, condition: &str) -> Result<()> {
        evaluator::apply_filter(self, condition)
    }

    /// Compute a `<column>=<avg|min|max>` statistic over the current records
    pub fn aggregate(&mut self, condition: &str) -> Result<()> {
        evaluator::apply_aggregate(self, condition)
    }

    /// Column names in header order
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// The current record sequence
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The aggregate result, if one has been computed
    pub fn aggregated(&self) -> Option<&AggregateResult> {
        self.aggregated.as_ref()
    }

    /// Number of records currently in the table
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub(crate) fn replace_records(&mut self, records: Vec<Record>) {
        self.records = records;
    }

    pub(crate) fn set_aggregated(&mut self, result: AggregateResult) {
        self.aggregated = Some(result);
    }
}
