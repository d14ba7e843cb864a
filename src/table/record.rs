//! Single-row record with ordered column access
//!
//! A record is an ordered mapping from column name to cell value,
//! preserving the CSV header order. Field lookup by name is the only
//! access path the evaluator uses, and a missing column is a typed
//! error rather than a panic.

use crate::error::{QueryError, Result};
use crate::table::value::CellValue;

/// One logical row of the table
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: Vec<(String, CellValue)>,
}

impl Record {
    /// Build a record by pairing header columns with raw field values.
    ///
    /// Each raw field goes through numeric inference exactly once here;
    /// the record is never mutated afterwards.
    pub fn from_raw_fields<'a, I>(columns: &[String], raw_fields: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let fields = columns
            .iter()
            .zip(raw_fields)
            .map(|(column, raw)| (column.clone(), CellValue::from_raw(raw)))
            .collect();

        Self { fields }
    }

    /// Look up a field by column name
    pub fn get(&self, column: &str) -> Result<&CellValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
            .ok_or_else(|| QueryError::column_not_found(column))
    }

    /// Field values in column order
    pub fn values(&self) -> impl Iterator<Item = &CellValue> {
        self.fields.iter().map(|(_, value)| value)
    }

    /// Column names in field order
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
