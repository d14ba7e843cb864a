//! Error handling for CSV query operations.
//!
//! Provides typed errors for file loading, expression parsing, and
//! filter/aggregate evaluation. The core never recovers from these
//! internally; they propagate to the CLI boundary, which reports the
//! message and exits non-zero.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QueryError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Column not found: '{column}'")]
    ColumnNotFound { column: String },

    #[error("No comparison operator in expression '{expression}' (expected one of '>', '<', '=')")]
    OperatorNotFound { expression: String },

    #[error("Malformed aggregate expression '{expression}' (expected <column>=<function>)")]
    MalformedExpression { expression: String },

    #[error("Cannot compare {left} value with {right} value")]
    TypeMismatch {
        left: &'static str,
        right: &'static str,
    },

    #[error("Column '{column}' is not numeric: non-numeric value at row {row}")]
    NonNumericColumn { column: String, row: usize },

    #[error("Cannot compute '{function}' over an empty table")]
    EmptyTable { function: String },

    #[error("Unknown aggregate function '{name}' (expected one of avg, min, max)")]
    AggregateFunctionNotFound { name: String },
}

impl QueryError {
    /// Create a file not found error
    pub fn file_not_found(path: impl Into<PathBuf>) -> Self {
        Self::FileNotFound { path: path.into() }
    }

    /// Create a column not found error
    pub fn column_not_found(column: impl Into<String>) -> Self {
        Self::ColumnNotFound {
            column: column.into(),
        }
    }

    /// Create an operator not found error
    pub fn operator_not_found(expression: impl Into<String>) -> Self {
        Self::OperatorNotFound {
            expression: expression.into(),
        }
    }

    /// Create a malformed expression error
    pub fn malformed_expression(expression: impl Into<String>) -> Self {
        Self::MalformedExpression {
            expression: expression.into(),
        }
    }

    /// Create a non-numeric column error citing the offending row
    pub fn non_numeric_column(column: impl Into<String>, row: usize) -> Self {
        Self::NonNumericColumn {
            column: column.into(),
            row,
        }
    }

    /// Create an empty table error
    pub fn empty_table(function: impl Into<String>) -> Self {
        Self::EmptyTable {
            function: function.into(),
        }
    }

    /// Create an unknown aggregate function error
    pub fn aggregate_function_not_found(name: impl Into<String>) -> Self {
        Self::AggregateFunctionNotFound { name: name.into() }
    }
}

pub type Result<T> = std::result::Result<T, QueryError>;
