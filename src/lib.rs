//! CSV Query Library
//!
//! A small library for loading CSV files into an in-memory table,
//! filtering rows with simple comparison expressions, and computing
//! aggregate statistics over numeric columns.
//!
//! This library provides tools for:
//! - Loading CSV files with a header row into typed records
//! - Eager numeric inference on every field (number vs. text)
//! - Filtering rows with `<column><op><value>` expressions (`>`, `<`, `=`)
//! - Aggregating numeric columns with `<column>=<avg|min|max>` expressions
//! - Rendering results as grid, pipe, or HTML tables

pub mod error;
pub mod query;
pub mod render;
pub mod table;

// CLI modules
pub mod cli {
    pub mod args;
    pub mod commands;
}

// Re-export commonly used types
pub use error::{QueryError, Result};
pub use table::{Record, Table, value::CellValue};
