//! Command-line argument definitions for the CSV query tool
//!
//! This module defines the complete CLI interface using the clap derive
//! API. The tool is a single command: load a CSV file, optionally filter
//! and aggregate, then print the rendered table.

use clap::Parser;
use std::path::PathBuf;

use crate::render::{HeaderMode, TableFormat};

/// CLI arguments for the CSV query tool
///
/// Reads a CSV file with a header row into memory, optionally narrows the
/// rows with a comparison expression, optionally computes one aggregate
/// statistic over a numeric column, and prints the result as a table.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "csvquery",
    version,
    about = "Filter and aggregate CSV files with simple comparison expressions",
    long_about = "Reads a CSV file with a header row, optionally filters rows with a \
                  <column><op><value> expression (operators: >, <, =), optionally computes \
                  an aggregate (<column>=<avg|min|max>) over a numeric column, and prints \
                  the result as a formatted table."
)]
pub struct Args {
    /// Path to the CSV file to query
    ///
    /// Must have a header row; column names are inferred from it. Every
    /// field is typed as a number when it parses as one, text otherwise.
    #[arg(
        short = 'f',
        long = "file",
        value_name = "PATH",
        help = "Path to the CSV file to query"
    )]
    pub file: PathBuf,

    /// Filter expression of the form <column><op><value>
    ///
    /// Supported operators: >, <, =. The value is compared numerically
    /// when both sides are numbers, lexicographically when both are text.
    /// Examples: rating>4.5, brand=apple, price<500
    #[arg(
        long = "where",
        value_name = "EXPR",
        help = "Filter rows with a <column><op><value> expression"
    )]
    pub filter: Option<String>,

    /// Aggregate expression of the form <column>=<function>
    ///
    /// Supported functions: avg, min, max. The column must be numeric in
    /// every surviving row. Example: rating=avg
    #[arg(
        long = "aggregate",
        value_name = "EXPR",
        help = "Aggregate a numeric column with <column>=<avg|min|max>"
    )]
    pub aggregate: Option<String>,

    /// Visual style of the rendered table
    #[arg(
        long = "format",
        value_name = "STYLE",
        value_enum,
        default_value_t = TableFormat::Grid,
        help = "Table style: grid, pipe, or html"
    )]
    pub format: TableFormat,

    /// How the header row is chosen
    #[arg(
        long = "headers",
        value_name = "MODE",
        value_enum,
        default_value_t = HeaderMode::Keys,
        help = "Header mode: keys (column names) or firstrow"
    )]
    pub headers: HeaderMode,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose (debug) logging")]
    pub verbose: bool,

    /// Suppress all logging except warnings and errors
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        help = "Only log warnings and errors"
    )]
    pub quiet: bool,
}

impl Args {
    /// Log level implied by the verbosity flags
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else if self.quiet {
            "warn"
        } else {
            "info"
        }
    }
}
