//! Filter and aggregate evaluation
//!
//! Applies parsed expressions to the table. Comparison is only defined
//! between values of the same type: comparing a number with text is a
//! typed error, never a silent `false`. Aggregation requires every value
//! in the target column to be numeric and fails fast naming the first
//! offending row.

use std::fmt;
use std::str::FromStr;

use tracing::{debug, info};

use crate::error::{QueryError, Result};
use crate::table::value::CellValue;
use crate::table::{AggregateResult, Table};

use super::expression::{Expression, Operator};

/// Compare two cell values under the given operator.
///
/// Numbers use the native `f64` ordering, text uses lexicographic
/// ordering. Mixed-type comparison has no defined ordering and fails
/// with a type mismatch.
pub fn compare(a: &CellValue, b: &CellValue, operator: Operator) -> Result<bool> {
    match (a, b) {
        (CellValue::Number(x), CellValue::Number(y)) => Ok(match operator {
            Operator::Gt => x > y,
            Operator::Lt => x < y,
            Operator::Eq => x == y,
        }),
        (CellValue::Text(x), CellValue::Text(y)) => Ok(match operator {
            Operator::Gt => x > y,
            Operator::Lt => x < y,
            Operator::Eq => x == y,
        }),
        (left, right) => Err(QueryError::TypeMismatch {
            left: left.type_name(),
            right: right.type_name(),
        }),
    }
}

/// Filter the table's records in place with a `<column><op><value>` condition.
///
/// Retains exactly the records satisfying the comparison, preserving their
/// relative order. Parse, lookup, and comparison errors all propagate; a
/// condition matching zero rows leaves an empty, still-renderable table.
pub fn apply_filter(table: &mut Table, condition: &str) -> Result<()> {
    let expression = Expression::parse(condition)?;
    debug!("Parsed filter expression: {:?}", expression);

    let before = table.len();
    let mut retained = Vec::new();
    for record in table.records() {
        let field = record.get(&expression.column)?;
        if compare(field, &expression.value, expression.operator)? {
            retained.push(record.clone());
        }
    }

    info!(
        "Filter '{}' retained {} of {} records",
        condition,
        retained.len(),
        before
    );
    table.replace_records(retained);
    Ok(())
}

/// Aggregate statistic over a numeric column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateFunction {
    Avg,
    Min,
    Max,
}

impl FromStr for AggregateFunction {
    type Err = QueryError;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "avg" => Ok(Self::Avg),
            "min" => Ok(Self::Min),
            "max" => Ok(Self::Max),
            _ => Err(QueryError::aggregate_function_not_found(name)),
        }
    }
}

impl fmt::Display for AggregateFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Avg => write!(f, "avg"),
            Self::Min => write!(f, "min"),
            Self::Max => write!(f, "max"),
        }
    }
}

impl AggregateFunction {
    fn compute(&self, values: &[f64]) -> f64 {
        match self {
            Self::Min => values.iter().copied().fold(f64::INFINITY, f64::min),
            Self::Max => values.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            Self::Avg => values.iter().sum::<f64>() / values.len() as f64,
        }
    }
}

/// Compute a `<column>=<function>` aggregate over the table's records.
///
/// Stores the result as a single `<column>_<function>` entry replacing the
/// table's presentation state; the record sequence itself is untouched.
pub fn apply_aggregate(table: &mut Table, condition: &str) -> Result<()> {
    let (column, function_name) = condition
        .split_once('=')
        .ok_or_else(|| QueryError::malformed_expression(condition))?;
    let function: AggregateFunction = function_name.parse()?;

    if table.is_empty() {
        return Err(QueryError::empty_table(function_name));
    }

    // Every row must hold a number for the column, not just the first.
    let mut values = Vec::with_capacity(table.len());
    for (row, record) in table.records().iter().enumerate() {
        match record.get(column)? {
            CellValue::Number(value) => values.push(*value),
            CellValue::Text(_) => return Err(QueryError::non_numeric_column(column, row)),
        }
    }

    let value = function.compute(&values);
    info!("Aggregate '{}' over {} records: {}", condition, values.len(), value);

    table.set_aggregated(AggregateResult {
        label: format!("{}_{}", column, function),
        value,
    });
    Ok(())
}
