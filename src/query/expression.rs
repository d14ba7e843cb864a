//! Filter expression parsing
//!
//! A filter condition has the shape `<column><op><value>` with a single
//! comparison operator drawn from `>`, `<`, `=`. Parsing is deliberately
//! permissive: the column name is the exact substring left of the operator
//! (no trimming, may be empty) and the value goes through the same numeric
//! inference as CSV fields.

use crate::error::{QueryError, Result};
use crate::table::value::CellValue;

/// Comparison operator in a filter expression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Gt,
    Lt,
    Eq,
}

/// Operator scan order. The first operator in this priority order found
/// anywhere in the condition wins, so `>` beats `=` when both appear.
const OPERATORS: [(char, Operator); 3] = [
    ('>', Operator::Gt),
    ('<', Operator::Lt),
    ('=', Operator::Eq),
];

/// A parsed filter condition: column, operator, comparison value
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    pub column: String,
    pub operator: Operator,
    pub value: CellValue,
}

impl Expression {
    /// Parse a `<column><op><value>` condition string.
    ///
    /// Splits on the first occurrence of the selected operator; everything
    /// after it is the comparison value, so a condition like `a>b=c`
    /// parses as column `a`, operator `>`, text value `b=c`.
    pub fn parse(condition: &str) -> Result<Self> {
        for (symbol, operator) in OPERATORS {
            if let Some(position) = condition.find(symbol) {
                let column = &condition[..position];
                let raw_value = &condition[position + symbol.len_utf8()..];

                return Ok(Self {
                    column: column.to_string(),
                    operator,
                    value: CellValue::from_raw(raw_value),
                });
            }
        }

        Err(QueryError::operator_not_found(condition))
    }
}
