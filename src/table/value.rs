//! Cell value representation with eager numeric inference
//!
//! Every raw CSV field is converted once, at load time, into either a
//! number or a text value. Conversion is total: a field that does not
//! parse as a finite float keeps its original string unchanged.

use std::fmt;

/// A single table field, either numeric or textual
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
}

impl CellValue {
    /// Convert a raw CSV field into a typed cell value.
    ///
    /// The full string must parse as a finite floating-point literal
    /// (integers, decimals, scientific notation) to become a number.
    /// No trimming is applied, so `" 4.5"` stays text, as do `inf` and
    /// `NaN` literals.
    pub fn from_raw(raw: &str) -> Self {
        match raw.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::Number(value),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// Whether this value is numeric
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(_))
    }

    /// The numeric value, if this cell holds one
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Text(_) => None,
        }
    }

    /// Human-readable name of the value's type, used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "numeric",
            Self::Text(_) => "text",
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{}", value),
            Self::Text(value) => write!(f, "{}", value),
        }
    }
}
