//! Expression parsing and evaluation
//!
//! The query layer turns a raw condition string into a structured
//! expression and applies it to the table:
//! - [`expression`] - `<column><op><value>` parsing into a typed triple
//! - [`evaluator`] - comparison semantics, row filtering, aggregation

pub mod evaluator;
pub mod expression;

#[cfg(test)]
pub mod tests;

pub use evaluator::AggregateFunction;
pub use expression::{Expression, Operator};
