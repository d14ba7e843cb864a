//! Tests for expression parsing and evaluation
//!
//! Table fixtures come from the shared helpers in `crate::table::tests`.

mod expression_tests;
