//! Tests for filter expression parsing

use crate::error::QueryError;
use crate::query::expression::{Expression, Operator};
use crate::table::value::CellValue;

#[test]
fn test_parse_greater_than_with_numeric_value() {
    let expression = Expression::parse("rating>4.5").unwrap();

    assert_eq!(expression.column, "rating");
    assert_eq!(expression.operator, Operator::Gt);
    assert_eq!(expression.value, CellValue::Number(4.5));
}

#[test]
fn test_parse_equality_with_text_value() {
    let expression = Expression::parse("brand=apple").unwrap();

    assert_eq!(expression.column, "brand");
    assert_eq!(expression.operator, Operator::Eq);
    assert_eq!(expression.value, CellValue::Text("apple".to_string()));
}

#[test]
fn test_parse_less_than() {
    let expression = Expression::parse("price<500").unwrap();

    assert_eq!(expression.column, "price");
    assert_eq!(expression.operator, Operator::Lt);
    assert_eq!(expression.value, CellValue::Number(500.0));
}

#[test]
fn test_parse_without_operator() {
    let error = Expression::parse("b").unwrap_err();

    assert!(matches!(
        error,
        QueryError::OperatorNotFound { ref expression } if expression == "b"
    ));
}

#[test]
fn test_operator_priority_prefers_greater_than() {
    // '>' outranks '=' even though '=' appears first in the string
    let expression = Expression::parse("a=b>c").unwrap();

    assert_eq!(expression.column, "a=b");
    assert_eq!(expression.operator, Operator::Gt);
    assert_eq!(expression.value, CellValue::Text("c".to_string()));
}

#[test]
fn test_split_on_first_operator_occurrence() {
    let expression = Expression::parse("a>b>c").unwrap();

    assert_eq!(expression.column, "a");
    assert_eq!(expression.operator, Operator::Gt);
    assert_eq!(expression.value, CellValue::Text("b>c".to_string()));
}

#[test]
fn test_empty_column_and_empty_value_are_not_validated() {
    let no_column = Expression::parse(">4.5").unwrap();
    assert_eq!(no_column.column, "");
    assert_eq!(no_column.value, CellValue::Number(4.5));

    let no_value = Expression::parse("brand=").unwrap();
    assert_eq!(no_value.column, "brand");
    assert_eq!(no_value.value, CellValue::Text(String::new()));
}

#[test]
fn test_value_uses_numeric_inference() {
    let scientific = Expression::parse("price<1e3").unwrap();
    assert_eq!(scientific.value, CellValue::Number(1000.0));

    let unit_suffix = Expression::parse("weight>4.5kg").unwrap();
    assert_eq!(unit_suffix.value, CellValue::Text("4.5kg".to_string()));
}
