//! Test utilities and fixtures for table tests
//!
//! Provides a shared product-catalogue fixture and tempfile helpers used
//! across the table and query test modules.

use std::io::Write;
use tempfile::NamedTempFile;

use crate::table::Table;


/// Product catalogue fixture: 10 rows, 4 columns.
///
/// Known properties: 4 apple rows, 5 rows with rating > 4.5, 4 rows with
/// rating < 4.5, rating min 4.1, max 4.9, mean 4.49.
pub fn products_csv() -> String {
    "name,brand,price,rating\n\
     iphone 15 pro,apple,999,4.9\n\
     galaxy s23 ultra,samsung,1199,4.8\n\
     iphone 14,apple,799,4.7\n\
     redmi note 12,xiaomi,199,4.6\n\
     galaxy z flip 5,samsung,999,4.6\n\
     poco f5,xiaomi,399,4.5\n\
     iphone 13 mini,apple,599,4.3\n\
     galaxy a54,samsung,349,4.2\n\
     poco x5 pro,xiaomi,299,4.2\n\
     iphone se,apple,429,4.1\n"
        .to_string()
}

/// Fixture with a column that is numeric in early rows but text later on
pub fn mixed_column_csv() -> String {
    "name,stock\n\
     iphone,12\n\
     galaxy,7\n\
     redmi,unknown\n"
        .to_string()
}

/// Helper to create a temporary CSV file with given content
pub fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

/// Helper to load the product catalogue fixture into a table
pub fn products_table() -> Table {
    let temp_file = create_temp_csv(&products_csv());
    Table::from_path(temp_file.path()).unwrap()
}
