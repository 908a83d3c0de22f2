//! Output formatting helpers for the CLI.
//!
//! JSON values for `--json`, table rows and report lines for people.

mod json;
mod text;

pub use json::{books_json, employees_json, print_json, report_json, sales_json};
pub use text::{
    book_rows, employee_rows, report_lines, sale_rows, BOOK_COLUMNS, EMPLOYEE_COLUMNS,
    SALE_COLUMNS,
};
