//! Typed records for employees, books and sales.
//!
//! Each entity converts to and from a [`Record`], the generic field mapping
//! used by the persisted document. Construction from a record never fails:
//! every field has a documented default that is substituted when the field is
//! absent or has the wrong JSON type.

mod book;
mod employee;
mod sale;

pub use book::{validate_publication_year, Book, BookId, NewBook, MIN_PUBLICATION_YEAR};
pub use employee::Employee;
pub use sale::{BookReference, Sale};

use serde_json::{Map, Value};

/// A single persisted entity as a JSON object.
pub type Record = Map<String, Value>;

// Field readers. Each one is a row of an entity's field-presence table.

pub(crate) fn text_field(record: &Record, key: &str) -> String {
    record
        .get(key)
        .and_then(Value::as_str)
        .map(String::from)
        .unwrap_or_default()
}

/// Integers, and floats with no fractional part (`2020.0`).
pub(crate) fn integer_field(record: &Record, key: &str) -> i32 {
    let Some(value) = record.get(key) else {
        return 0;
    };
    let whole = value
        .as_i64()
        .or_else(|| value.as_f64().filter(|n| n.fract() == 0.0).map(|n| n as i64));
    whole.and_then(|n| i32::try_from(n).ok()).unwrap_or(0)
}

pub(crate) fn number_field(record: &Record, key: &str) -> f64 {
    record
        .get(key)
        .and_then(Value::as_f64)
        .unwrap_or(0.0)
}

pub(crate) fn id_field(record: &Record, key: &str) -> Option<u64> {
    record.get(key).and_then(Value::as_u64)
}
