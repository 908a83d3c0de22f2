use std::fmt;

use chrono::NaiveDate;
use serde_json::Value;

use super::{id_field, number_field, text_field, BookId, Record};
use crate::date::parse_date;
use crate::error::Result;

/// How a stored sale names its book.
///
/// Older documents reference books by title; current ones by id. The variant
/// is resolved once, at load time, into `Option<BookId>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookReference {
    Id(BookId),
    LegacyTitle(String),
    Unresolved,
}

impl BookReference {
    /// `book_id` wins when it is a valid integer; otherwise fall back to
    /// the legacy `book_title` field.
    pub fn from_record(record: &Record) -> Self {
        if let Some(id) = id_field(record, "book_id") {
            return Self::Id(id);
        }
        match record.get("book_title").and_then(Value::as_str) {
            Some(title) => Self::LegacyTitle(title.to_string()),
            None => Self::Unresolved,
        }
    }

    /// Resolve to a canonical id, looking titles up with `find_title`.
    pub fn resolve(self, find_title: impl FnOnce(&str) -> Option<BookId>) -> Option<BookId> {
        match self {
            Self::Id(id) => Some(id),
            Self::LegacyTitle(title) => find_title(&title),
            Self::Unresolved => None,
        }
    }
}

/// A sale transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct Sale {
    /// Free-text reference to an employee; not enforced.
    pub employee_name: String,
    /// `None` when the stored reference could not be resolved.
    pub book_id: Option<BookId>,
    /// Kept as written (`YYYY-MM-DD`); parsed on demand so malformed
    /// stored dates survive a load/save cycle.
    pub sale_date: String,
    /// Transacted price, independent of the book's nominal sale price.
    pub real_price: f64,
}

impl Sale {
    pub fn new(
        employee_name: impl Into<String>,
        book_id: BookId,
        sale_date: impl Into<String>,
        real_price: f64,
    ) -> Self {
        Self {
            employee_name: employee_name.into(),
            book_id: Some(book_id),
            sale_date: sale_date.into(),
            real_price,
        }
    }

    pub fn date(&self) -> Result<NaiveDate> {
        parse_date(&self.sale_date)
    }

    /// Build a sale from a stored record and its already-resolved book id.
    pub fn from_record(record: &Record, book_id: Option<BookId>) -> Self {
        Self {
            employee_name: text_field(record, "employee_name"),
            book_id,
            sale_date: text_field(record, "sale_date"),
            real_price: number_field(record, "real_price"),
        }
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert(
            "employee_name".into(),
            Value::from(self.employee_name.as_str()),
        );
        record.insert(
            "book_id".into(),
            self.book_id.map(Value::from).unwrap_or(Value::Null),
        );
        record.insert("sale_date".into(), Value::from(self.sale_date.as_str()));
        record.insert("real_price".into(), Value::from(self.real_price));
        record
    }
}

impl fmt::Display for Sale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.book_id {
            Some(id) => write!(f, "{}: book #{}", self.sale_date, id)?,
            None => write!(f, "{}: unknown book", self.sale_date)?,
        }
        write!(f, " sold by {} for {}$", self.employee_name, self.real_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn reference(value: Value) -> BookReference {
        BookReference::from_record(value.as_object().unwrap())
    }

    #[test]
    fn test_reference_prefers_id() {
        assert_eq!(
            reference(json!({"book_id": 4, "book_title": "T"})),
            BookReference::Id(4)
        );
    }

    #[test]
    fn test_reference_falls_back_to_title() {
        assert_eq!(
            reference(json!({"book_id": null, "book_title": "T"})),
            BookReference::LegacyTitle("T".to_string())
        );
        assert_eq!(reference(json!({})), BookReference::Unresolved);
    }

    #[test]
    fn test_resolve_legacy_title() {
        let lookup = |title: &str| (title == "T").then_some(9);
        assert_eq!(
            BookReference::LegacyTitle("T".into()).resolve(lookup),
            Some(9)
        );
        assert_eq!(
            BookReference::LegacyTitle("Other".into()).resolve(lookup),
            None
        );
    }

    #[test]
    fn test_unresolved_sale_serializes_null_book() {
        let record = json!({"employee_name": "E", "sale_date": "2025-01-10"});
        let sale = Sale::from_record(record.as_object().unwrap(), None);
        let out = sale.to_record();
        assert_eq!(out.get("book_id"), Some(&Value::Null));
        assert_eq!(out.get("real_price"), Some(&json!(0.0)));
        assert!(out.get("book_title").is_none());
    }

    #[test]
    fn test_display() {
        let sale = Sale::new("E", 1, "2025-01-10", 18.0);
        assert_eq!(sale.to_string(), "2025-01-10: book #1 sold by E for 18$");
    }
}
