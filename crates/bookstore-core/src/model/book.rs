use std::fmt;

use serde_json::Value;

use super::{id_field, integer_field, number_field, text_field, Record};
use crate::error::{BookstoreError, Result};

/// Sequential catalog identifier assigned by the book manager.
pub type BookId = u64;

/// Earliest publication year accepted from interactive input.
pub const MIN_PUBLICATION_YEAR: i32 = 1400;

/// A catalog entry.
#[derive(Debug, Clone, PartialEq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub year: i32,
    pub author: String,
    pub genre: String,
    pub cost_price: f64,
    pub sale_price: f64,
}

/// Builder for creating new books. The id is assigned on insertion.
#[derive(Debug, Clone, PartialEq)]
pub struct NewBook {
    pub title: String,
    pub year: i32,
    pub author: String,
    pub genre: String,
    pub cost_price: f64,
    pub sale_price: f64,
}

impl NewBook {
    pub fn new(
        title: impl Into<String>,
        year: i32,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            year,
            author: author.into(),
            genre: genre.into(),
            cost_price: 0.0,
            sale_price: 0.0,
        }
    }

    pub fn with_prices(mut self, cost_price: f64, sale_price: f64) -> Self {
        self.cost_price = cost_price;
        self.sale_price = sale_price;
        self
    }

    /// Check the constraints applied to interactively entered books.
    ///
    /// Loaded books skip this: stored data is taken as-is.
    pub fn validate(&self, current_year: i32) -> Result<()> {
        validate_publication_year(self.year, current_year)?;
        validate_price("cost price", self.cost_price)?;
        validate_price("sale price", self.sale_price)?;
        Ok(())
    }

    pub(crate) fn into_book(self, id: BookId) -> Book {
        Book {
            id,
            title: self.title,
            year: self.year,
            author: self.author,
            genre: self.genre,
            cost_price: self.cost_price,
            sale_price: self.sale_price,
        }
    }
}

/// Reject years outside `[MIN_PUBLICATION_YEAR, current_year]`.
pub fn validate_publication_year(year: i32, current_year: i32) -> Result<()> {
    if (MIN_PUBLICATION_YEAR..=current_year).contains(&year) {
        Ok(())
    } else {
        Err(BookstoreError::InvalidInput(format!(
            "year must be between {} and {}, got {}",
            MIN_PUBLICATION_YEAR, current_year, year
        )))
    }
}

fn validate_price(label: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(BookstoreError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            label, value
        )))
    }
}

impl Book {
    /// Split a stored record into its explicit id (if valid) and fields.
    pub fn from_record(record: &Record) -> (Option<BookId>, NewBook) {
        let fields = NewBook {
            title: text_field(record, "title"),
            year: integer_field(record, "year"),
            author: text_field(record, "author"),
            genre: text_field(record, "genre"),
            cost_price: number_field(record, "cost_price"),
            sale_price: number_field(record, "sale_price"),
        };
        (id_field(record, "id"), fields)
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("id".into(), Value::from(self.id));
        record.insert("title".into(), Value::from(self.title.as_str()));
        record.insert("year".into(), Value::from(self.year));
        record.insert("author".into(), Value::from(self.author.as_str()));
        record.insert("genre".into(), Value::from(self.genre.as_str()));
        record.insert("cost_price".into(), Value::from(self.cost_price));
        record.insert("sale_price".into(), Value::from(self.sale_price));
        record
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} ({}, {}) - {}, {}$",
            self.id, self.title, self.author, self.year, self.genre, self.sale_price
        )
    }
}
