//! Parsing helpers for dates, years and prices typed by a person.
//!
//! The `parse_*` functions return a display message on failure so the
//! interactive shell can show it and ask again.

use chrono::{Datelike, Local};

use bookstore_core::date::parse_date;
use bookstore_core::model::{validate_publication_year, MIN_PUBLICATION_YEAR};
use bookstore_core::BookId;

/// The current calendar year in local time.
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Check a `YYYY-MM-DD` date for a command argument.
pub fn require_date(value: &str) -> anyhow::Result<()> {
    parse_date(value)
        .map(|_| ())
        .map_err(|e| anyhow::anyhow!("{}\nHint: dates look like 2025-01-31", e))
}

/// Check a price given as a command argument.
pub fn require_price(value: f64) -> anyhow::Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(anyhow::anyhow!(
            "Price must be a non-negative number, got {}",
            value
        ))
    }
}

pub fn parse_int(input: &str) -> Result<i64, String> {
    input
        .trim()
        .parse()
        .map_err(|_| "Please enter a whole number.".to_string())
}

pub fn parse_book_id(input: &str) -> Result<BookId, String> {
    input
        .trim()
        .parse()
        .map_err(|_| "Please enter a book id (a whole number).".to_string())
}

/// Any finite number that is not negative.
pub fn parse_price(input: &str) -> Result<f64, String> {
    let value: f64 = input
        .trim()
        .parse()
        .map_err(|_| "Please enter a number.".to_string())?;
    if !value.is_finite() || value < 0.0 {
        return Err("Price cannot be negative.".to_string());
    }
    Ok(value)
}

pub fn parse_year(input: &str, current_year: i32) -> Result<i32, String> {
    let year = parse_int(input)
        .ok()
        .and_then(|value| i32::try_from(value).ok())
        .ok_or_else(|| "Please enter a valid year.".to_string())?;
    validate_publication_year(year, current_year).map_err(|_| {
        format!(
            "Year must be between {} and {}.",
            MIN_PUBLICATION_YEAR, current_year
        )
    })?;
    Ok(year)
}

pub fn check_date(input: &str) -> Result<(), String> {
    parse_date(input)
        .map(|_| ())
        .map_err(|_| "Invalid date format. Use YYYY-MM-DD.".to_string())
}
