//! Calendar date parsing for sale dates and report bounds.
//!
//! All dates are plain `YYYY-MM-DD` strings: no timezone, no time component.

use chrono::NaiveDate;

use crate::error::{BookstoreError, Result};

/// The only accepted date layout.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string into a calendar date.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| BookstoreError::invalid_date(value))
}

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Inclusive date range used by report queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// Parse both bounds. The first malformed bound is reported.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_date(start)?, parse_date(end)?))
    }

    /// Inclusive on both ends. A range whose start is after its end is empty.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
