//! # Bookstore Core
//!
//! Core library for Bookstore - a small record keeper for a bookshop's staff,
//! catalog and sales.
//!
//! This crate provides the domain records, their in-memory managers, the
//! date-range report engine and the persisted document, independent of the
//! CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Employee, Book and Sale records with load defaults
//! - **manager**: Ordered in-memory collections with add/remove/find
//! - **report**: Period filtering and best-seller / profit reports
//! - **storage**: Document store trait and the JSON file backend
//! - **bookstore**: The three managers bundled with load/save

pub mod bookstore;
pub mod date;
pub mod error;
pub mod fs;
pub mod manager;
pub mod model;
pub mod report;
pub mod storage;

pub use bookstore::Bookstore;
pub use error::{BookstoreError, Result};
pub use manager::{BookManager, EmployeeManager, SaleManager};
pub use model::{Book, BookId, Employee, NewBook, Record, Sale};
pub use report::{PeriodSales, Ranked, ReportSummary};
pub use storage::{Document, DocumentStore, JsonFileStore};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
