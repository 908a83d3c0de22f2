//! In-memory managers for employees, books and sales.
//!
//! Each manager owns an ordered `Vec` of its entity; insertion order is kept
//! for display and for report tie-breaking. Removal is a filter over the
//! whole collection and returns how many entities were dropped.

mod books;
mod employees;
mod sales;

pub use books::BookManager;
pub use employees::EmployeeManager;
pub use sales::SaleManager;
