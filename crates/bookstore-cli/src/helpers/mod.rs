//! Helper functions for CLI input handling.

pub mod parsing;

pub use parsing::{current_year, require_date, require_price};
