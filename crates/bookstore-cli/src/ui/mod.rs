//! UI primitives for the Bookstore CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badges and ANSI styles
//! - **Render**: Tables, headers, receipts, hints, errors
//! - **Format**: Money, labels and truncation

mod context;
pub mod format;
pub mod mode;
pub mod render;
pub mod theme;

pub use context::UiContext;
pub use theme::Badge;

pub use render::{badge, header, hint, kv, print, print_error, receipt, table, Column};
