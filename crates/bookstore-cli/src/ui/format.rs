//! String formatting utilities for UI rendering.

use bookstore_core::report::Ranked;
use bookstore_core::{BookId, BookManager};

/// Truncate a string to max length (in chars), adding ellipsis if needed.
pub fn truncate(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();
    if char_count <= max_len {
        return s.to_string();
    }
    if max_len <= 3 {
        return s.chars().take(max_len).collect();
    }
    let truncated: String = s.chars().take(max_len - 3).collect();
    format!("{}...", truncated)
}

/// Two decimals, currency suffix.
pub fn money(value: f64) -> String {
    format!("{:.2}$", value)
}

/// A book reference as shown to people: `#id title` when the book exists.
pub fn book_label(id: Option<BookId>, books: &BookManager) -> String {
    match id {
        Some(id) => match books.find(id) {
            Some(book) => format!("#{} {}", id, book.title),
            None => format!("#{} (removed)", id),
        },
        None => "unknown book".to_string(),
    }
}

/// `value (N sales)` or `-` when there is no result.
pub fn ranked<T>(result: Option<&Ranked<T>>, label: impl Fn(&T) -> String) -> String {
    match result {
        Some(r) => format!(
            "{} ({} {})",
            label(&r.value),
            r.count,
            if r.count == 1 { "sale" } else { "sales" }
        ),
        None => "-".to_string(),
    }
}
