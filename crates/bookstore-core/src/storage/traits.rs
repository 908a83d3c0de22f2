//! Document store trait definition.
//!
//! The core depends on persistence only through this trait; managers convert
//! themselves to and from the [`Document`] it carries.

use super::types::Document;
use crate::error::Result;

/// Whole-document persistence for the bookstore data.
///
/// Implementations must ensure:
/// - A missing resource loads as an empty document, not an error
/// - A malformed resource loads as an empty document, not an error
/// - `save` replaces the whole resource
pub trait DocumentStore {
    /// Load the stored document.
    ///
    /// # Errors
    ///
    /// Returns `BookstoreError::Storage` only when the resource exists but
    /// cannot be read at all.
    fn load(&self) -> Result<Document>;

    /// Replace the stored document.
    ///
    /// # Errors
    ///
    /// Returns `BookstoreError::Storage` if the resource cannot be written.
    fn save(&self, document: &Document) -> Result<()>;
}
