//! Persistence for the bookstore document.
//!
//! The core only sees [`DocumentStore`]; [`JsonFileStore`] is the file-backed
//! implementation used by the CLI.

mod json_file;
pub mod traits;
pub mod types;

pub use json_file::JsonFileStore;
pub use traits::DocumentStore;
pub use types::Document;
