//! JSON file backend.
//!
//! The whole document lives in one UTF-8 file. Saves go through a temp file
//! and a rename so a reader never sees a half-written document.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::Value;

use super::traits::DocumentStore;
use super::types::Document;
use crate::error::{BookstoreError, Result};
use crate::fs::write_atomic;

const INDENT: &[u8] = b"    ";

/// Document store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn encode(document: &Document) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        let formatter = PrettyFormatter::with_indent(INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut out, formatter);
        document.serialize(&mut serializer)?;
        Ok(out)
    }
}

impl DocumentStore for JsonFileStore {
    fn load(&self) -> Result<Document> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "data file not found; starting empty");
                return Ok(Document::new());
            }
            Err(err) => {
                return Err(BookstoreError::Storage(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    err
                )));
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(value) => {
                let document = Document::from_value(value);
                tracing::debug!(
                    path = %self.path.display(),
                    employees = document.employees.len(),
                    books = document.books.len(),
                    sales = document.sales.len(),
                    "loaded data file"
                );
                Ok(document)
            }
            Err(err) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %err,
                    "data file is not valid JSON; starting empty"
                );
                Ok(Document::new())
            }
        }
    }

    fn save(&self, document: &Document) -> Result<()> {
        let bytes = Self::encode(document)?;
        write_atomic(&self.path, &bytes)?;
        tracing::debug!(path = %self.path.display(), bytes = bytes.len(), "saved data file");
        Ok(())
    }
}
