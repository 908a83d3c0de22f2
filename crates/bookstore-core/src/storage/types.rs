//! The persisted document.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::Record;

/// `{ "employees": [...], "books": [...], "sales": [...] }`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub employees: Vec<Record>,
    #[serde(default)]
    pub books: Vec<Record>,
    #[serde(default)]
    pub sales: Vec<Record>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lenient conversion from an arbitrary JSON value.
    ///
    /// A non-object root gives an empty document; a missing or non-array
    /// section gives an empty section; non-object items are dropped. Every
    /// dropped piece is logged.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut root) = value else {
            tracing::warn!("data document is not a JSON object; starting empty");
            return Self::default();
        };

        Self {
            employees: take_section(&mut root, "employees"),
            books: take_section(&mut root, "books"),
            sales: take_section(&mut root, "sales"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty() && self.books.is_empty() && self.sales.is_empty()
    }
}

fn take_section(root: &mut serde_json::Map<String, Value>, key: &str) -> Vec<Record> {
    let items = match root.remove(key) {
        Some(Value::Array(items)) => items,
        Some(other) => {
            tracing::warn!(
                section = key,
                kind = json_kind(&other),
                "section is not an array; ignoring it"
            );
            return Vec::new();
        }
        None => return Vec::new(),
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(index, item)| match item {
            Value::Object(record) => Some(record),
            other => {
                tracing::warn!(
                    section = key,
                    index,
                    kind = json_kind(&other),
                    "skipping non-object item"
                );
                None
            }
        })
        .collect()
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
