//! JSON output formatting.

use serde_json::Value;

use bookstore_core::{Book, BookManager, Employee, ReportSummary, Sale};

pub fn employees_json<'a>(employees: impl Iterator<Item = &'a Employee>) -> Value {
    Value::Array(
        employees
            .map(|employee| Value::Object(employee.to_record()))
            .collect(),
    )
}

pub fn books_json<'a>(books: impl Iterator<Item = &'a Book>) -> Value {
    Value::Array(books.map(|book| Value::Object(book.to_record())).collect())
}

/// Sales as stored, plus the current title of the referenced book.
pub fn sales_json<'a>(sales: impl Iterator<Item = &'a Sale>, books: &BookManager) -> Value {
    Value::Array(
        sales
            .map(|sale| {
                let mut record = sale.to_record();
                let title = sale
                    .book_id
                    .and_then(|id| books.find(id))
                    .map(|book| Value::String(book.title.clone()))
                    .unwrap_or(Value::Null);
                record.insert("book_title".to_string(), title);
                Value::Object(record)
            })
            .collect(),
    )
}

pub fn report_json(summary: &ReportSummary) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(summary)?)
}

/// Print a JSON value, pretty-printed.
pub fn print_json(value: &Value) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
