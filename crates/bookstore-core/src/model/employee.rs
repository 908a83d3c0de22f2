use std::fmt;

use serde_json::Value;

use super::{text_field, Record};

/// A member of staff. `full_name` identifies the employee within the roster.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub full_name: String,
    pub position: String,
    pub phone: String,
    pub email: String,
}

impl Employee {
    pub fn new(
        full_name: impl Into<String>,
        position: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            full_name: full_name.into(),
            position: position.into(),
            phone: phone.into(),
            email: email.into(),
        }
    }

    /// Case-insensitive name comparison used for lookups.
    pub fn name_matches(&self, name: &str) -> bool {
        self.full_name.to_lowercase() == name.to_lowercase()
    }

    pub fn from_record(record: &Record) -> Self {
        Self {
            full_name: text_field(record, "full_name"),
            position: text_field(record, "position"),
            phone: text_field(record, "phone"),
            email: text_field(record, "email"),
        }
    }

    pub fn to_record(&self) -> Record {
        let mut record = Record::new();
        record.insert("full_name".into(), Value::from(self.full_name.as_str()));
        record.insert("position".into(), Value::from(self.position.as_str()));
        record.insert("phone".into(), Value::from(self.phone.as_str()));
        record.insert("email".into(), Value::from(self.email.as_str()));
        record
    }
}

impl fmt::Display for Employee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - {}, {}",
            self.full_name, self.position, self.phone, self.email
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_record_fills_missing_fields() {
        let record = json!({"full_name": "Ivan Ivanov"});
        let employee = Employee::from_record(record.as_object().unwrap());
        assert_eq!(employee, Employee::new("Ivan Ivanov", "", "", ""));
    }

    #[test]
    fn test_name_matches_ignores_case() {
        let employee = Employee::new("Іван Іванов", "Seller", "050", "ivan@mail.com");
        assert!(employee.name_matches("іван іванов"));
        assert!(!employee.name_matches("Іван"));
    }

    #[test]
    fn test_display() {
        let employee = Employee::new("Ann", "Clerk", "123", "ann@shop.com");
        assert_eq!(employee.to_string(), "Ann (Clerk) - 123, ann@shop.com");
    }
}
