use crate::manager::BookManager;
use crate::model::{BookId, BookReference, Record, Sale};

/// The sales journal. Report queries live in [`crate::report`].
#[derive(Debug, Clone, Default)]
pub struct SaleManager {
    sales: Vec<Sale>,
}

impl SaleManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, sale: Sale) {
        self.sales.push(sale);
    }

    /// Remove every sale of `book_id` recorded on `sale_date`.
    ///
    /// All matches go, not only the first one.
    pub fn remove(&mut self, book_id: BookId, sale_date: &str) -> usize {
        let before = self.sales.len();
        self.sales
            .retain(|s| !(s.book_id == Some(book_id) && s.sale_date == sale_date));
        before - self.sales.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sale> {
        self.sales.iter()
    }

    pub fn len(&self) -> usize {
        self.sales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Sales recorded on exactly this date string.
    pub fn sales_on(&self, sale_date: &str) -> Vec<&Sale> {
        self.sales
            .iter()
            .filter(|s| s.sale_date == sale_date)
            .collect()
    }

    /// Sales made by exactly this employee name.
    pub fn sales_by_employee(&self, employee_name: &str) -> Vec<&Sale> {
        self.sales
            .iter()
            .filter(|s| s.employee_name == employee_name)
            .collect()
    }

    pub fn serialize(&self) -> Vec<Record> {
        self.sales.iter().map(Sale::to_record).collect()
    }

    /// Replace the journal with the given records.
    ///
    /// Legacy title references are resolved against `books` here, once.
    pub fn deserialize(&mut self, records: &[Record], books: &BookManager) {
        self.sales = records
            .iter()
            .map(|record| {
                let book_id = BookReference::from_record(record)
                    .resolve(|title| books.find_by_title(title).map(|b| b.id));
                Sale::from_record(record, book_id)
            })
            .collect();
    }
}
