//! The three managers bundled together with load/save.

use crate::date::parse_date;
use crate::error::{BookstoreError, Result};
use crate::manager::{BookManager, EmployeeManager, SaleManager};
use crate::model::{BookId, Sale};
use crate::report::ReportSummary;
use crate::storage::{Document, DocumentStore};

/// Everything the store tracks, owned by one process.
#[derive(Debug, Clone, Default)]
pub struct Bookstore {
    pub employees: EmployeeManager,
    pub books: BookManager,
    pub sales: SaleManager,
}

impl Bookstore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build managers from a document.
    ///
    /// Books are restored before sales so legacy title references resolve.
    /// Ids of removed books that sales still reference are never reassigned.
    pub fn from_document(document: &Document) -> Self {
        let mut store = Self::new();
        store.employees.deserialize(&document.employees);
        store.books.deserialize(&document.books);
        store.sales.deserialize(&document.sales, &store.books);
        for id in store.sales.iter().filter_map(|s| s.book_id) {
            store.books.reserve_through(id);
        }

        let unresolved = store.sales.iter().filter(|s| s.book_id.is_none()).count();
        if unresolved > 0 {
            tracing::warn!(unresolved, "some sales reference no known book");
        }
        store
    }

    pub fn to_document(&self) -> Document {
        Document {
            employees: self.employees.serialize(),
            books: self.books.serialize(),
            sales: self.sales.serialize(),
        }
    }

    pub fn load(store: &impl DocumentStore) -> Result<Self> {
        Ok(Self::from_document(&store.load()?))
    }

    pub fn save(&self, store: &impl DocumentStore) -> Result<()> {
        store.save(&self.to_document())
    }

    /// The roster spelling of an employee, matched case-insensitively.
    pub fn seller(&self, name: &str) -> Result<&str> {
        self.employees
            .find(name)
            .map(|employee| employee.full_name.as_str())
            .ok_or_else(|| BookstoreError::NotFound(format!("Employee '{}'", name)))
    }

    /// Record a sale made by a known employee of a book still in the catalog.
    ///
    /// The sale is stored under the employee's roster name, which is returned.
    pub fn record_sale(
        &mut self,
        employee: &str,
        book_id: BookId,
        sale_date: &str,
        real_price: f64,
    ) -> Result<String> {
        let seller = self.seller(employee)?.to_string();
        if self.books.find(book_id).is_none() {
            return Err(BookstoreError::NotFound(format!("Book with ID {}", book_id)));
        }
        parse_date(sale_date)?;
        self.sales
            .add(Sale::new(seller.clone(), book_id, sale_date, real_price));
        Ok(seller)
    }

    /// All period reports for `[start, end]`.
    pub fn report(&self, start: &str, end: &str) -> Result<ReportSummary> {
        ReportSummary::compute(&self.sales, &self.books, start, end)
    }
}
