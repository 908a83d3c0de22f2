//! Date-range reports over the sales journal.
//!
//! Every query starts from [`SaleManager::filter_by_period`]. Bounds that are
//! not `YYYY-MM-DD` produce an `InvalidDate` error and no result;
//! stored sales with malformed dates are skipped with a warning while the
//! rest of the journal is still processed.
//!
//! Frequency reports return the single most frequent value with its count.
//! Ties go to the value first seen in insertion order.

use std::collections::HashMap;
use std::hash::Hash;

use serde::Serialize;

use crate::date::{format_date, DateRange};
use crate::error::Result;
use crate::manager::{BookManager, SaleManager};
use crate::model::{Book, BookId, Sale};

/// A report winner and how many sales it accounts for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Ranked<T> {
    pub value: T,
    pub count: usize,
}

/// A stored sale left out of a period because its date does not parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedSale {
    /// Position in the journal.
    pub index: usize,
    pub book_id: Option<BookId>,
    pub sale_date: String,
}

/// Sales that fall inside a date range, in journal order.
#[derive(Debug, Clone)]
pub struct PeriodSales<'a> {
    pub range: DateRange,
    pub sales: Vec<&'a Sale>,
    pub skipped: Vec<SkippedSale>,
}

impl<'a> PeriodSales<'a> {
    fn collect(journal: impl Iterator<Item = &'a Sale>, range: DateRange) -> Self {
        let mut sales = Vec::new();
        let mut skipped = Vec::new();

        for (index, sale) in journal.enumerate() {
            match sale.date() {
                Ok(date) if range.contains(date) => sales.push(sale),
                Ok(_) => {}
                Err(_) => {
                    tracing::warn!(
                        index,
                        book_id = ?sale.book_id,
                        sale_date = %sale.sale_date,
                        "skipping sale with malformed date"
                    );
                    skipped.push(SkippedSale {
                        index,
                        book_id: sale.book_id,
                        sale_date: sale.sale_date.clone(),
                    });
                }
            }
        }

        Self {
            range,
            sales,
            skipped,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.sales.is_empty()
    }

    /// Most frequent value produced by `selector`; `None` values are not counted.
    pub fn most_common<K, F>(&self, selector: F) -> Option<Ranked<K>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&Sale) -> Option<K>,
    {
        rank_most_common(self.sales.iter().copied().filter_map(selector))
    }

    pub fn most_sold_book(&self) -> Option<Ranked<BookId>> {
        self.most_common(|sale| sale.book_id)
    }

    pub fn best_employee(&self) -> Option<Ranked<String>> {
        self.most_common(|sale| Some(sale.employee_name.clone()))
    }

    pub fn most_sold_author(&self, books: &BookManager) -> Option<Ranked<String>> {
        self.most_common(|sale| book_of(sale, books).map(|b| b.author.clone()))
    }

    pub fn most_sold_genre(&self, books: &BookManager) -> Option<Ranked<String>> {
        self.most_common(|sale| book_of(sale, books).map(|b| b.genre.clone()))
    }

    /// Sum of `real_price - cost_price`; sales without a known book add 0.
    pub fn total_profit(&self, books: &BookManager) -> f64 {
        self.sales
            .iter()
            .filter_map(|sale| book_of(sale, books).map(|b| sale.real_price - b.cost_price))
            .sum()
    }
}

fn book_of<'b>(sale: &Sale, books: &'b BookManager) -> Option<&'b Book> {
    sale.book_id.and_then(|id| books.find(id))
}

fn rank_most_common<K>(values: impl IntoIterator<Item = K>) -> Option<Ranked<K>>
where
    K: Eq + Hash + Clone,
{
    // Counts kept in first-seen order so ties resolve to the earliest value.
    let mut slots: HashMap<K, usize> = HashMap::new();
    let mut counts: Vec<Ranked<K>> = Vec::new();

    for value in values {
        match slots.get(&value) {
            Some(&slot) => counts[slot].count += 1,
            None => {
                slots.insert(value.clone(), counts.len());
                counts.push(Ranked { value, count: 1 });
            }
        }
    }

    let mut best: Option<Ranked<K>> = None;
    for candidate in counts {
        if best.as_ref().map_or(true, |b| candidate.count > b.count) {
            best = Some(candidate);
        }
    }
    best
}

impl SaleManager {
    /// Sales dated within `[start, end]`, both bounds inclusive.
    pub fn filter_by_period(&self, start: &str, end: &str) -> Result<PeriodSales<'_>> {
        let range = DateRange::parse(start, end)?;
        Ok(PeriodSales::collect(self.iter(), range))
    }

    pub fn most_common<K, F>(
        &self,
        start: &str,
        end: &str,
        selector: F,
    ) -> Result<Option<Ranked<K>>>
    where
        K: Eq + Hash + Clone,
        F: FnMut(&Sale) -> Option<K>,
    {
        Ok(self.filter_by_period(start, end)?.most_common(selector))
    }

    pub fn most_sold_book(&self, start: &str, end: &str) -> Result<Option<Ranked<BookId>>> {
        Ok(self.filter_by_period(start, end)?.most_sold_book())
    }

    pub fn best_employee(&self, start: &str, end: &str) -> Result<Option<Ranked<String>>> {
        Ok(self.filter_by_period(start, end)?.best_employee())
    }

    pub fn most_sold_author(
        &self,
        start: &str,
        end: &str,
        books: &BookManager,
    ) -> Result<Option<Ranked<String>>> {
        Ok(self.filter_by_period(start, end)?.most_sold_author(books))
    }

    pub fn most_sold_genre(
        &self,
        start: &str,
        end: &str,
        books: &BookManager,
    ) -> Result<Option<Ranked<String>>> {
        Ok(self.filter_by_period(start, end)?.most_sold_genre(books))
    }

    pub fn total_profit(&self, start: &str, end: &str, books: &BookManager) -> Result<f64> {
        Ok(self.filter_by_period(start, end)?.total_profit(books))
    }
}

/// All period reports computed from one pass over the journal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSummary {
    pub from: String,
    pub to: String,
    pub sales_in_period: usize,
    pub skipped_sales: usize,
    pub most_sold_book: Option<Ranked<BookId>>,
    pub best_employee: Option<Ranked<String>>,
    pub most_sold_author: Option<Ranked<String>>,
    pub most_sold_genre: Option<Ranked<String>>,
    pub total_profit: f64,
}

impl ReportSummary {
    pub fn compute(
        sales: &SaleManager,
        books: &BookManager,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        let period = sales.filter_by_period(start, end)?;
        Ok(Self {
            from: format_date(period.range.start),
            to: format_date(period.range.end),
            sales_in_period: period.sales.len(),
            skipped_sales: period.skipped.len(),
            most_sold_book: period.most_sold_book(),
            best_employee: period.best_employee(),
            most_sold_author: period.most_sold_author(books),
            most_sold_genre: period.most_sold_genre(books),
            total_profit: period.total_profit(books),
        })
    }
}
