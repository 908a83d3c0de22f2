//! Table rows and report text.

use bookstore_core::{Book, BookManager, Employee, ReportSummary, Sale};

use crate::ui::format::{book_label, money, ranked, truncate};
use crate::ui::{kv, Column, UiContext};

pub const EMPLOYEE_COLUMNS: [Column; 4] = [
    Column::new("Name"),
    Column::new("Position"),
    Column::new("Phone"),
    Column::new("Email"),
];

pub const BOOK_COLUMNS: [Column; 7] = [
    Column::new("ID"),
    Column::new("Title"),
    Column::new("Author"),
    Column::new("Year"),
    Column::new("Genre"),
    Column::new("Cost"),
    Column::new("Price"),
];

pub const SALE_COLUMNS: [Column; 4] = [
    Column::new("Date"),
    Column::new("Book"),
    Column::new("Employee"),
    Column::new("Price"),
];

pub fn employee_rows<'a>(employees: impl Iterator<Item = &'a Employee>) -> Vec<Vec<String>> {
    employees
        .map(|e| {
            vec![
                e.full_name.clone(),
                e.position.clone(),
                e.phone.clone(),
                e.email.clone(),
            ]
        })
        .collect()
}

pub fn book_rows<'a>(books: impl Iterator<Item = &'a Book>) -> Vec<Vec<String>> {
    books
        .map(|b| {
            vec![
                b.id.to_string(),
                truncate(&b.title, 40),
                b.author.clone(),
                b.year.to_string(),
                b.genre.clone(),
                money(b.cost_price),
                money(b.sale_price),
            ]
        })
        .collect()
}

pub fn sale_rows<'a>(
    sales: impl Iterator<Item = &'a Sale>,
    books: &BookManager,
) -> Vec<Vec<String>> {
    sales
        .map(|s| {
            vec![
                s.sale_date.clone(),
                truncate(&book_label(s.book_id, books), 40),
                s.employee_name.clone(),
                money(s.real_price),
            ]
        })
        .collect()
}

/// Report lines in display order.
pub fn report_lines(
    ctx: &UiContext,
    summary: &ReportSummary,
    books: &BookManager,
) -> Vec<String> {
    let mut lines = vec![
        kv(ctx, "Sales", &summary.sales_in_period.to_string()),
        kv(
            ctx,
            "Most sold book",
            &ranked(summary.most_sold_book.as_ref(), |id| {
                book_label(Some(*id), books)
            }),
        ),
        kv(
            ctx,
            "Best employee",
            &ranked(summary.best_employee.as_ref(), String::clone),
        ),
        kv(ctx, "Total profit", &money(summary.total_profit)),
        kv(
            ctx,
            "Top author",
            &ranked(summary.most_sold_author.as_ref(), String::clone),
        ),
        kv(
            ctx,
            "Top genre",
            &ranked(summary.most_sold_genre.as_ref(), String::clone),
        ),
    ];
    if summary.skipped_sales > 0 {
        lines.push(kv(
            ctx,
            "Skipped",
            &format!("{} sale(s) with an unreadable date", summary.skipped_sales),
        ));
    }
    lines
}
