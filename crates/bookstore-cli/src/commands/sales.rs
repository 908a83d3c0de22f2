use bookstore_core::{BookId, BookstoreError, Sale};

use crate::app::AppContext;
use crate::cli::{SaleAddArgs, SaleCommand, SaleListArgs};
use crate::helpers::{require_date, require_price};
use crate::output::{print_json, sale_rows, sales_json, SALE_COLUMNS};
use crate::ui::{header, print, receipt, table};

pub fn handle_sale(ctx: &AppContext, command: &SaleCommand) -> anyhow::Result<()> {
    match command {
        SaleCommand::Add(args) => handle_add(ctx, args),
        SaleCommand::Remove { book, date } => handle_remove(ctx, *book, date),
        SaleCommand::List(args) => handle_list(ctx, args),
    }
}

fn handle_add(ctx: &AppContext, args: &SaleAddArgs) -> anyhow::Result<()> {
    require_date(&args.date)?;
    require_price(args.price)?;

    let seller = ctx.update(|bookstore| {
        bookstore
            .record_sale(&args.employee, args.book, &args.date, args.price)
            .map_err(|err| match err {
                err @ BookstoreError::NotFound(_) => anyhow::anyhow!(
                    "{}\nHint: see `bookstore employee list` and `bookstore book list`",
                    err
                ),
                other => other.into(),
            })
    })?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let book = args.book.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Sale recorded",
                &[("Date", &args.date), ("Book", &book), ("Employee", &seller)],
            ),
        );
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, book: BookId, date: &str) -> anyhow::Result<()> {
    let removed = ctx.update(|bookstore| Ok(bookstore.sales.remove(book, date)))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let removed = removed.to_string();
        print(&ui, &receipt(&ui, "Sale removal", &[("Removed", &removed)]));
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &SaleListArgs) -> anyhow::Result<()> {
    let (bookstore, _store) = ctx.load()?;
    let ui = ctx.ui_context(args.json);

    let mut sales: Vec<&Sale> = match (&args.date, &args.employee) {
        (Some(date), _) => bookstore.sales.sales_on(date),
        (None, Some(employee)) => bookstore.sales.sales_by_employee(employee),
        (None, None) => bookstore.sales.iter().collect(),
    };
    if let (Some(_), Some(employee)) = (&args.date, &args.employee) {
        sales.retain(|sale| &sale.employee_name == employee);
    }

    if ui.mode.is_json() {
        return print_json(&sales_json(sales.into_iter(), &bookstore.books));
    }

    if sales.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No sales found.");
        }
        return Ok(());
    }

    print(&ui, &header(&ui, "sale list", args.date.as_deref()));
    let rows = sale_rows(sales.into_iter(), &bookstore.books);
    print(&ui, &table(&ui, &SALE_COLUMNS, &rows));
    Ok(())
}
