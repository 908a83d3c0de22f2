use bookstore_core::{BookId, NewBook};

use crate::app::AppContext;
use crate::cli::{BookAddArgs, BookCommand, ListArgs};
use crate::helpers::current_year;
use crate::output::{book_rows, books_json, print_json, BOOK_COLUMNS};
use crate::ui::{header, print, receipt, table};

pub fn handle_book(ctx: &AppContext, command: &BookCommand) -> anyhow::Result<()> {
    match command {
        BookCommand::Add(args) => handle_add(ctx, args),
        BookCommand::Remove { id } => handle_remove(ctx, *id),
        BookCommand::List(args) => handle_list(ctx, args),
    }
}

fn handle_add(ctx: &AppContext, args: &BookAddArgs) -> anyhow::Result<()> {
    let book = NewBook::new(&args.title, args.year, &args.author, &args.genre)
        .with_prices(args.cost, args.price);
    book.validate(current_year())?;

    let id = ctx.update(|bookstore| Ok(bookstore.books.add(book)))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let id = id.to_string();
        print(
            &ui,
            &receipt(&ui, "Book added", &[("ID", &id), ("Title", &args.title)]),
        );
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, id: BookId) -> anyhow::Result<()> {
    let (removed, kept_sales) = ctx.update(|bookstore| {
        let removed = bookstore.books.remove(id);
        let kept_sales = bookstore
            .sales
            .iter()
            .filter(|sale| sale.book_id == Some(id))
            .count();
        Ok((removed, kept_sales))
    })?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let removed = removed.to_string();
        let kept_sales = kept_sales.to_string();
        print(
            &ui,
            &receipt(
                &ui,
                "Book removal",
                &[("Removed", &removed), ("Sales kept", &kept_sales)],
            ),
        );
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (bookstore, _store) = ctx.load()?;
    let ui = ctx.ui_context(args.json);

    if ui.mode.is_json() {
        return print_json(&books_json(bookstore.books.iter()));
    }

    if bookstore.books.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No books yet.");
        }
        return Ok(());
    }

    print(&ui, &header(&ui, "book list", None));
    print(&ui, &table(&ui, &BOOK_COLUMNS, &book_rows(bookstore.books.iter())));
    Ok(())
}
