//! Interactive menu over the whole bookstore.
//!
//! Changes are kept in memory and written once, on "Save and exit".

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use bookstore_core::{Bookstore, BookstoreError, Employee, NewBook};

use crate::app::AppContext;
use crate::helpers::current_year;
use crate::helpers::parsing::{check_date, parse_book_id, parse_price, parse_year};
use crate::output::{
    book_rows, employee_rows, report_lines, sale_rows, BOOK_COLUMNS, EMPLOYEE_COLUMNS,
    SALE_COLUMNS,
};
use crate::ui::{badge, header, print, receipt, table, Badge, Column, UiContext};

const MAIN_MENU: [&str; 5] = ["Employees", "Books", "Sales", "Reports", "Save and exit"];
const EMPLOYEE_MENU: [&str; 4] = ["Add employee", "Remove employee", "List employees", "Back"];
const BOOK_MENU: [&str; 4] = ["Add book", "Remove book", "List books", "Back"];
const SALE_MENU: [&str; 4] = ["Add sale", "Remove sale", "List sales", "Back"];

struct Shell<'a> {
    ui: UiContext,
    theme: ColorfulTheme,
    bookstore: &'a mut Bookstore,
}

pub fn handle_shell(ctx: &AppContext) -> anyhow::Result<()> {
    let ui = ctx.ui_context(false);
    if !ui.is_interactive() {
        return Err(anyhow::anyhow!(
            "The shell needs an interactive terminal\nHint: scripts can use the employee, book, sale and report commands"
        ));
    }

    let (mut bookstore, store) = ctx.load()?;
    let mut shell = Shell {
        ui,
        theme: ColorfulTheme::default(),
        bookstore: &mut bookstore,
    };
    shell.run()?;

    bookstore.save(&store)?;
    let ui = ctx.ui_context(false);
    let path = store.path().display().to_string();
    print(&ui, &receipt(&ui, "Data saved", &[("Path", &path)]));
    Ok(())
}

impl Shell<'_> {
    fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match self.choose("Bookstore", &MAIN_MENU)? {
                0 => self.employees()?,
                1 => self.books()?,
                2 => self.sales()?,
                3 => self.report()?,
                _ => return Ok(()),
            }
        }
    }

    fn employees(&mut self) -> anyhow::Result<()> {
        match self.choose("Employees", &EMPLOYEE_MENU)? {
            0 => {
                let name = self.text("Full name")?;
                let position = self.text("Position")?;
                let phone = self.text("Phone")?;
                let email = self.text("Email")?;
                self.bookstore
                    .employees
                    .add(Employee::new(name, position, phone, email));
                self.done("Employee added");
            }
            1 => {
                let name = self.text("Name of the employee to remove")?;
                let removed = self.bookstore.employees.remove(&name);
                self.done(&format!("Removed {} employee(s)", removed));
            }
            2 => {
                let rows = employee_rows(self.bookstore.employees.iter());
                self.show_table("employees", &EMPLOYEE_COLUMNS, &rows);
            }
            _ => {}
        }
        Ok(())
    }

    fn books(&mut self) -> anyhow::Result<()> {
        match self.choose("Books", &BOOK_MENU)? {
            0 => {
                let title = self.text("Title")?;
                let current = current_year();
                let year = self.parsed("Year", |input| parse_year(input, current))?;
                let author = self.text("Author")?;
                let genre = self.text("Genre")?;
                let cost = self.parsed("Cost price", parse_price)?;
                let price = self.parsed("Sale price", parse_price)?;
                let id = self
                    .bookstore
                    .books
                    .add(NewBook::new(title, year, author, genre).with_prices(cost, price));
                self.done(&format!("Book [{}] added", id));
            }
            1 => {
                let id = self.parsed("Book id", parse_book_id)?;
                if self.bookstore.books.remove(id) == 0 {
                    self.warn(&format!("Book with ID {} not found", id));
                } else {
                    self.done(&format!("Book [{}] removed", id));
                }
            }
            2 => {
                let rows = book_rows(self.bookstore.books.iter());
                self.show_table("books", &BOOK_COLUMNS, &rows);
            }
            _ => {}
        }
        Ok(())
    }

    fn sales(&mut self) -> anyhow::Result<()> {
        match self.choose("Sales", &SALE_MENU)? {
            0 => self.add_sale()?,
            1 => {
                let id = self.parsed("Book id", parse_book_id)?;
                let date = self.date("Sale date (YYYY-MM-DD)")?;
                let removed = self.bookstore.sales.remove(id, &date);
                self.done(&format!("Removed {} sale(s)", removed));
            }
            2 => {
                let rows = sale_rows(self.bookstore.sales.iter(), &self.bookstore.books);
                self.show_table("sales", &SALE_COLUMNS, &rows);
            }
            _ => {}
        }
        Ok(())
    }

    fn add_sale(&mut self) -> anyhow::Result<()> {
        let name = self.text("Seller")?;
        if let Err(err) = self.bookstore.seller(&name) {
            self.warn(&err.to_string());
            return Ok(());
        }

        let id = self.parsed("Book id", parse_book_id)?;
        if self.bookstore.books.find(id).is_none() {
            self.warn(&format!("Book with ID {} not found", id));
            return Ok(());
        }

        let date = self.date("Sale date (YYYY-MM-DD)")?;
        let price = self.parsed("Price charged", parse_price)?;
        match self.bookstore.record_sale(&name, id, &date, price) {
            Ok(_) => self.done("Sale recorded"),
            Err(err) => self.warn(&err.to_string()),
        }
        Ok(())
    }

    fn report(&self) -> anyhow::Result<()> {
        loop {
            let from = self.text("From (YYYY-MM-DD)")?;
            let to = self.text("To (YYYY-MM-DD)")?;
            match self.bookstore.report(&from, &to) {
                Ok(summary) => {
                    let range = format!("{} .. {}", summary.from, summary.to);
                    print(&self.ui, &header(&self.ui, "report", Some(&range)));
                    for line in report_lines(&self.ui, &summary, &self.bookstore.books) {
                        print(&self.ui, &line);
                    }
                    return Ok(());
                }
                Err(err @ BookstoreError::InvalidDate { .. }) => self.warn(&err.to_string()),
                Err(err) => return Err(err.into()),
            }
        }
    }

    fn choose(&self, prompt: &str, items: &[&str]) -> anyhow::Result<usize> {
        Ok(Select::with_theme(&self.theme)
            .with_prompt(prompt)
            .default(0)
            .items(items)
            .interact()?)
    }

    fn text(&self, prompt: &str) -> anyhow::Result<String> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?)
    }

    /// Ask until `parse` accepts the answer.
    fn parsed<T>(
        &self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, String>,
    ) -> anyhow::Result<T> {
        loop {
            match parse(&self.text(prompt)?) {
                Ok(value) => return Ok(value),
                Err(message) => self.warn(&message),
            }
        }
    }

    fn date(&self, prompt: &str) -> anyhow::Result<String> {
        loop {
            let value = self.text(prompt)?;
            match check_date(&value) {
                Ok(()) => return Ok(value),
                Err(message) => self.warn(&message),
            }
        }
    }

    fn show_table(&self, what: &str, columns: &[Column], rows: &[Vec<String>]) {
        if rows.is_empty() {
            print(&self.ui, &format!("No {} yet.", what));
        } else {
            print(&self.ui, &table(&self.ui, columns, rows));
        }
    }

    fn done(&self, message: &str) {
        print(&self.ui, &badge(&self.ui, Badge::Ok, message));
    }

    fn warn(&self, message: &str) {
        print(&self.ui, &badge(&self.ui, Badge::Warn, message));
    }
}
