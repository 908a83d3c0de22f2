use bookstore_core::Employee;

use crate::app::AppContext;
use crate::cli::{EmployeeAddArgs, EmployeeCommand, ListArgs};
use crate::output::{employee_rows, employees_json, print_json, EMPLOYEE_COLUMNS};
use crate::ui::{header, hint, print, receipt, table};

pub fn handle_employee(ctx: &AppContext, command: &EmployeeCommand) -> anyhow::Result<()> {
    match command {
        EmployeeCommand::Add(args) => handle_add(ctx, args),
        EmployeeCommand::Remove { name } => handle_remove(ctx, name),
        EmployeeCommand::List(args) => handle_list(ctx, args),
    }
}

fn handle_add(ctx: &AppContext, args: &EmployeeAddArgs) -> anyhow::Result<()> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(anyhow::anyhow!("Employee name cannot be empty"));
    }

    let employee = Employee::new(name, &args.position, &args.phone, &args.email);
    ctx.update(|bookstore| {
        bookstore.employees.add(employee);
        Ok(())
    })?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        print(&ui, &receipt(&ui, "Employee added", &[("Name", name)]));
    }
    Ok(())
}

fn handle_remove(ctx: &AppContext, name: &str) -> anyhow::Result<()> {
    let removed = ctx.update(|bookstore| Ok(bookstore.employees.remove(name)))?;

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let count = removed.to_string();
        print(&ui, &receipt(&ui, "Employee removal", &[("Removed", &count)]));
        if removed == 0 {
            print(&ui, &hint(&ui, "names must match exactly; see `bookstore employee list`"));
        }
    }
    Ok(())
}

fn handle_list(ctx: &AppContext, args: &ListArgs) -> anyhow::Result<()> {
    let (bookstore, _store) = ctx.load()?;
    let ui = ctx.ui_context(args.json);

    if ui.mode.is_json() {
        return print_json(&employees_json(bookstore.employees.iter()));
    }

    if bookstore.employees.is_empty() {
        if !ctx.quiet() {
            print(&ui, "No employees yet.");
        }
        return Ok(());
    }

    print(&ui, &header(&ui, "employee list", None));
    let rows = employee_rows(bookstore.employees.iter());
    print(&ui, &table(&ui, &EMPLOYEE_COLUMNS, &rows));
    Ok(())
}
