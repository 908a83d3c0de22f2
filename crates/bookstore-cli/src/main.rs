//! Bookstore CLI - staff, catalog and sales records for a small bookshop
//!
//! This is the command-line interface for Bookstore. It wraps the core
//! library with subcommands, an interactive shell and JSON output.

mod app;
mod cli;
mod commands;
mod config;
mod helpers;
mod logging;
mod output;
mod ui;

use clap::{CommandFactory, Parser};

use crate::app::AppContext;
use crate::cli::{Cli, Commands};
use crate::commands::{
    handle_book, handle_completions, handle_employee, handle_init, handle_report, handle_sale,
    handle_shell,
};
use crate::ui::{print_error, UiContext};

fn main() {
    let cli = Cli::parse();
    let ctx = AppContext::new(&cli);
    logging::init(ctx.log_level().as_deref());

    if let Err(err) = run(&ctx) {
        let ui = UiContext::from_env(false);
        let message = format!("{:#}", err);
        let (message, hint) = split_hint(&message);
        print_error(&ui, message, hint);
        std::process::exit(1);
    }
}

fn run(ctx: &AppContext) -> anyhow::Result<()> {
    match &ctx.cli().command {
        Some(Commands::Init(args)) => handle_init(ctx, args),
        Some(Commands::Employee(command)) => handle_employee(ctx, command),
        Some(Commands::Book(command)) => handle_book(ctx, command),
        Some(Commands::Sale(command)) => handle_sale(ctx, command),
        Some(Commands::Report(args)) => handle_report(ctx, args),
        Some(Commands::Shell) => handle_shell(ctx),
        Some(Commands::Completions { shell }) => handle_completions(*shell),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    }
}

/// Error messages carry an optional trailing "Hint: ..." line.
fn split_hint(message: &str) -> (&str, Option<&str>) {
    match message.split_once("\nHint: ") {
        Some((message, hint)) => (message, Some(hint)),
        None => (message, None),
    }
}
