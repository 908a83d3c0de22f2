use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use bookstore_core::VERSION;

/// Bookstore - staff, catalog and sales records for a small bookshop
#[derive(Parser)]
#[command(name = "bookstore")]
#[command(author, version = VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to the data file
    #[arg(short, long, global = true, env = "BOOKSTORE_DATA")]
    pub data: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Quiet mode (minimal output)
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the config file and an empty data file
    Init(InitArgs),

    /// Manage employees
    #[command(subcommand)]
    Employee(EmployeeCommand),

    /// Manage the book catalog
    #[command(subcommand)]
    Book(BookCommand),

    /// Record and inspect sales
    #[command(subcommand)]
    Sale(SaleCommand),

    /// Best sellers and profit for a date range
    Report(ReportArgs),

    /// Interactive menu
    Shell,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_name = "SHELL")]
        shell: Shell,
    },
}

/// Arguments for the `init` command
#[derive(Args)]
pub struct InitArgs {
    /// Where the data file will live
    #[arg(value_name = "PATH")]
    pub path: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,

    /// Default log level written to the config (e.g. "warn", "debug")
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Subcommand)]
pub enum EmployeeCommand {
    /// Add an employee
    Add(EmployeeAddArgs),

    /// Remove every employee with exactly this name
    Remove {
        /// Full name, matched exactly
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// List employees
    List(ListArgs),
}

/// Arguments for `employee add`
#[derive(Args)]
pub struct EmployeeAddArgs {
    /// Full name
    #[arg(long)]
    pub name: String,

    /// Job title
    #[arg(long, default_value = "")]
    pub position: String,

    /// Phone number
    #[arg(long, default_value = "")]
    pub phone: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,
}

#[derive(Subcommand)]
pub enum BookCommand {
    /// Add a book to the catalog
    Add(BookAddArgs),

    /// Remove a book by id (its sales are kept)
    Remove {
        /// Book id
        #[arg(value_name = "ID")]
        id: u64,
    },

    /// List the catalog
    List(ListArgs),
}

/// Arguments for `book add`
#[derive(Args)]
pub struct BookAddArgs {
    /// Title
    #[arg(long)]
    pub title: String,

    /// Publication year
    #[arg(long)]
    pub year: i32,

    /// Author
    #[arg(long)]
    pub author: String,

    /// Genre
    #[arg(long, default_value = "")]
    pub genre: String,

    /// Purchase cost
    #[arg(long, default_value_t = 0.0)]
    pub cost: f64,

    /// Nominal sale price
    #[arg(long, default_value_t = 0.0)]
    pub price: f64,
}

#[derive(Subcommand)]
pub enum SaleCommand {
    /// Record a sale
    Add(SaleAddArgs),

    /// Remove every sale of a book on a date
    Remove {
        /// Book id
        #[arg(long, value_name = "ID")]
        book: u64,

        /// Sale date (YYYY-MM-DD)
        #[arg(long)]
        date: String,
    },

    /// List sales
    List(SaleListArgs),
}

/// Arguments for `sale add`
#[derive(Args)]
pub struct SaleAddArgs {
    /// Seller's full name (case-insensitive)
    #[arg(long)]
    pub employee: String,

    /// Book id
    #[arg(long, value_name = "ID")]
    pub book: u64,

    /// Sale date (YYYY-MM-DD)
    #[arg(long)]
    pub date: String,

    /// Price actually charged
    #[arg(long)]
    pub price: f64,
}

/// Arguments for `sale list`
#[derive(Args)]
pub struct SaleListArgs {
    /// Only sales on this date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// Only sales by this employee
    #[arg(long)]
    pub employee: Option<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments shared by the plain `list` commands
#[derive(Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `report` command
#[derive(Args)]
pub struct ReportArgs {
    /// First day of the period (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub from: String,

    /// Last day of the period (YYYY-MM-DD, inclusive)
    #[arg(long)]
    pub to: String,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_sale_add() {
        let cli = Cli::try_parse_from([
            "bookstore",
            "sale",
            "add",
            "--employee",
            "Ann",
            "--book",
            "3",
            "--date",
            "2025-01-10",
            "--price",
            "18.5",
        ])
        .unwrap();
        match cli.command {
            Some(Commands::Sale(SaleCommand::Add(args))) => {
                assert_eq!(args.employee, "Ann");
                assert_eq!(args.book, 3);
                assert_eq!(args.price, 18.5);
            }
            _ => panic!("expected sale add"),
        }
    }

    #[test]
    fn test_global_data_flag_after_subcommand() {
        let cli =
            Cli::try_parse_from(["bookstore", "book", "list", "--data", "/tmp/x.json"]).unwrap();
        assert_eq!(cli.data.as_deref(), Some("/tmp/x.json"));
    }

    #[test]
    fn test_report_requires_both_bounds() {
        assert!(Cli::try_parse_from(["bookstore", "report", "--from", "2025-01-01"]).is_err());
    }
}
