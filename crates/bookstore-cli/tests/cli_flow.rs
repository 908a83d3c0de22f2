use std::path::PathBuf;
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_bookstore"))
}

/// An isolated home for one test: its own config, data and XDG dirs.
struct Sandbox {
    dir: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("create temp dir"),
        }
    }

    fn data_path(&self) -> PathBuf {
        self.dir.path().join("data.json")
    }

    fn config_path(&self) -> PathBuf {
        self.dir.path().join("config").join("config.toml")
    }

    /// A command with no data path override.
    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.env("BOOKSTORE_CONFIG", self.config_path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg-config"))
            .env("XDG_DATA_HOME", self.dir.path().join("xdg-data"))
            .env("NO_COLOR", "1")
            .env_remove("BOOKSTORE_DATA")
            .env_remove("RUST_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        self.command()
            .args(args)
            .env("BOOKSTORE_DATA", self.data_path())
            .output()
            .expect("run bookstore")
    }

    fn ok(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "{:?} failed: stdout={}, stderr={}",
            args,
            String::from_utf8_lossy(&output.stdout),
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("utf-8 stdout")
    }

    fn json(&self, args: &[&str]) -> Value {
        serde_json::from_str(&self.ok(args)).expect("valid JSON output")
    }

    fn seed(&self) {
        self.ok(&[
            "employee", "add", "--name", "Ann Lee", "--position", "Clerk", "--phone", "555",
            "--email", "ann@shop.com",
        ]);
        self.ok(&[
            "book", "add", "--title", "T", "--year", "2020", "--author", "A", "--genre", "G",
            "--cost", "10", "--price", "20",
        ]);
    }
}

#[test]
fn test_add_report_remove_flow() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let added = sandbox.ok(&[
        "sale", "add", "--employee", "ann lee", "--book", "1", "--date", "2025-01-10", "--price",
        "18",
    ]);
    assert!(added.contains("status=ok"));

    let report = sandbox.json(&["report", "--from", "2025-01-01", "--to", "2025-01-31", "--json"]);
    assert_eq!(report["total_profit"], 8.0);
    assert_eq!(report["most_sold_book"]["value"], 1);
    assert_eq!(report["most_sold_book"]["count"], 1);
    // The seller is stored under the employee's canonical name.
    assert_eq!(report["best_employee"]["value"], "Ann Lee");
    assert_eq!(report["most_sold_author"]["value"], "A");

    let removed = sandbox.ok(&["sale", "remove", "--book", "1", "--date", "2025-01-10"]);
    assert!(removed.contains("removed=1"));

    let sales = sandbox.json(&["sale", "list", "--json"]);
    assert_eq!(sales.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_saved_document_shape() {
    let sandbox = Sandbox::new();
    sandbox.seed();
    sandbox.ok(&[
        "sale", "add", "--employee", "Ann Lee", "--book", "1", "--date", "2025-01-10", "--price",
        "18",
    ]);

    let text = std::fs::read_to_string(sandbox.data_path()).expect("data file written");
    let document: Value = serde_json::from_str(&text).expect("valid JSON");
    assert_eq!(document["books"][0]["id"], 1);
    assert_eq!(document["sales"][0]["book_id"], 1);
    assert_eq!(document["employees"][0]["email"], "ann@shop.com");
    assert!(text.contains("\n    \"books\""));
}

#[test]
fn test_bulk_sale_removal() {
    let sandbox = Sandbox::new();
    sandbox.seed();
    for price in ["18", "19"] {
        sandbox.ok(&[
            "sale", "add", "--employee", "Ann Lee", "--book", "1", "--date", "2025-01-10",
            "--price", price,
        ]);
    }

    let removed = sandbox.ok(&["sale", "remove", "--book", "1", "--date", "2025-01-10"]);
    assert!(removed.contains("removed=2"));
}

#[test]
fn test_removing_book_keeps_sales() {
    let sandbox = Sandbox::new();
    sandbox.seed();
    sandbox.ok(&[
        "sale", "add", "--employee", "Ann Lee", "--book", "1", "--date", "2025-01-10", "--price",
        "18",
    ]);

    let removed = sandbox.ok(&["book", "remove", "1"]);
    assert!(removed.contains("removed=1"));
    assert!(removed.contains("sales_kept=1"));

    let sales = sandbox.json(&["sale", "list", "--json"]);
    assert_eq!(sales[0]["book_id"], 1);
    assert!(sales[0]["book_title"].is_null());

    // A new book never reuses the removed id.
    let added = sandbox.ok(&[
        "book", "add", "--title", "U", "--year", "2021", "--author", "B",
    ]);
    assert!(added.contains("id=2"));
}

#[test]
fn test_removed_book_id_is_not_reassigned() {
    let sandbox = Sandbox::new();
    sandbox.seed();
    for title in ["B", "C"] {
        sandbox.ok(&[
            "book", "add", "--title", title, "--year", "2020", "--author", "Y", "--cost", "1",
            "--price", "2",
        ]);
    }
    sandbox.ok(&[
        "sale", "add", "--employee", "Ann Lee", "--book", "3", "--date", "2025-01-10", "--price",
        "18",
    ]);
    sandbox.ok(&["book", "remove", "3"]);

    let added = sandbox.ok(&[
        "book", "add", "--title", "NEW", "--year", "2021", "--author", "Z",
    ]);
    assert!(added.contains("id=4"));

    let report = sandbox.ok(&["report", "--from", "2025-01-01", "--to", "2025-01-31"]);
    assert!(report.contains("most_sold_book=#3 (removed) (1 sale)"));
    assert!(report.contains("total_profit=0.00$"));
    assert!(report.contains("top_author=-"));
}

#[test]
fn test_sale_requires_known_employee_and_book() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.run(&[
        "sale", "add", "--employee", "Nobody", "--book", "1", "--date", "2025-01-10", "--price",
        "18",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Employee 'Nobody' not found"));

    let output = sandbox.run(&[
        "sale", "add", "--employee", "Ann Lee", "--book", "7", "--date", "2025-01-10", "--price",
        "18",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Book with ID 7 not found"));

    let output = sandbox.run(&[
        "sale", "add", "--employee", "Ann Lee", "--book", "1", "--date", "10.01.2025", "--price",
        "18",
    ]);
    assert!(!output.status.success());

    let sales = sandbox.json(&["sale", "list", "--json"]);
    assert_eq!(sales.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_book_year_is_validated() {
    let sandbox = Sandbox::new();
    let output = sandbox.run(&[
        "book", "add", "--title", "Old", "--year", "1399", "--author", "A",
    ]);
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("year must be between 1400"));
    assert!(!sandbox.data_path().exists());
}

#[test]
fn test_report_rejects_malformed_bounds() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let output = sandbox.run(&["report", "--from", "2025/01/01", "--to", "2025-01-31"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid date \"2025/01/01\""));
    assert!(stderr.contains("hint="));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_empty_report_has_no_results() {
    let sandbox = Sandbox::new();
    let report = sandbox.json(&["report", "--from", "2025-01-01", "--to", "2025-01-31", "--json"]);
    assert!(report["most_sold_book"].is_null());
    assert!(report["best_employee"].is_null());
    assert_eq!(report["total_profit"], 0.0);
    assert_eq!(report["sales_in_period"], 0);
}

#[test]
fn test_malformed_data_file_starts_empty() {
    let sandbox = Sandbox::new();
    std::fs::write(sandbox.data_path(), "not json at all").expect("write data");

    let books = sandbox.json(&["book", "list", "--json"]);
    assert_eq!(books.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_init_writes_config_used_by_later_commands() {
    let sandbox = Sandbox::new();
    let data = sandbox.dir.path().join("shop").join("store.json");
    let data_arg = data.to_string_lossy().to_string();

    let init = sandbox
        .command()
        .args(["init", data_arg.as_str()])
        .output()
        .expect("run init");
    assert!(
        init.status.success(),
        "init failed: {}",
        String::from_utf8_lossy(&init.stderr)
    );
    assert!(sandbox.config_path().exists());
    assert!(data.exists());

    let added = sandbox
        .command()
        .args(["employee", "add", "--name", "Ivan"])
        .output()
        .expect("run employee add");
    assert!(added.status.success());

    let text = std::fs::read_to_string(&data).expect("data file");
    assert!(text.contains("Ivan"));

    // A second init refuses to clobber the config.
    let again = sandbox
        .command()
        .args(["init", data_arg.as_str()])
        .output()
        .expect("run init again");
    assert!(!again.status.success());
    assert!(String::from_utf8_lossy(&again.stderr).contains("--force"));
}

#[test]
fn test_employee_remove_matches_exact_name() {
    let sandbox = Sandbox::new();
    sandbox.seed();

    let removed = sandbox.ok(&["employee", "remove", "ann lee"]);
    assert!(removed.contains("removed=0"));

    let removed = sandbox.ok(&["employee", "remove", "Ann Lee"]);
    assert!(removed.contains("removed=1"));

    let employees = sandbox.json(&["employee", "list", "--json"]);
    assert_eq!(employees.as_array().map(Vec::len), Some(0));
}

#[test]
fn test_completions_generate() {
    let sandbox = Sandbox::new();
    let script = sandbox.ok(&["completions", "bash"]);
    assert!(script.contains("bookstore"));
}
