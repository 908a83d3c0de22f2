use bookstore_core::BookstoreError;

use crate::app::AppContext;
use crate::cli::ReportArgs;
use crate::output::{print_json, report_json, report_lines};
use crate::ui::{header, print};

pub fn handle_report(ctx: &AppContext, args: &ReportArgs) -> anyhow::Result<()> {
    let (bookstore, _store) = ctx.load()?;
    let summary = bookstore
        .report(&args.from, &args.to)
        .map_err(|err| match err {
            BookstoreError::InvalidDate { .. } => {
                anyhow::anyhow!("{}\nHint: dates look like 2025-01-31", err)
            }
            other => other.into(),
        })?;

    let ui = ctx.ui_context(args.json);
    if ui.mode.is_json() {
        return print_json(&report_json(&summary)?);
    }

    let range = format!("{} .. {}", summary.from, summary.to);
    print(&ui, &header(&ui, "report", Some(&range)));
    for line in report_lines(&ui, &summary, &bookstore.books) {
        print(&ui, &line);
    }
    Ok(())
}
