//! Rendering primitives for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL};
use comfy_table::{ContentArrangement, Table as ComfyTable};

use super::context::UiContext;
use super::mode::OutputMode;
use super::theme::{colors, styled, Badge};

/// Render a header line for a command.
///
/// Pretty mode: "Bookstore · command (context)"
/// Plain mode: "bookstore command"
pub fn header(ctx: &UiContext, command: &str, context: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Pretty => {
            let title = styled("Bookstore", colors::BOLD, ctx.color);
            match context {
                Some(c) => format!("{} \u{00B7} {} ({})", title, command, c),
                None => format!("{} \u{00B7} {}", title, command),
            }
        }
        OutputMode::Plain => format!("bookstore {}", command),
        OutputMode::Json => String::new(),
    }
}

/// Render a badge with optional message.
pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let colored_badge = styled(kind.display(ctx.unicode), kind.style(), ctx.color);
    if message.is_empty() {
        colored_badge
    } else {
        format!("{} {}", colored_badge, message)
    }
}

/// Render a key-value pair.
///
/// Pretty mode: "Key: value" with dim key
/// Plain mode: "key=value"
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if ctx.mode.is_pretty() {
        let styled_key = styled(&format!("{}:", key), colors::DIM, ctx.color);
        format!("{} {}", styled_key, value)
    } else {
        format!("{}={}", key.to_lowercase().replace(' ', "_"), value)
    }
}

/// Render a hint line.
pub fn hint(ctx: &UiContext, text: &str) -> String {
    if ctx.mode.is_pretty() {
        let label = styled("Hint:", colors::DIM, ctx.color);
        format!("{} {}", label, text)
    } else {
        format!("hint={}", text)
    }
}

/// Render a receipt (summary block after an action).
///
/// Pretty mode: Badge + indented key-value pairs
/// Plain mode: status=ok + key=value lines
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, &str)]) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Ok, title));
        for (key, value) in items {
            lines.push(format!("  {}", kv(ctx, key, value)));
        }
    } else {
        lines.push("status=ok".to_string());
        for (key, value) in items {
            lines.push(kv(ctx, key, value));
        }
    }

    lines.join("\n")
}

/// Column definition for table rendering.
#[derive(Debug, Clone)]
pub struct Column {
    pub header: &'static str,
}

impl Column {
    pub const fn new(header: &'static str) -> Self {
        Self { header }
    }
}

/// Render a table.
///
/// Pretty mode: bordered comfy-table
/// Plain mode: tab-separated values, no header
pub fn table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if ctx.mode.is_pretty() {
        let mut table = ComfyTable::new();
        if ctx.unicode {
            table
                .load_preset(UTF8_FULL)
                .apply_modifier(UTF8_ROUND_CORNERS);
        } else {
            table.load_preset(ASCII_MARKDOWN);
        }
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(columns.iter().map(|c| c.header).collect::<Vec<_>>());
        for row in rows {
            table.add_row(row);
        }
        table.to_string()
    } else {
        rows.iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Print a message to stdout unless in JSON mode.
pub fn print(ctx: &UiContext, message: &str) {
    if !ctx.mode.is_json() && !message.is_empty() {
        println!("{}", message);
    }
}

/// Format an error message with optional hint.
///
/// Pretty mode: "[ERR] message" with optional "Hint: ..." on next line
/// Plain mode: "error=message" with optional "hint=suggestion"
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let mut lines = Vec::new();

    if ctx.mode.is_pretty() {
        lines.push(badge(ctx, Badge::Err, message));
        if let Some(h) = error_hint {
            lines.push(hint(ctx, h));
        }
    } else {
        lines.push(format!("error={}", message));
        if let Some(h) = error_hint {
            lines.push(format!("hint={}", h));
        }
    }

    lines.join("\n")
}

/// Print an error message to stderr with optional hint.
pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: false,
            mode: OutputMode::Plain,
        }
    }

    fn pretty_ctx() -> UiContext {
        UiContext {
            color: false,
            unicode: true,
            mode: OutputMode::Pretty,
        }
    }

    #[test]
    fn test_header_plain() {
        assert_eq!(header(&plain_ctx(), "book list", None), "bookstore book list");
    }

    #[test]
    fn test_header_pretty_with_context() {
        let h = header(&pretty_ctx(), "report", Some("2025-01-01 .. 2025-01-31"));
        assert!(h.contains("Bookstore"));
        assert!(h.contains("2025-01-01 .. 2025-01-31"));
    }

    #[test]
    fn test_kv_plain() {
        assert_eq!(kv(&plain_ctx(), "Total Profit", "8.00$"), "total_profit=8.00$");
    }

    #[test]
    fn test_receipt_plain() {
        let r = receipt(&plain_ctx(), "Book added", &[("ID", "1")]);
        assert_eq!(r, "status=ok\nid=1");
    }

    #[test]
    fn test_receipt_pretty() {
        let r = receipt(&pretty_ctx(), "Book added", &[("ID", "1")]);
        assert!(r.contains("[\u{2713}] Book added"));
        assert!(r.contains("  ID: 1"));
    }

    #[test]
    fn test_table_plain_is_tab_separated() {
        let columns = [Column::new("ID"), Column::new("Title")];
        let rows = vec![vec!["1".to_string(), "Dune".to_string()]];
        assert_eq!(table(&plain_ctx(), &columns, &rows), "1\tDune");
    }

    #[test]
    fn test_table_pretty_has_headers() {
        let columns = [Column::new("ID"), Column::new("Title")];
        let rows = vec![vec!["1".to_string(), "Кобзар".to_string()]];
        let t = table(&pretty_ctx(), &columns, &rows);
        assert!(t.contains("ID"));
        assert!(t.contains("Title"));
        assert!(t.contains("Кобзар"));
    }

    #[test]
    fn test_error_message_with_hint() {
        let e = error_message(&plain_ctx(), "Book 9 not found", Some("bookstore book list"));
        assert_eq!(e, "error=Book 9 not found\nhint=bookstore book list");

        let e = error_message(&pretty_ctx(), "Book 9 not found", None);
        assert!(e.contains("[\u{2717}]"));
    }
}
