//! Theme definitions for colors and badges.

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",
            (Self::Ok, false) => "[OK]",
            (Self::Warn, true) => "[\u{26A0}]",
            (Self::Warn, false) => "[WARN]",
            (Self::Err, true) => "[\u{2717}]",
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            Self::Ok => colors::GREEN,
            Self::Warn => colors::YELLOW,
            Self::Err => colors::RED,
        }
    }
}

/// Color definitions using ANSI escape codes.
pub mod colors {
    /// Dim text (for labels, metadata)
    pub const DIM: &str = "\x1b[2m";
    /// Bold text (for titles)
    pub const BOLD: &str = "\x1b[1m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const RED: &str = "\x1b[31m";
    /// Reset all styles
    pub const RESET: &str = "\x1b[0m";
}

/// Wrap `text` in an ANSI style when color is enabled.
pub fn styled(text: &str, style: &str, color: bool) -> String {
    if color {
        format!("{}{}{}", style, text, colors::RESET)
    } else {
        text.to_string()
    }
}
