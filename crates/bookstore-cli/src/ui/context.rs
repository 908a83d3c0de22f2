//! UI context for environment detection.

use std::io::IsTerminal;

use super::mode::OutputMode;

/// Terminal and environment context for UI decisions.
#[derive(Debug, Clone)]
pub struct UiContext {
    /// Whether color output is enabled
    pub color: bool,
    /// Whether unicode symbols are enabled
    pub unicode: bool,
    /// Resolved output mode
    pub mode: OutputMode,
}

impl UiContext {
    /// Create context from environment and the `--json` flag.
    ///
    /// Color is off for `NO_COLOR`, `TERM=dumb` or non-TTY stdout.
    /// `BOOKSTORE_ASCII` switches badges and table borders to ASCII.
    pub fn from_env(json_flag: bool) -> Self {
        let is_tty = std::io::stdout().is_terminal();
        let term_is_dumb = std::env::var("TERM").map(|v| v == "dumb").unwrap_or(false);
        let no_color_env = std::env::var("NO_COLOR").is_ok();

        Self {
            color: is_tty && !no_color_env && !term_is_dumb,
            unicode: std::env::var("BOOKSTORE_ASCII").is_err(),
            mode: OutputMode::resolve(json_flag, is_tty, term_is_dumb),
        }
    }

    /// Check if interactive prompts are possible.
    pub fn is_interactive(&self) -> bool {
        std::io::stdin().is_terminal() && std::io::stdout().is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_mode_from_flag() {
        let ctx = UiContext::from_env(true);
        assert_eq!(ctx.mode, OutputMode::Json);
    }
}
