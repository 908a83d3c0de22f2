//! Output mode routing logic.

/// Output mode determines how results are formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Machine-readable JSON output only
    Json,
    /// Plain text, stable for logs and scripts
    #[default]
    Plain,
    /// Tables and badges (TTY only)
    Pretty,
}

impl OutputMode {
    /// Resolve output mode from the `--json` flag and the terminal.
    ///
    /// `--json` always wins. `TERM=dumb` and non-TTY stdout get plain.
    pub fn resolve(json_flag: bool, is_tty: bool, term_is_dumb: bool) -> Self {
        if json_flag {
            Self::Json
        } else if is_tty && !term_is_dumb {
            Self::Pretty
        } else {
            Self::Plain
        }
    }

    pub fn is_json(&self) -> bool {
        matches!(self, Self::Json)
    }

    pub fn is_pretty(&self) -> bool {
        matches!(self, Self::Pretty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_exclusive() {
        assert_eq!(OutputMode::resolve(true, true, false), OutputMode::Json);
        assert_eq!(OutputMode::resolve(true, false, true), OutputMode::Json);
    }

    #[test]
    fn test_term_dumb_forces_plain() {
        assert_eq!(OutputMode::resolve(false, true, true), OutputMode::Plain);
    }

    #[test]
    fn test_tty_gets_pretty() {
        assert_eq!(OutputMode::resolve(false, true, false), OutputMode::Pretty);
    }

    #[test]
    fn test_non_tty_gets_plain() {
        assert_eq!(OutputMode::resolve(false, false, false), OutputMode::Plain);
    }
}
