//! Diagnostic logging to stderr.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset: the config's `log.level`, else warn.
pub fn default_level(config_level: Option<&str>) -> LevelFilter {
    config_level
        .and_then(|level| level.trim().parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::WARN)
}

/// Install the global subscriber. `RUST_LOG` directives take precedence.
pub fn init(config_level: Option<&str>) {
    let filter = EnvFilter::builder()
        .with_default_directive(default_level(config_level).into())
        .from_env_lossy();
    // A second install (tests) is harmless.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
