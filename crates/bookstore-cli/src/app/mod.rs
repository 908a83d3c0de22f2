//! Application-level utilities for the Bookstore CLI.
//!
//! This module provides:
//! - The per-invocation context (CLI args plus lazily loaded config)
//! - Path resolution for config and data files

mod context;
mod resolver;

pub use context::AppContext;
pub use resolver::resolve_config_path;
