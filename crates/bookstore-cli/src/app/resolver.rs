//! Path resolution for config and data files.

use std::path::PathBuf;

use crate::config::{default_config_path, default_data_path, BookstoreConfig};

/// Resolve the config file path, checking BOOKSTORE_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("BOOKSTORE_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data file path.
///
/// Order: `--data` / `BOOKSTORE_DATA`, then `store.path` from the config,
/// then the XDG data directory.
pub fn resolve_data_path(
    flag: Option<&str>,
    config: Option<&BookstoreConfig>,
) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(config) = config {
        if !config.store.path.trim().is_empty() {
            return Ok(PathBuf::from(&config.store.path));
        }
    }
    default_data_path()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_flag_wins() {
        let config = BookstoreConfig::new(Path::new("/from/config.json"), None);
        let path = resolve_data_path(Some("/from/flag.json"), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/flag.json"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let config = BookstoreConfig::new(Path::new("/from/config.json"), None);
        let path = resolve_data_path(None, Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }

    #[test]
    fn test_blank_flag_is_ignored() {
        let config = BookstoreConfig::new(Path::new("/from/config.json"), None);
        let path = resolve_data_path(Some("  "), Some(&config)).unwrap();
        assert_eq!(path, PathBuf::from("/from/config.json"));
    }
}
