use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct BookstoreConfig {
    pub store: StoreSection,
    #[serde(default)]
    pub log: LogSection,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LogSection {
    pub level: Option<String>,
}

impl BookstoreConfig {
    pub fn new(data_path: &Path, log_level: Option<String>) -> Self {
        Self {
            store: StoreSection {
                path: data_path.to_string_lossy().to_string(),
            },
            log: LogSection { level: log_level },
        }
    }
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_data_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_data_dir()?.join("data.json"))
}

pub fn read_config(path: &Path) -> anyhow::Result<BookstoreConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

/// Read the config if one exists; a missing file is not an error.
pub fn read_config_if_present(path: &Path) -> anyhow::Result<Option<BookstoreConfig>> {
    if !path.exists() {
        return Ok(None);
    }
    read_config(path).map(Some)
}

pub fn write_config(path: &Path, config: &BookstoreConfig) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| {
            anyhow::anyhow!(
                "Failed to create config directory {}: {}",
                parent.display(),
                e
            )
        })?;
    }
    let contents =
        toml::to_string_pretty(config).map_err(|e| anyhow::anyhow!("TOML error: {}", e))?;
    std::fs::write(path, contents)
        .map_err(|e| anyhow::anyhow!("Failed to write config {}: {}", path.display(), e))?;
    Ok(())
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("bookstore"));
        }
    }
    Ok(home_dir()?.join(".config").join("bookstore"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("bookstore"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("bookstore"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = BookstoreConfig::new(Path::new("/srv/shop/data.json"), Some("info".into()));

        write_config(&path, &config).unwrap();
        let loaded = read_config(&path).unwrap();
        assert_eq!(loaded.store.path, "/srv/shop/data.json");
        assert_eq!(loaded.log.level.as_deref(), Some("info"));
    }

    #[test]
    fn test_log_section_is_optional() {
        let config: BookstoreConfig = toml::from_str("[store]\npath = \"d.json\"\n").unwrap();
        assert_eq!(config.store.path, "d.json");
        assert!(config.log.level.is_none());
    }

    #[test]
    fn test_missing_config_is_none() {
        let dir = tempdir().unwrap();
        let found = read_config_if_present(&dir.path().join("absent.toml")).unwrap();
        assert!(found.is_none());
    }

    #[test]
    fn test_broken_config_names_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store = ").unwrap();
        let err = read_config(&path).unwrap_err().to_string();
        assert!(err.contains("Failed to parse config"));
    }
}
