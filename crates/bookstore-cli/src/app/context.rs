//! Application context for the Bookstore CLI.
//!
//! Provides a unified context that combines CLI arguments with the
//! lazily-loaded config file.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;

use bookstore_core::{Bookstore, JsonFileStore};

use crate::cli::Cli;
use crate::config::{read_config_if_present, BookstoreConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_path};

/// Application context that bundles CLI args with configuration.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<Option<BookstoreConfig>>,
}

impl<'a> AppContext<'a> {
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    pub fn cli(&self) -> &Cli {
        self.cli
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// The config file, loaded on first use. `None` when there is none.
    pub fn config(&self) -> anyhow::Result<Option<&BookstoreConfig>> {
        let config = self
            .config
            .get_or_try_init(|| read_config_if_present(&resolve_config_path()?))?;
        Ok(config.as_ref())
    }

    /// Log level from the config, ignoring a config that fails to load.
    pub fn log_level(&self) -> Option<String> {
        self.config()
            .ok()
            .flatten()
            .and_then(|config| config.log.level.clone())
    }

    /// UI context for a command's output.
    pub fn ui_context(&self, json: bool) -> UiContext {
        UiContext::from_env(json)
    }

    pub fn data_path(&self) -> anyhow::Result<PathBuf> {
        resolve_data_path(self.cli.data.as_deref(), self.config()?)
    }

    pub fn store(&self) -> anyhow::Result<JsonFileStore> {
        Ok(JsonFileStore::new(self.data_path()?))
    }

    /// Load the whole bookstore from the resolved data file.
    pub fn load(&self) -> anyhow::Result<(Bookstore, JsonFileStore)> {
        let store = self.store()?;
        let bookstore = Bookstore::load(&store)?;
        Ok((bookstore, store))
    }

    /// Load, apply `change`, then save. Nothing is written if `change` fails.
    pub fn update<T>(
        &self,
        change: impl FnOnce(&mut Bookstore) -> anyhow::Result<T>,
    ) -> anyhow::Result<T> {
        let (mut bookstore, store) = self.load()?;
        let result = change(&mut bookstore)?;
        bookstore.save(&store)?;
        Ok(result)
    }
}
