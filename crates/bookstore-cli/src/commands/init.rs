use std::path::PathBuf;

use bookstore_core::{Bookstore, DocumentStore, JsonFileStore};

use crate::app::{resolve_config_path, AppContext};
use crate::cli::InitArgs;
use crate::config::{default_data_path, write_config, BookstoreConfig};
use crate::ui::{hint, print, receipt};

pub fn handle_init(ctx: &AppContext, args: &InitArgs) -> anyhow::Result<()> {
    let config_path = resolve_config_path()?;
    if config_path.exists() && !args.force {
        return Err(anyhow::anyhow!(
            "Config already exists at {}\nHint: pass --force to overwrite it",
            config_path.display()
        ));
    }

    let data_path = match args.path.as_deref().or(ctx.cli().data.as_deref()) {
        Some(path) => PathBuf::from(path),
        None => default_data_path()?,
    };

    write_config(
        &config_path,
        &BookstoreConfig::new(&data_path, args.log_level.clone()),
    )?;

    // An existing data file is kept as-is.
    let store = JsonFileStore::new(&data_path);
    let created = !data_path.exists();
    if created {
        store.save(&Bookstore::new().to_document())?;
    }
    tracing::info!(
        config = %config_path.display(),
        data = %data_path.display(),
        created,
        "initialized"
    );

    if !ctx.quiet() {
        let ui = ctx.ui_context(false);
        let config = config_path.display().to_string();
        let data = data_path.display().to_string();
        let status = if created { "created" } else { "kept existing" };
        print(
            &ui,
            &receipt(
                &ui,
                "Bookstore initialized",
                &[("Config", &config), ("Data", &data), ("Data file", status)],
            ),
        );
        print(&ui, &hint(&ui, "bookstore employee add --name \"...\""));
    }
    Ok(())
}
