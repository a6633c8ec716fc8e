//! Implementation of the `promptpad init` command.
//!
//! Writes a default `.promptpad.yaml` into the current directory.

use crate::cli::InitArgs;
use crate::config::{CONFIG_FILE_NAME, Config};
use crate::error::{PromptpadError, Result};
use crate::fs::atomic_write_file;
use std::path::Path;

const CONFIG_HEADER: &str = "\
# promptpad configuration
#
# history_limit: undo steps kept per session (0 keeps every step)
# catalog_path:  YAML template catalog replacing the built-in one
# journal_path:  NDJSON file receiving one line per session event
# initial:       editor values at session start
";

/// Execute the `promptpad init` command.
pub fn cmd_init(args: InitArgs) -> Result<()> {
    let cwd = std::env::current_dir().map_err(|e| {
        PromptpadError::IoError(format!("failed to read current directory: {}", e))
    })?;
    let path = write_default_config(&cwd, args.force)?;
    println!("Wrote {}", path.display());
    Ok(())
}

/// Write the default config into `dir`, refusing to overwrite unless `force`.
fn write_default_config(dir: &Path, force: bool) -> Result<std::path::PathBuf> {
    let path = dir.join(CONFIG_FILE_NAME);

    if path.exists() && !force {
        return Err(PromptpadError::UserError(format!(
            "'{}' already exists. Use --force to overwrite it.",
            path.display()
        )));
    }

    let body = Config::default().to_yaml()?;
    atomic_write_file(&path, &format!("{}\n{}", CONFIG_HEADER, body))?;
    Ok(path)
}
