//! Implementation of the `promptpad run` command.
//!
//! Replays an editor script against a fresh session and prints the final
//! snapshot.

use crate::cli::{OutputFormat, RunArgs};
use crate::config::Config;
use crate::editor::EditorState;
use crate::error::{PromptpadError, Result};
use crate::script::{parse_script, run_script};
use crate::session::Session;
use crate::templates::Catalog;
use std::io::Read;
use std::path::Path;

/// Execute the `promptpad run` command.
pub fn cmd_run(config_path: Option<&Path>, args: RunArgs) -> Result<()> {
    let config = Config::resolve(config_path)?;
    let catalog = config.catalog()?;
    let source = read_script(args.script.as_deref())?;

    let mut session = Session::from_config(&config)?;
    let state = replay(&mut session, &catalog, &source)?;

    print!("{}", render_output(state, args.format)?);
    Ok(())
}

fn read_script(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            PromptpadError::IoError(format!(
                "failed to read script '{}': {}",
                path.display(),
                e
            ))
        }),
        None => {
            let mut source = String::new();
            std::io::stdin()
                .read_to_string(&mut source)
                .map_err(|e| PromptpadError::IoError(format!("failed to read stdin: {}", e)))?;
            Ok(source)
        }
    }
}

fn replay<'a>(session: &'a mut Session, catalog: &Catalog, source: &str) -> Result<&'a EditorState> {
    let script = parse_script(source)?;
    run_script(session, catalog, &script)?;
    Ok(session.state())
}

fn render_output(state: &EditorState, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::State => {
            let mut masked = state.clone();
            if !masked.api_key.is_empty() {
                masked.api_key = "********".to_string();
            }
            serde_yaml::to_string(&masked).map_err(|e| {
                PromptpadError::UserError(format!("failed to serialize state to YAML: {}", e))
            })
        }
        OutputFormat::Request => {
            let json = serde_json::to_string_pretty(&state.completion_request()).map_err(|e| {
                PromptpadError::UserError(format!("failed to serialize request to JSON: {}", e))
            })?;
            Ok(format!("{}\n", json))
        }
    }
}
