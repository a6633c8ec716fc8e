//! Config struct definition and default implementation.

use crate::editor::EditorState;
use crate::history::DEFAULT_HISTORY_LIMIT;
use serde::{Deserialize, Serialize};

/// File name looked up in the working directory when no config is given.
pub const CONFIG_FILE_NAME: &str = ".promptpad.yaml";

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "PROMPTPAD_CONFIG";

/// Configuration for a promptpad session.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of past snapshots kept for undo (`0` keeps every snapshot).
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// YAML template catalog replacing the built-in one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_path: Option<String>,

    /// NDJSON file receiving one line per session event. Disabled when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub journal_path: Option<String>,

    /// Editor values at session start. Missing fields use the editor defaults.
    #[serde(default)]
    pub initial: EditorState,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            history_limit: default_history_limit(),
            catalog_path: None,
            journal_path: None,
            initial: EditorState::default(),
        }
    }
}

fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
