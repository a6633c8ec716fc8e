//! CLI argument parsing for promptpad.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Promptpad: compose and tune text-completion prompts.
///
/// The editor state (prompt plus generation parameters) lives in an undoable
/// session. Templates from the catalog fill the prompt with worked examples.
#[derive(Parser, Debug)]
#[command(name = "promptpad")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (defaults to $PROMPTPAD_CONFIG, then ./.promptpad.yaml).
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptpad.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default `.promptpad.yaml` in the current directory.
    Init(InitArgs),

    /// Browse and export the template catalog.
    Templates(TemplatesCommand),

    /// Print a template's prompt with an example substituted.
    Expand(ExpandArgs),

    /// Replay an editor script and print the resulting state.
    ///
    /// One event per line: `prompt`, `api-key`, `temperature`, `top-p`,
    /// `frequency-penalty`, `presence-penalty`, `max-tokens`,
    /// `stop add|delete`, `template <id> [example]`, `undo`, `redo`.
    Run(RunArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Overwrite an existing config file.
    #[arg(long)]
    pub force: bool,
}

/// Template subcommands.
#[derive(Parser, Debug)]
pub struct TemplatesCommand {
    #[command(subcommand)]
    pub action: TemplatesAction,
}

#[derive(Subcommand, Debug)]
pub enum TemplatesAction {
    /// List template groups and their templates.
    List,

    /// Show one template's prompt pattern, examples and overrides.
    Show(ShowArgs),

    /// Write the catalog as YAML.
    Export(ExportArgs),
}

/// Arguments for `templates show`.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Template id (e.g., headline-generation).
    pub id: String,
}

/// Arguments for `templates export`.
#[derive(Parser, Debug)]
pub struct ExportArgs {
    /// Output file. Prints to stdout when omitted.
    #[arg(short, long)]
    pub out: Option<PathBuf>,
}

/// Arguments for the `expand` command.
#[derive(Parser, Debug)]
pub struct ExpandArgs {
    /// Template id (e.g., headline-generation).
    pub id: String,

    /// Example index. Defaults to the first example, or the raw prompt for
    /// templates without examples.
    #[arg(short, long)]
    pub example: Option<usize>,
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script file. Reads stdin when omitted.
    pub script: Option<PathBuf>,

    /// What to print once the script finishes.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::State)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Editor state as YAML (API key masked).
    State,
    /// Completion request body as JSON.
    Request,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
