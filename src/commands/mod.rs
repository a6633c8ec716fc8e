//! Command implementations for promptpad.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command resolves the config itself so `init` can
//! run without one.

mod expand;
mod init;
mod run;
mod templates;

use crate::cli::{Cli, Command, TemplatesAction};
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.as_deref();
    match cli.command {
        Command::Init(args) => init::cmd_init(args),
        Command::Templates(cmd) => match cmd.action {
            TemplatesAction::List => templates::cmd_list(config_path),
            TemplatesAction::Show(args) => templates::cmd_show(config_path, args),
            TemplatesAction::Export(args) => templates::cmd_export(config_path, args),
        },
        Command::Expand(args) => expand::cmd_expand(config_path, args),
        Command::Run(args) => run::cmd_run(config_path, args),
    }
}
