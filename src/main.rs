//! Promptpad: compose and tune text-completion prompts.
//!
//! This is the main entry point for the `promptpad` CLI. It parses arguments,
//! dispatches to the appropriate command handler, and handles errors with
//! proper exit codes.

mod cli;
mod commands;
pub mod config;
pub mod editor;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod fs;
pub mod history;
pub mod script;
pub mod session;
pub mod templates;

use cli::Cli;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match commands::dispatch(cli) {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
