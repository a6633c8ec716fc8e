//! Configuration model for promptpad.
//!
//! This module defines the Config struct that represents `.promptpad.yaml`.
//! It supports forward-compatible YAML parsing (unknown fields are ignored),
//! sensible defaults for optional fields, and validation of config values.

mod model;
mod operations;

#[cfg(test)]
mod tests;

pub use model::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, Config};
pub use operations::resolve_config_path;
