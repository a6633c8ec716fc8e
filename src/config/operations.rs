//! Config loading, validation, and resolution.

use super::model::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, Config};
use crate::editor::{MAX_STOP_SYMBOLS, MAX_TOKENS_RANGE, PARAMETER_RANGE};
use crate::error::{PromptpadError, Result};
use crate::templates::Catalog;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// Relative `catalog_path` and `journal_path` values are resolved against
    /// the directory holding the file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(PromptpadError::IoError)` - The file could not be read
    /// * `Err(PromptpadError::UserError)` - Parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            PromptpadError::IoError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let mut config = Self::from_yaml(&content)?;
        if let Some(base) = path.parent() {
            config.catalog_path = config.catalog_path.map(|p| relative_to(base, p));
            config.journal_path = config.journal_path.map(|p| relative_to(base, p));
        }
        Ok(config)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes to unit, not an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Config::default());
        }

        let config: Config = serde_yaml::from_str(yaml).map_err(|e| {
            PromptpadError::UserError(format!("failed to parse config YAML: {}", e))
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            PromptpadError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Load the config from the resolved path, or defaults when none exists.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let cwd = std::env::current_dir().map_err(|e| {
            PromptpadError::IoError(format!("failed to read current directory: {}", e))
        })?;
        let env_value = std::env::var(CONFIG_ENV_VAR).ok();

        match resolve_config_path(explicit, env_value.as_deref(), &cwd) {
            Some(path) => Self::load(path),
            None => Ok(Config::default()),
        }
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - initial temperature, top_p and penalties lie in `[0, 1]`
    /// - initial max_tokens lies in `[1, 512]`
    /// - initial stop_symbols has at most 4 distinct entries
    ///
    /// Unlike editor input, config values are rejected rather than clamped so
    /// a typo in the file is reported.
    pub fn validate(&self) -> Result<()> {
        let initial = &self.initial;

        let parameters = [
            ("temperature", initial.temperature),
            ("top_p", initial.top_p),
            ("frequency_penalty", initial.frequency_penalty),
            ("presence_penalty", initial.presence_penalty),
        ];
        for (name, value) in parameters {
            if !PARAMETER_RANGE.contains(&value) {
                return Err(PromptpadError::UserError(format!(
                    "config validation failed: initial.{} must be between {} and {} (found {})",
                    name,
                    PARAMETER_RANGE.start(),
                    PARAMETER_RANGE.end(),
                    value
                )));
            }
        }

        if !MAX_TOKENS_RANGE.contains(&initial.max_tokens) {
            return Err(PromptpadError::UserError(format!(
                "config validation failed: initial.max_tokens must be between {} and {} (found {})",
                MAX_TOKENS_RANGE.start(),
                MAX_TOKENS_RANGE.end(),
                initial.max_tokens
            )));
        }

        if initial.stop_symbols.len() > MAX_STOP_SYMBOLS {
            return Err(PromptpadError::UserError(format!(
                "config validation failed: initial.stop_symbols allows at most {} entries (found {})",
                MAX_STOP_SYMBOLS,
                initial.stop_symbols.len()
            )));
        }

        let mut seen = HashSet::new();
        for symbol in &initial.stop_symbols {
            if !seen.insert(symbol.as_str()) {
                return Err(PromptpadError::UserError(format!(
                    "config validation failed: initial.stop_symbols contains '{}' twice",
                    symbol
                )));
            }
        }

        Ok(())
    }

    /// The template catalog this config selects.
    pub fn catalog(&self) -> Result<Catalog> {
        match &self.catalog_path {
            Some(path) => Catalog::load(path),
            None => Ok(Catalog::builtin().clone()),
        }
    }
}

/// Pick the config file: an explicit path wins, then the environment
/// variable, then `.promptpad.yaml` in `cwd` if it exists.
pub fn resolve_config_path(
    explicit: Option<&Path>,
    env_value: Option<&str>,
    cwd: &Path,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(value) = env_value.filter(|v| !v.trim().is_empty()) {
        return Some(PathBuf::from(value));
    }

    let local = cwd.join(CONFIG_FILE_NAME);
    local.is_file().then_some(local)
}

fn relative_to(base: &Path, path: String) -> String {
    if Path::new(&path).is_absolute() {
        path
    } else {
        base.join(path).to_string_lossy().into_owned()
    }
}
