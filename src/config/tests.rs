//! Tests for config functionality.

use crate::config::{CONFIG_FILE_NAME, Config, resolve_config_path};
use crate::error::PromptpadError;
use crate::history::DEFAULT_HISTORY_LIMIT;
use std::path::Path;
use tempfile::TempDir;

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.history_limit, DEFAULT_HISTORY_LIMIT);
    assert!(config.catalog_path.is_none());
    assert!(config.journal_path.is_none());
    assert_eq!(config.initial.temperature, 0.5);
    assert_eq!(config.initial.max_tokens, 10);
}

#[test]
fn test_parse_minimal_yaml() {
    let config = Config::from_yaml("").unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn test_parse_partial_yaml() {
    let yaml = r####"
history_limit: 20
initial:
  temperature: 0.7
  stop_symbols: ["###"]
"####;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.history_limit, 20);
    assert_eq!(config.initial.temperature, 0.7);
    assert_eq!(config.initial.stop_symbols, vec!["###"]);

    // Unspecified values should use defaults
    assert_eq!(config.initial.top_p, 0.5);
    assert_eq!(config.initial.max_tokens, 10);
    assert_eq!(config.initial.prompt, "");
}

#[test]
fn test_parse_full_yaml() {
    let yaml = r#"
history_limit: 0
catalog_path: templates.yaml
journal_path: session.ndjson
initial:
  prompt: "Hello"
  api_key: "sk-test"
  temperature: 0.1
  top_p: 0.2
  frequency_penalty: 0.3
  presence_penalty: 0.4
  max_tokens: 256
  stop_symbols: ["a", "b"]
"#;
    let config = Config::from_yaml(yaml).unwrap();

    assert_eq!(config.history_limit, 0);
    assert_eq!(config.catalog_path.as_deref(), Some("templates.yaml"));
    assert_eq!(config.journal_path.as_deref(), Some("session.ndjson"));
    assert_eq!(config.initial.prompt, "Hello");
    assert_eq!(config.initial.api_key, "sk-test");
    assert_eq!(config.initial.frequency_penalty, 0.3);
    assert_eq!(config.initial.presence_penalty, 0.4);
    assert_eq!(config.initial.max_tokens, 256);
}

#[test]
fn test_unknown_fields_ignored() {
    let yaml = r#"
history_limit: 5
future_option: true
"#;
    let config = Config::from_yaml(yaml).unwrap();
    assert_eq!(config.history_limit, 5);
}

#[test]
fn test_validation_rejects_out_of_range_parameter() {
    let result = Config::from_yaml("initial:\n  temperature: 1.5\n");
    let err = result.unwrap_err();
    assert!(matches!(err, PromptpadError::UserError(_)));
    assert!(err.to_string().contains("initial.temperature"));
}

#[test]
fn test_validation_rejects_max_tokens() {
    let err = Config::from_yaml("initial:\n  max_tokens: 0\n").unwrap_err();
    assert!(err.to_string().contains("initial.max_tokens"));

    let err = Config::from_yaml("initial:\n  max_tokens: 513\n").unwrap_err();
    assert!(err.to_string().contains("initial.max_tokens"));
}

#[test]
fn test_validation_rejects_stop_symbols() {
    let err = Config::from_yaml("initial:\n  stop_symbols: [a, b, c, d, e]\n").unwrap_err();
    assert!(err.to_string().contains("at most 4"));

    let err = Config::from_yaml("initial:\n  stop_symbols: [a, a]\n").unwrap_err();
    assert!(err.to_string().contains("twice"));
}

#[test]
fn test_invalid_yaml() {
    let result = Config::from_yaml("history_limit: [not a number");
    assert!(result.is_err());
}

#[test]
fn test_roundtrip_yaml() {
    let original = Config {
        history_limit: 42,
        journal_path: Some("journal.ndjson".to_string()),
        ..Config::default()
    };
    let yaml = original.to_yaml().unwrap();
    let parsed = Config::from_yaml(&yaml).unwrap();
    assert_eq!(parsed, original);
}

#[test]
fn test_load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, "history_limit: 7\n").unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(config.history_limit, 7);
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path().join("missing.yaml")).unwrap_err();
    assert!(matches!(err, PromptpadError::IoError(_)));
    assert_eq!(err.exit_code(), crate::exit_codes::IO_FAILURE);
    assert!(err.to_string().contains("failed to read config file"));
}

#[test]
fn test_catalog_defaults_to_builtin() {
    let catalog = Config::default().catalog().unwrap();
    assert!(catalog.find("headline-generation").is_some());
}

#[test]
fn test_catalog_from_path() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("catalog.yaml");
    std::fs::write(
        &path,
        "- name: Mine\n  templates:\n    - id: mine\n      name: Mine\n      actionPayload:\n        prompt: hi\n",
    )
    .unwrap();

    let config = Config {
        catalog_path: Some(path.to_string_lossy().to_string()),
        ..Config::default()
    };
    let catalog = config.catalog().unwrap();
    assert!(catalog.find("mine").is_some());
    assert!(catalog.find("headline-generation").is_none());
}

#[test]
fn test_load_resolves_relative_paths_against_config_dir() {
    let temp = TempDir::new().unwrap();
    let project = temp.path().join("project");
    std::fs::create_dir(&project).unwrap();
    std::fs::write(
        project.join("catalog.yaml"),
        "- name: Mine\n  templates:\n    - id: mine\n      name: Mine\n      actionPayload:\n        prompt: hi\n",
    )
    .unwrap();
    let path = project.join(CONFIG_FILE_NAME);
    std::fs::write(
        &path,
        "catalog_path: catalog.yaml\njournal_path: logs/session.ndjson\n",
    )
    .unwrap();

    let config = Config::load(&path).unwrap();

    assert_eq!(
        config.catalog_path.as_deref().map(Path::new),
        Some(project.join("catalog.yaml").as_path())
    );
    assert_eq!(
        config.journal_path.as_deref().map(Path::new),
        Some(project.join("logs/session.ndjson").as_path())
    );
    assert!(config.catalog().unwrap().find("mine").is_some());
}

#[test]
fn test_load_keeps_absolute_paths() {
    let temp = TempDir::new().unwrap();
    let catalog = temp.path().join("elsewhere.yaml");
    let path = temp.path().join(CONFIG_FILE_NAME);
    std::fs::write(&path, format!("catalog_path: {}\n", catalog.display())).unwrap();

    let config = Config::load(&path).unwrap();
    assert_eq!(
        config.catalog_path.as_deref().map(Path::new),
        Some(catalog.as_path())
    );
}

#[test]
fn test_resolve_prefers_explicit_path() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

    let resolved = resolve_config_path(
        Some(Path::new("/explicit.yaml")),
        Some("/from-env.yaml"),
        temp.path(),
    );
    assert_eq!(resolved.as_deref(), Some(Path::new("/explicit.yaml")));
}

#[test]
fn test_resolve_uses_env_before_local_file() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();

    let resolved = resolve_config_path(None, Some("/from-env.yaml"), temp.path());
    assert_eq!(resolved.as_deref(), Some(Path::new("/from-env.yaml")));
}

#[test]
fn test_resolve_ignores_blank_env() {
    let temp = TempDir::new().unwrap();
    let resolved = resolve_config_path(None, Some("  "), temp.path());
    assert!(resolved.is_none());
}

#[test]
fn test_resolve_falls_back_to_local_file() {
    let temp = TempDir::new().unwrap();
    assert!(resolve_config_path(None, None, temp.path()).is_none());

    std::fs::write(temp.path().join(CONFIG_FILE_NAME), "").unwrap();
    let resolved = resolve_config_path(None, None, temp.path());
    assert_eq!(resolved, Some(temp.path().join(CONFIG_FILE_NAME)));
}
