//! Session journal for promptpad.
//!
//! This module implements append-only event logging of editor sessions.
//! Events are stored in NDJSON format (one JSON object per line) in the file
//! named by the `journal_path` config option.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `kind`: What happened (session_start, apply, template_load, undo, redo)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `recorded`: Whether the event changed the current snapshot
//! - `details`: Freeform object with event-specific details
//!
//! API keys never appear in `details`.
//!
//! ```no_run
//! use promptpad::events::{Event, EventKind, Journal};
//! use serde_json::json;
//!
//! let journal = Journal::new("session.ndjson");
//! let event = Event::new(EventKind::Undo).with_details(json!({"past": 3}));
//! journal.append(&event)?;
//! # Ok::<(), promptpad::error::PromptpadError>(())
//! ```

use crate::error::{PromptpadError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Kinds of session events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Session created with its initial snapshot
    SessionStart,
    /// Editor action dispatched
    Apply,
    /// Template expanded and loaded
    TemplateLoad,
    /// Undo requested
    Undo,
    /// Redo requested
    Redo,
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventKind::SessionStart => write!(f, "session_start"),
            EventKind::Apply => write!(f, "apply"),
            EventKind::TemplateLoad => write!(f, "template_load"),
            EventKind::Undo => write!(f, "undo"),
            EventKind::Redo => write!(f, "redo"),
        }
    }
}

/// One journal record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    pub kind: EventKind,

    /// Who ran the session (e.g., `user@HOST`).
    pub actor: String,

    /// Whether a snapshot was recorded (false for no-op edits and empty
    /// undo/redo).
    pub recorded: bool,

    pub details: Value,
}

impl Event {
    /// Create a new event of the given kind.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(kind: EventKind) -> Self {
        Self {
            ts: Utc::now(),
            kind,
            actor: get_actor_string(),
            recorded: false,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_recorded(mut self, recorded: bool) -> Self {
        self.recorded = recorded;
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| {
            PromptpadError::UserError(format!("failed to serialize event to JSON: {}", e))
        })
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// An NDJSON file that session events are appended to.
#[derive(Debug, Clone)]
pub struct Journal {
    path: PathBuf,
}

impl Journal {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append an event as a single JSON line.
    ///
    /// The file and its parent directory are created if missing.
    pub fn append(&self, event: &Event) -> Result<()> {
        let json_line = event.to_ndjson_line()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(|e| {
                    PromptpadError::IoError(format!(
                        "failed to create journal directory '{}': {}",
                        parent.display(),
                        e
                    ))
                })?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| {
                PromptpadError::IoError(format!(
                    "failed to open journal '{}': {}",
                    self.path.display(),
                    e
                ))
            })?;

        writeln!(file, "{}", json_line).map_err(|e| {
            PromptpadError::IoError(format!(
                "failed to write event to '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Read every event back, in order.
    pub fn read_all(&self) -> Result<Vec<Event>> {
        let content = fs::read_to_string(&self.path).map_err(|e| {
            PromptpadError::IoError(format!(
                "failed to read journal '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(i, line)| {
                serde_json::from_str(line).map_err(|e| {
                    PromptpadError::UserError(format!(
                        "malformed journal line {} in '{}': {}",
                        i + 1,
                        self.path.display(),
                        e
                    ))
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_event_creation() {
        let event = Event::new(EventKind::SessionStart);

        assert_eq!(event.kind, EventKind::SessionStart);
        assert!(!event.actor.is_empty());
        assert!(!event.recorded);
        // Timestamp should be recent (within last minute)
        let age = Utc::now().signed_duration_since(event.ts);
        assert!(age.num_minutes() < 1);
    }

    #[test]
    fn test_event_with_details() {
        let event = Event::new(EventKind::Apply)
            .with_recorded(true)
            .with_details(json!({"action": "edit_temperature", "value": 1.0}));

        assert!(event.recorded);
        assert_eq!(event.details["action"], "edit_temperature");
    }

    #[test]
    fn test_event_serialization() {
        let event = Event::new(EventKind::TemplateLoad)
            .with_details(json!({"template": "rhyming", "example": 0}));

        let json_line = event.to_ndjson_line().unwrap();

        let parsed: Event = serde_json::from_str(&json_line).unwrap();
        assert_eq!(parsed.kind, EventKind::TemplateLoad);
        assert_eq!(parsed.details["template"], "rhyming");

        // Should not contain newlines (single line)
        assert!(!json_line.contains('\n'));
    }

    #[test]
    fn test_event_kind_serialization() {
        let json_line = Event::new(EventKind::SessionStart).to_ndjson_line().unwrap();
        assert!(json_line.contains("\"session_start\""));

        let json_line = Event::new(EventKind::TemplateLoad).to_ndjson_line().unwrap();
        assert!(json_line.contains("\"template_load\""));
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for kind in [
            EventKind::SessionStart,
            EventKind::Apply,
            EventKind::TemplateLoad,
            EventKind::Undo,
            EventKind::Redo,
        ] {
            let serialized = serde_json::to_string(&kind).unwrap();
            assert_eq!(serialized, format!("\"{}\"", kind));
        }
    }

    #[test]
    fn test_append_creates_file_and_parent() {
        let temp = TempDir::new().unwrap();
        let journal = Journal::new(temp.path().join("logs").join("session.ndjson"));

        journal.append(&Event::new(EventKind::SessionStart)).unwrap();

        assert!(journal.path().exists());
        let events = journal.read_all().unwrap();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, EventKind::SessionStart);
    }

    #[test]
    fn test_append_multiple_lines() {
        let temp = TempDir::new().unwrap();
        let journal = Journal::new(temp.path().join("session.ndjson"));

        journal.append(&Event::new(EventKind::Apply)).unwrap();
        journal.append(&Event::new(EventKind::Undo)).unwrap();

        let content = fs::read_to_string(journal.path()).unwrap();
        assert_eq!(content.lines().count(), 2);
        assert!(content.ends_with('\n'));

        let events = journal.read_all().unwrap();
        assert_eq!(events[0].kind, EventKind::Apply);
        assert_eq!(events[1].kind, EventKind::Undo);
    }

    #[test]
    fn test_read_all_reports_malformed_line() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("session.ndjson");
        fs::write(&path, "{not json}\n").unwrap();

        let err = Journal::new(&path).read_all().unwrap_err();
        assert!(err.to_string().contains("malformed journal line 1"));
    }
}
