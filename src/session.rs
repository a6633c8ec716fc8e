//! Editor session: the history-wrapped state plus its optional journal.
//!
//! A `Session` is the only way to change editor state. Every entry point
//! (`dispatch`, `load_template`, `undo`, `redo`) runs to completion before
//! returning: reduce, compare, record, journal.

use crate::config::Config;
use crate::editor::{EditorAction, EditorState};
use crate::error::Result;
use crate::events::{Event, EventKind, Journal};
use crate::history::History;
use crate::templates::{Template, expand, expand_default};
use serde_json::{Value, json};

/// An editing session over one `EditorState` history.
#[derive(Debug)]
pub struct Session {
    history: History<EditorState>,
    journal: Option<Journal>,
}

impl Session {
    /// Start a session at `initial` keeping at most `history_limit` undo steps.
    pub fn new(initial: EditorState, history_limit: usize) -> Self {
        Self {
            history: History::with_limit(initial, history_limit),
            journal: None,
        }
    }

    /// Start a session from config, opening the journal if one is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let session = Self::new(config.initial.clone(), config.history_limit);
        match &config.journal_path {
            Some(path) => session.with_journal(Journal::new(path)),
            None => Ok(session),
        }
    }

    /// Attach a journal and record the session start.
    pub fn with_journal(mut self, journal: Journal) -> Result<Self> {
        let event = Event::new(EventKind::SessionStart).with_details(json!({
            "history_limit": self.history.limit(),
            "state": redacted(self.state()),
        }));
        journal.append(&event)?;
        self.journal = Some(journal);
        Ok(self)
    }

    /// The current snapshot.
    pub fn state(&self) -> &EditorState {
        self.history.current()
    }

    pub fn history(&self) -> &History<EditorState> {
        &self.history
    }

    /// Dispatch one editor action. Returns whether a snapshot was recorded.
    pub fn dispatch(&mut self, action: EditorAction) -> Result<bool> {
        let recorded = self.history.apply(|state| action.reduce(state));
        self.journal(
            EventKind::Apply,
            recorded,
            json!({ "action": action.name(), "value": action_value(&action) }),
        )?;
        Ok(recorded)
    }

    /// Expand `template` and load the result as one undoable step.
    ///
    /// With `example_index` of `None` the template loads its first example,
    /// or its raw prompt when it has none.
    pub fn load_template(
        &mut self,
        template: &Template,
        example_index: Option<usize>,
    ) -> Result<bool> {
        let patch = match example_index {
            Some(index) => expand(template, index)?,
            None => expand_default(template),
        };
        let action = EditorAction::LoadPatch(patch);
        let recorded = self.history.apply(|state| action.reduce(state));
        self.journal(
            EventKind::TemplateLoad,
            recorded,
            json!({ "template": template.id, "example": example_index }),
        )?;
        Ok(recorded)
    }

    /// Undo the last recorded change. No-op on empty history.
    pub fn undo(&mut self) -> Result<bool> {
        let changed = self.history.undo();
        self.journal(
            EventKind::Undo,
            changed,
            json!({ "past": self.history.past_len(), "future": self.history.future_len() }),
        )?;
        Ok(changed)
    }

    /// Redo the last undone change. No-op when nothing was undone.
    pub fn redo(&mut self) -> Result<bool> {
        let changed = self.history.redo();
        self.journal(
            EventKind::Redo,
            changed,
            json!({ "past": self.history.past_len(), "future": self.history.future_len() }),
        )?;
        Ok(changed)
    }

    fn journal(&self, kind: EventKind, recorded: bool, details: Value) -> Result<()> {
        let Some(journal) = &self.journal else {
            return Ok(());
        };
        let event = Event::new(kind)
            .with_recorded(recorded)
            .with_details(details);
        journal.append(&event)
    }
}

/// Journal payload for an action, with the API key masked.
fn action_value(action: &EditorAction) -> Value {
    match action {
        EditorAction::EditApiKey(_) => json!("<redacted>"),
        EditorAction::LoadPatch(patch) if patch.api_key.is_some() => {
            let mut patch = patch.clone();
            patch.api_key = Some("<redacted>".to_string());
            json!(patch)
        }
        EditorAction::EditPrompt(v)
        | EditorAction::AddStopSymbol(v)
        | EditorAction::DeleteStopSymbol(v) => json!(v),
        EditorAction::EditTemperature(v)
        | EditorAction::EditTopP(v)
        | EditorAction::EditFrequencyPenalty(v)
        | EditorAction::EditPresencePenalty(v) => json!(v),
        EditorAction::EditMaxTokens(v) => json!(v),
        EditorAction::LoadPatch(patch) => json!(patch),
    }
}

fn redacted(state: &EditorState) -> EditorState {
    let mut state = state.clone();
    if !state.api_key.is_empty() {
        state.api_key = "<redacted>".to_string();
    }
    state
}
