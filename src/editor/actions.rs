//! User events that mutate the editor.

use super::state::{EditorState, StatePatch};
use serde::{Deserialize, Serialize};

/// One discrete user event. Each variant maps onto exactly one mutator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum EditorAction {
    EditPrompt(String),
    EditApiKey(String),
    EditTemperature(f64),
    EditTopP(f64),
    EditFrequencyPenalty(f64),
    EditPresencePenalty(f64),
    EditMaxTokens(i64),
    AddStopSymbol(String),
    DeleteStopSymbol(String),
    /// Bulk mutation, produced by template expansion.
    LoadPatch(StatePatch),
}

impl EditorAction {
    /// Compute the snapshot that follows `state` under this action.
    pub fn reduce(&self, state: &EditorState) -> EditorState {
        match self {
            EditorAction::EditPrompt(prompt) => state.with_prompt(prompt.as_str()),
            EditorAction::EditApiKey(key) => state.with_api_key(key.as_str()),
            EditorAction::EditTemperature(v) => state.with_temperature(*v),
            EditorAction::EditTopP(v) => state.with_top_p(*v),
            EditorAction::EditFrequencyPenalty(v) => state.with_frequency_penalty(*v),
            EditorAction::EditPresencePenalty(v) => state.with_presence_penalty(*v),
            EditorAction::EditMaxTokens(v) => state.with_max_tokens(*v),
            EditorAction::AddStopSymbol(s) => state.with_stop_symbol_added(s),
            EditorAction::DeleteStopSymbol(s) => state.with_stop_symbol_removed(s),
            EditorAction::LoadPatch(patch) => state.merged(patch),
        }
    }

    /// Short name used in journal entries.
    pub fn name(&self) -> &'static str {
        match self {
            EditorAction::EditPrompt(_) => "edit_prompt",
            EditorAction::EditApiKey(_) => "edit_api_key",
            EditorAction::EditTemperature(_) => "edit_temperature",
            EditorAction::EditTopP(_) => "edit_top_p",
            EditorAction::EditFrequencyPenalty(_) => "edit_frequency_penalty",
            EditorAction::EditPresencePenalty(_) => "edit_presence_penalty",
            EditorAction::EditMaxTokens(_) => "edit_max_tokens",
            EditorAction::AddStopSymbol(_) => "add_stop_symbol",
            EditorAction::DeleteStopSymbol(_) => "delete_stop_symbol",
            EditorAction::LoadPatch(_) => "load_patch",
        }
    }
}
