//! Template data model.
//!
//! Field names serialize in camelCase (`actionPayload`, `tabIndex`,
//! `stopSymbols`) so catalogs keep the shape the editor front end consumes.

use serde::{Deserialize, Serialize};

/// A named, ordered set of templates. Grouping only affects display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateGroup {
    pub name: String,
    pub templates: Vec<Template>,
}

/// A canned prompt with optional parameter overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Template {
    pub id: String,
    pub name: String,
    pub action_payload: ActionPayload,
}

/// What loading a template does to the editor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionPayload {
    /// Prompt pattern, optionally containing one `{example}` placeholder.
    pub prompt: String,

    /// Sample inputs for the placeholder.
    #[serde(default)]
    pub examples: Vec<Example>,

    /// Which editor tab presents the template.
    #[serde(default)]
    pub tab_index: u32,

    /// Parameters the template sets when loaded.
    #[serde(flatten)]
    pub overrides: ParameterOverrides,
}

/// One sample input and, when known, the output the service produced for it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Example {
    pub text: String,
    #[serde(default)]
    pub output: String,
}

/// Generation parameters a template may override. Absent fields leave the
/// editor's current values alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParameterOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub frequency_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presence_penalty: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stop_symbols: Option<Vec<String>>,
}

impl ParameterOverrides {
    pub fn is_empty(&self) -> bool {
        *self == ParameterOverrides::default()
    }
}

impl Template {
    pub fn examples(&self) -> &[Example] {
        &self.action_payload.examples
    }
}
