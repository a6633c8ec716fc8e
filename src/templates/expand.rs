//! Template expansion.
//!
//! Expansion is pure: it computes a `StatePatch` and leaves recording the
//! change to the session.

use super::model::Template;
use crate::editor::StatePatch;
use crate::error::{PromptpadError, Result};

/// Token substituted with the chosen example's text.
pub const PLACEHOLDER: &str = "{example}";

/// Replace the first placeholder in `pattern` with `text`.
///
/// A pattern without a placeholder is returned verbatim.
pub fn substitute_example(pattern: &str, text: &str) -> String {
    pattern.replacen(PLACEHOLDER, text, 1)
}

/// Expand `template` with the example at `example_index`.
///
/// # Returns
///
/// * `Ok(StatePatch)` - The expanded prompt plus the template's overrides
/// * `Err(PromptpadError::OutOfRange)` - `example_index` does not exist
///
/// # Example
///
/// ```ignore
/// let patch = expand(template, 0)?;
/// session.dispatch(EditorAction::LoadPatch(patch))?;
/// ```
pub fn expand(template: &Template, example_index: usize) -> Result<StatePatch> {
    let examples = template.examples();
    let example = examples
        .get(example_index)
        .ok_or_else(|| PromptpadError::OutOfRange {
            template: template.id.clone(),
            index: example_index,
            len: examples.len(),
        })?;

    let prompt = substitute_example(&template.action_payload.prompt, &example.text);
    Ok(patch_with_prompt(template, prompt))
}

/// Expand `template` the way picking it without choosing an example does:
/// the first example when there is one, the raw pattern otherwise.
pub fn expand_default(template: &Template) -> StatePatch {
    let prompt = match template.examples().first() {
        Some(example) => substitute_example(&template.action_payload.prompt, &example.text),
        None => template.action_payload.prompt.clone(),
    };
    patch_with_prompt(template, prompt)
}

fn patch_with_prompt(template: &Template, prompt: String) -> StatePatch {
    let overrides = &template.action_payload.overrides;
    StatePatch {
        prompt: Some(prompt),
        api_key: None,
        temperature: overrides.temperature,
        top_p: overrides.top_p,
        frequency_penalty: overrides.frequency_penalty,
        presence_penalty: overrides.presence_penalty,
        max_tokens: overrides.max_tokens,
        stop_symbols: overrides.stop_symbols.clone(),
    }
}
