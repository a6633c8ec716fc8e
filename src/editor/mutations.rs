//! Field mutators.
//!
//! Each mutator validates its input and returns the next snapshot. Callers
//! compare the result with the receiver to decide whether anything changed.

use super::state::{
    EditorState, MAX_STOP_SYMBOLS, StatePatch, clamp_max_tokens, clamp_parameter,
    normalize_stop_symbols,
};

impl EditorState {
    /// Replace the prompt text.
    pub fn with_prompt(&self, prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            ..self.clone()
        }
    }

    /// Replace the API key.
    pub fn with_api_key(&self, api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..self.clone()
        }
    }

    pub fn with_temperature(&self, value: f64) -> Self {
        Self {
            temperature: clamp_parameter(value).unwrap_or(self.temperature),
            ..self.clone()
        }
    }

    pub fn with_top_p(&self, value: f64) -> Self {
        Self {
            top_p: clamp_parameter(value).unwrap_or(self.top_p),
            ..self.clone()
        }
    }

    pub fn with_frequency_penalty(&self, value: f64) -> Self {
        Self {
            frequency_penalty: clamp_parameter(value).unwrap_or(self.frequency_penalty),
            ..self.clone()
        }
    }

    pub fn with_presence_penalty(&self, value: f64) -> Self {
        Self {
            presence_penalty: clamp_parameter(value).unwrap_or(self.presence_penalty),
            ..self.clone()
        }
    }

    /// Set the response length, clamped to `1..=512`.
    pub fn with_max_tokens(&self, value: i64) -> Self {
        Self {
            max_tokens: clamp_max_tokens(value),
            ..self.clone()
        }
    }

    /// Append a stop symbol.
    ///
    /// Silently returns an unchanged snapshot when four symbols are already
    /// present or the symbol is a duplicate.
    pub fn with_stop_symbol_added(&self, symbol: &str) -> Self {
        let mut next = self.clone();
        if next.stop_symbols.len() < MAX_STOP_SYMBOLS
            && !next.stop_symbols.iter().any(|s| s == symbol)
        {
            next.stop_symbols.push(symbol.to_string());
        }
        next
    }

    /// Remove the first stop symbol equal to `symbol`, if any.
    pub fn with_stop_symbol_removed(&self, symbol: &str) -> Self {
        let mut next = self.clone();
        if let Some(pos) = next.stop_symbols.iter().position(|s| s == symbol) {
            next.stop_symbols.remove(pos);
        }
        next
    }

    /// Apply a partial state in one step.
    ///
    /// Numeric fields go through the same clamps as the single-field
    /// mutators. Stop symbols are deduplicated and truncated to four.
    pub fn merged(&self, patch: &StatePatch) -> Self {
        let mut next = self.clone();
        if let Some(prompt) = &patch.prompt {
            next.prompt = prompt.clone();
        }
        if let Some(api_key) = &patch.api_key {
            next.api_key = api_key.clone();
        }
        if let Some(value) = patch.temperature {
            next = next.with_temperature(value);
        }
        if let Some(value) = patch.top_p {
            next = next.with_top_p(value);
        }
        if let Some(value) = patch.frequency_penalty {
            next = next.with_frequency_penalty(value);
        }
        if let Some(value) = patch.presence_penalty {
            next = next.with_presence_penalty(value);
        }
        if let Some(value) = patch.max_tokens {
            next.max_tokens = clamp_max_tokens(value);
        }
        if let Some(symbols) = &patch.stop_symbols {
            next.stop_symbols = normalize_stop_symbols(symbols);
        }
        next
    }
}
