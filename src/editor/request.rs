//! Read-only view of a snapshot for the completion sender.
//!
//! The editor stores stop symbols the way users type them: a line break is
//! entered as the two characters `\n`. The request decodes those escapes so
//! the downstream service receives real control characters.

use super::state::EditorState;
use serde::Serialize;

/// Body of a text-completion request built from one snapshot.
///
/// The API key is deliberately absent; it belongs in the transport headers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompletionRequest {
    pub prompt: String,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub max_tokens: u32,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stop: Vec<String>,
}

impl EditorState {
    /// Build the completion request body for this snapshot.
    pub fn completion_request(&self) -> CompletionRequest {
        CompletionRequest {
            prompt: self.prompt.clone(),
            temperature: self.temperature,
            top_p: self.top_p,
            frequency_penalty: self.frequency_penalty,
            presence_penalty: self.presence_penalty,
            max_tokens: self.max_tokens,
            stop: self
                .stop_symbols
                .iter()
                .map(|s| decode_stop_symbol(s))
                .collect(),
        }
    }
}

/// Decode `\n`, `\t`, `\r` and `\\` escapes. Unknown escapes are kept as typed.
pub fn decode_stop_symbol(symbol: &str) -> String {
    let mut decoded = String::with_capacity(symbol.len());
    let mut chars = symbol.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != '\\' {
            decoded.push(ch);
            continue;
        }
        match chars.peek() {
            Some('n') => {
                chars.next();
                decoded.push('\n');
            }
            Some('t') => {
                chars.next();
                decoded.push('\t');
            }
            Some('r') => {
                chars.next();
                decoded.push('\r');
            }
            Some('\\') => {
                chars.next();
                decoded.push('\\');
            }
            _ => decoded.push('\\'),
        }
    }

    decoded
}
