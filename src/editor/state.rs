//! EditorState and StatePatch definitions.

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// Range shared by temperature, top_p and both penalties.
pub const PARAMETER_RANGE: RangeInclusive<f64> = 0.0..=1.0;

/// Range for the response length.
pub const MAX_TOKENS_RANGE: RangeInclusive<u32> = 1..=512;

/// Maximum number of stop symbols a snapshot may carry.
pub const MAX_STOP_SYMBOLS: usize = 4;

/// A snapshot of everything the editor form displays.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorState {
    pub prompt: String,
    pub api_key: String,
    pub temperature: f64,
    pub top_p: f64,
    pub frequency_penalty: f64,
    pub presence_penalty: f64,
    pub max_tokens: u32,
    pub stop_symbols: Vec<String>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            prompt: String::new(),
            api_key: String::new(),
            temperature: 0.5,
            top_p: 0.5,
            frequency_penalty: 0.5,
            presence_penalty: 0.5,
            max_tokens: 10,
            stop_symbols: Vec::new(),
        }
    }
}

/// A partial `EditorState`: present fields replace the target's, absent
/// fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StatePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
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

impl StatePatch {
    /// True when the patch carries no fields at all.
    pub fn is_empty(&self) -> bool {
        *self == StatePatch::default()
    }
}

/// Clamp a unit-interval parameter. NaN yields `None` so the caller can keep
/// the previous value.
pub(crate) fn clamp_parameter(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(*PARAMETER_RANGE.start(), *PARAMETER_RANGE.end()))
}

pub(crate) fn clamp_max_tokens(value: i64) -> u32 {
    let min = i64::from(*MAX_TOKENS_RANGE.start());
    let max = i64::from(*MAX_TOKENS_RANGE.end());
    // Both bounds fit in u32, so the cast after clamping is lossless.
    value.clamp(min, max) as u32
}

/// Drop duplicates (first occurrence wins) and keep at most four entries.
pub(crate) fn normalize_stop_symbols(symbols: &[String]) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(MAX_STOP_SYMBOLS);
    for symbol in symbols {
        if normalized.len() == MAX_STOP_SYMBOLS {
            break;
        }
        if !normalized.contains(symbol) {
            normalized.push(symbol.clone());
        }
    }
    normalized
}
