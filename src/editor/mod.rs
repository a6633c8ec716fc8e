//! Editable prompt state.
//!
//! `EditorState` is a single record holding the prompt text and every
//! generation parameter. Snapshots are immutable values: each mutator returns
//! the next snapshot and never modifies the receiver, which is what lets the
//! history wrapper keep past and future snapshots around for undo/redo.
//!
//! Range handling is silent: numeric input outside a parameter's range is
//! clamped, and stop-symbol additions that would overflow or duplicate are
//! dropped.

mod actions;
mod mutations;
mod request;
mod state;


pub use actions::EditorAction;
pub use request::{CompletionRequest, decode_stop_symbol};
pub use state::{
    EditorState, MAX_STOP_SYMBOLS, MAX_TOKENS_RANGE, PARAMETER_RANGE, StatePatch,
};
