//! Error types for promptpad.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for promptpad operations.
///
/// Input that merely overshoots a parameter range is never an error; it is
/// clamped by the field mutators. Errors here are caller defects or I/O.
#[derive(Error, Debug)]
pub enum PromptpadError {
    /// User provided invalid arguments, config, or script input.
    #[error("{0}")]
    UserError(String),

    /// An example index does not exist on the chosen template.
    #[error("example index {index} is out of range for template '{template}' ({len} examples)")]
    OutOfRange {
        template: String,
        index: usize,
        len: usize,
    },

    /// A template catalog failed to parse or validate.
    #[error("Invalid template catalog: {0}")]
    CatalogError(String),

    /// Reading or writing a file failed.
    #[error("I/O failed: {0}")]
    IoError(String),
}

impl PromptpadError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            PromptpadError::UserError(_) => exit_codes::USER_ERROR,
            PromptpadError::OutOfRange { .. } => exit_codes::TEMPLATE_FAILURE,
            PromptpadError::CatalogError(_) => exit_codes::TEMPLATE_FAILURE,
            PromptpadError::IoError(_) => exit_codes::IO_FAILURE,
        }
    }
}

/// Result type alias for promptpad operations.
pub type Result<T> = std::result::Result<T, PromptpadError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_error_has_correct_exit_code() {
        let err = PromptpadError::UserError("bad argument".to_string());
        assert_eq!(err.exit_code(), exit_codes::USER_ERROR);
    }

    #[test]
    fn template_errors_share_exit_code() {
        let err = PromptpadError::OutOfRange {
            template: "rhyming".to_string(),
            index: 3,
            len: 1,
        };
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);

        let err = PromptpadError::CatalogError("duplicate id".to_string());
        assert_eq!(err.exit_code(), exit_codes::TEMPLATE_FAILURE);
    }

    #[test]
    fn io_error_has_correct_exit_code() {
        let err = PromptpadError::IoError("disk full".to_string());
        assert_eq!(err.exit_code(), exit_codes::IO_FAILURE);
    }

    #[test]
    fn error_messages_are_descriptive() {
        let err = PromptpadError::OutOfRange {
            template: "headline-generation".to_string(),
            index: 2,
            len: 1,
        };
        assert_eq!(
            err.to_string(),
            "example index 2 is out of range for template 'headline-generation' (1 examples)"
        );

        let err = PromptpadError::CatalogError("duplicate template id 'x'".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid template catalog: duplicate template id 'x'"
        );
    }
}
