//! Exit code constants for the promptpad CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, malformed script, unknown template)
//! - 2: Template failure (example index out of range, invalid catalog)
//! - 3: I/O failure (reading scripts, writing exports or the journal)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, malformed editor script, or unknown template id.
pub const USER_ERROR: i32 = 1;

/// Template failure: example index out of range or an invalid catalog.
pub const TEMPLATE_FAILURE: i32 = 2;

/// I/O failure: a file could not be read or written.
pub const IO_FAILURE: i32 = 3;
