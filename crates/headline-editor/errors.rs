//! Error types for the headline-editor crate
//!
//! Wraps `CoreError` from headline-core and adds editor-specific cases.
//! Most editor operations cannot fail: clamping and no-op outcomes absorb
//! bad input before it becomes an error.

use headline_core::CoreError;
use thiserror::Error;

/// Result type alias for editor operations
pub type Result<T> = core::result::Result<T, EditorError>;

/// Main error type for editor operations
#[derive(Debug, Error)]
pub enum EditorError {
    /// Errors from headline-core
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Command execution failed
    #[error("command execution failed: {message}")]
    CommandFailed {
        /// What went wrong
        message: String,
    },
}

impl EditorError {
    /// Build a command failure from any message
    #[must_use]
    pub fn command(message: impl Into<String>) -> Self {
        Self::CommandFailed {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failure_formats_message() {
        let err = EditorError::command("bad input");
        assert_eq!(err.to_string(), "command execution failed: bad input");
    }

    #[test]
    fn core_errors_pass_through_transparently() {
        let core = CoreError::clipboard("denied");
        let err = EditorError::from(core);
        assert_eq!(err.to_string(), "clipboard write failed: denied");
    }
}
