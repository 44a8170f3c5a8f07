//! Error types for headline-core
//!
//! Follows a strict philosophy: structured errors via thiserror, no anyhow,
//! and nothing in the engine is fatal. Range problems clamp, lookups miss as
//! `Option`, and the only external call site (clipboard) reports failure as
//! a boolean at the caller.

use thiserror::Error;

/// Result type alias for headline-core operations
pub type Result<T> = core::result::Result<T, CoreError>;

/// Main error type for headline-core operations
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data-document serialization or parsing failed
    #[error("style document error: {0}")]
    Document(#[from] serde_json::Error),

    /// Clipboard write was rejected by the host
    #[error("clipboard write failed: {message}")]
    ClipboardWrite {
        /// Host-provided failure description
        message: String,
    },
}

impl CoreError {
    /// Build a clipboard failure from any host error message
    #[must_use]
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::ClipboardWrite {
            message: message.into(),
        }
    }
}
