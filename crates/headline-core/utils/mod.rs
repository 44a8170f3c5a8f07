//! Shared utilities and error types for headline-core
//!
//! Contains the crate-wide error enum and small helpers used across the
//! resolver, compiler, and exporters.

pub mod errors;

pub use errors::{CoreError, Result};

/// Snap a byte offset to the nearest `char` boundary at or before it.
///
/// Segment ranges are captured against a snapshot of the text and may land
/// inside a multi-byte character after later edits. Slicing must never panic,
/// so offsets are floored to a valid boundary first.
#[must_use]
pub fn floor_char_boundary(text: &str, offset: usize) -> usize {
    if offset >= text.len() {
        return text.len();
    }
    let mut pos = offset;
    while pos > 0 && !text.is_char_boundary(pos) {
        pos -= 1;
    }
    pos
}
