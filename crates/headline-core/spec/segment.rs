//! Segment styling for sub-ranges of the headline text
//!
//! A segment captures a half-open byte range of the text at creation time
//! plus three independent boolean+color styling channels. Ranges are never
//! re-anchored after text edits; the resolver clamps them instead (a known
//! limitation of the index-based design).

use serde::{Deserialize, Serialize};

use crate::utils::floor_char_boundary;

/// Opaque, immutable segment identifier
///
/// Assigned once at creation from the spec's monotonic counter and unique
/// for the lifetime of the owning [`crate::spec::StyleSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SegmentId(u64);

impl SegmentId {
    /// Wrap a raw id value
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Raw id value
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// One styled sub-range of the headline text
///
/// All three channels may be active at once. Highlight and background both
/// paint a background color; when both are enabled, background wins (it is
/// applied after highlight).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SegmentStyle {
    /// Unique identifier, immutable after creation
    pub id: SegmentId,

    /// Inclusive start byte offset into the spec text
    pub start_index: usize,

    /// Exclusive end byte offset into the spec text
    pub end_index: usize,

    /// Whether the highlight channel is active
    pub highlight: bool,

    /// Highlight background color
    pub highlight_color: String,

    /// Whether the underline channel is active
    pub underline: bool,

    /// Underline decoration color
    pub underline_color: String,

    /// Whether the background channel is active
    pub background: bool,

    /// Background fill color
    pub background_color: String,
}

impl SegmentStyle {
    /// Create a segment over `[start, end)` with the default channel colors
    ///
    /// All channels start disabled; the editor toggles them per segment.
    #[must_use]
    pub fn new(id: SegmentId, start_index: usize, end_index: usize) -> Self {
        Self {
            id,
            start_index,
            end_index,
            highlight: false,
            highlight_color: "#ffff00".to_string(),
            underline: false,
            underline_color: "#0046FF".to_string(),
            background: false,
            background_color: "#e5e7eb".to_string(),
        }
    }

    /// Whether any styling channel is active
    #[must_use]
    pub const fn has_styling(&self) -> bool {
        self.highlight || self.underline || self.background
    }

    /// Clamp this segment's range against the current text
    ///
    /// Returns `(start, end)` snapped inside `[0, text.len()]` and onto char
    /// boundaries, with `start <= end` guaranteed. Never panics, even for
    /// ranges that drifted out of bounds after a text edit.
    #[must_use]
    pub fn clamped_range(&self, text: &str) -> (usize, usize) {
        let start = floor_char_boundary(text, self.start_index.min(text.len()));
        let end = floor_char_boundary(text, self.end_index.min(text.len()));
        (start.min(end), end.max(start))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_segment_uses_default_channel_colors() {
        let segment = SegmentStyle::new(SegmentId::new(7), 0, 5);
        assert_eq!(segment.highlight_color, "#ffff00");
        assert_eq!(segment.underline_color, "#0046FF");
        assert_eq!(segment.background_color, "#e5e7eb");
        assert!(!segment.has_styling());
    }

    #[test]
    fn has_styling_tracks_any_channel() {
        let mut segment = SegmentStyle::new(SegmentId::new(0), 0, 5);
        segment.underline = true;
        assert!(segment.has_styling());
    }

    #[test]
    fn clamped_range_handles_out_of_bounds() {
        let segment = SegmentStyle::new(SegmentId::new(0), 3, 50);
        assert_eq!(segment.clamped_range("hello"), (3, 5));
    }

    #[test]
    fn clamped_range_handles_inverted_after_clamp() {
        let segment = SegmentStyle::new(SegmentId::new(0), 40, 50);
        assert_eq!(segment.clamped_range("tiny"), (4, 4));
    }

    #[test]
    fn clamped_range_snaps_to_char_boundaries() {
        // "né" has an accented char at bytes 1..3
        let segment = SegmentStyle::new(SegmentId::new(0), 2, 3);
        assert_eq!(segment.clamped_range("né"), (1, 3));
    }

    #[test]
    fn id_serializes_transparently() {
        let json = serde_json::to_string(&SegmentId::new(42)).unwrap();
        assert_eq!(json, "42");
    }
}
