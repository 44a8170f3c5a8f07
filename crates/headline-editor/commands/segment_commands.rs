//! Segment add/update/remove commands
//!
//! Segments are created from a literal substring of the current text (first
//! occurrence wins), updated per channel by id, and removed by id. Misses
//! are no-op outcomes with a message, matching the host UI's inline
//! validation contract.

use headline_core::{SegmentId, SegmentStyle, StyleSpec};

use super::{CommandOutcome, EditCommand};
use crate::errors::Result;

/// Command that appends a segment covering the first occurrence of a
/// literal substring
#[derive(Debug, Clone, PartialEq)]
pub struct AddSegmentCommand {
    /// The text the user selected to style
    pub selection: String,
}

impl AddSegmentCommand {
    /// Create an add-segment command for a selection
    #[must_use]
    pub fn new(selection: impl Into<String>) -> Self {
        Self {
            selection: selection.into(),
        }
    }
}

impl EditCommand for AddSegmentCommand {
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome> {
        if self.selection.trim().is_empty() {
            return Ok(CommandOutcome::unchanged(spec.clone(), "empty selection"));
        }

        let Some(start) = spec.text.find(&self.selection) else {
            return Ok(CommandOutcome::unchanged(
                spec.clone(),
                "text not found in headline",
            ));
        };

        let mut next = spec.clone();
        let id = SegmentId::new(next.next_segment_id);
        next.next_segment_id += 1;
        next.segments
            .push(SegmentStyle::new(id, start, start + self.selection.len()));
        Ok(CommandOutcome::changed(next))
    }
}

/// One channel update on an existing segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentChange {
    /// Toggle the highlight channel
    Highlight(bool),
    /// Replace the highlight color
    HighlightColor(String),
    /// Toggle the underline channel
    Underline(bool),
    /// Replace the underline color
    UnderlineColor(String),
    /// Toggle the background channel
    Background(bool),
    /// Replace the background color
    BackgroundColor(String),
}

impl SegmentChange {
    fn write_to(&self, segment: &mut SegmentStyle) {
        match self {
            Self::Highlight(value) => segment.highlight = *value,
            Self::HighlightColor(value) => segment.highlight_color = value.clone(),
            Self::Underline(value) => segment.underline = *value,
            Self::UnderlineColor(value) => segment.underline_color = value.clone(),
            Self::Background(value) => segment.background = *value,
            Self::BackgroundColor(value) => segment.background_color = value.clone(),
        }
    }
}

/// Command that updates one channel of a segment, looked up by id
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateSegmentCommand {
    /// Which segment to update
    pub id: SegmentId,
    /// The change to apply
    pub change: SegmentChange,
}

impl UpdateSegmentCommand {
    /// Create an update command for a segment
    #[must_use]
    pub const fn new(id: SegmentId, change: SegmentChange) -> Self {
        Self { id, change }
    }
}

impl EditCommand for UpdateSegmentCommand {
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome> {
        let mut next = spec.clone();
        let Some(segment) = next.segments.iter_mut().find(|s| s.id == self.id) else {
            return Ok(CommandOutcome::unchanged(spec.clone(), "segment not found"));
        };
        self.change.write_to(segment);
        if next == *spec {
            return Ok(CommandOutcome::unchanged(next, "value unchanged"));
        }
        Ok(CommandOutcome::changed(next))
    }
}

/// Command that removes a segment by id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemoveSegmentCommand {
    /// Which segment to remove
    pub id: SegmentId,
}

impl RemoveSegmentCommand {
    /// Create a remove command for a segment
    #[must_use]
    pub const fn new(id: SegmentId) -> Self {
        Self { id }
    }
}

impl EditCommand for RemoveSegmentCommand {
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome> {
        let mut next = spec.clone();
        let before = next.segments.len();
        next.segments.retain(|segment| segment.id != self.id);
        if next.segments.len() == before {
            return Ok(CommandOutcome::unchanged(next, "segment not found"));
        }
        Ok(CommandOutcome::changed(next))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec_with_text(text: &str) -> StyleSpec {
        let mut spec = StyleSpec::default();
        spec.text = text.to_string();
        spec
    }

    #[test]
    fn add_segment_finds_first_occurrence() {
        let spec = spec_with_text("one two one");
        let outcome = AddSegmentCommand::new("one").apply(&spec).unwrap();
        assert!(outcome.changed);
        let segment = &outcome.spec.segments[0];
        assert_eq!(segment.start_index, 0);
        assert_eq!(segment.end_index, 3);
        assert_eq!(segment.id, SegmentId::new(0));
        assert_eq!(outcome.spec.next_segment_id, 1);
    }

    #[test]
    fn add_segment_missing_substring_is_noop() {
        let spec = spec_with_text("Hello World");
        let outcome = AddSegmentCommand::new("missing").apply(&spec).unwrap();
        assert!(!outcome.changed);
        assert!(outcome.spec.segments.is_empty());
        assert_eq!(outcome.message.as_deref(), Some("text not found in headline"));
    }

    #[test]
    fn add_segment_blank_selection_is_noop() {
        let spec = spec_with_text("Hello World");
        for selection in ["", "   ", "\t"] {
            let outcome = AddSegmentCommand::new(selection).apply(&spec).unwrap();
            assert!(!outcome.changed, "selection {selection:?} should be a no-op");
        }
    }

    #[test]
    fn segment_ids_are_never_reused() {
        let spec = spec_with_text("alpha beta gamma");
        let spec = AddSegmentCommand::new("alpha").apply(&spec).unwrap().spec;
        let spec = AddSegmentCommand::new("beta").apply(&spec).unwrap().spec;
        let spec = RemoveSegmentCommand::new(SegmentId::new(1))
            .apply(&spec)
            .unwrap()
            .spec;
        let spec = AddSegmentCommand::new("gamma").apply(&spec).unwrap().spec;

        let ids: Vec<u64> = spec.segments.iter().map(|s| s.id.value()).collect();
        assert_eq!(ids, vec![0, 2]);
    }

    #[test]
    fn update_segment_by_id() {
        let spec = spec_with_text("Hello World");
        let spec = AddSegmentCommand::new("Hello").apply(&spec).unwrap().spec;

        let outcome = UpdateSegmentCommand::new(SegmentId::new(0), SegmentChange::Underline(true))
            .apply(&spec)
            .unwrap();
        assert!(outcome.changed);
        assert!(outcome.spec.segments[0].underline);

        let outcome = UpdateSegmentCommand::new(
            SegmentId::new(0),
            SegmentChange::UnderlineColor("#ff0000".to_string()),
        )
        .apply(&outcome.spec)
        .unwrap();
        assert_eq!(outcome.spec.segments[0].underline_color, "#ff0000");
    }

    #[test]
    fn update_unknown_segment_is_noop() {
        let spec = spec_with_text("Hello");
        let outcome = UpdateSegmentCommand::new(SegmentId::new(9), SegmentChange::Highlight(true))
            .apply(&spec)
            .unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.message.as_deref(), Some("segment not found"));
    }

    #[test]
    fn remove_segment_filters_by_id() {
        let spec = spec_with_text("alpha beta");
        let spec = AddSegmentCommand::new("alpha").apply(&spec).unwrap().spec;
        let spec = AddSegmentCommand::new("beta").apply(&spec).unwrap().spec;

        let outcome = RemoveSegmentCommand::new(SegmentId::new(0)).apply(&spec).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.spec.segments.len(), 1);
        assert_eq!(outcome.spec.segments[0].id, SegmentId::new(1));
    }

    #[test]
    fn remove_unknown_segment_is_noop() {
        let spec = spec_with_text("Hello");
        let outcome = RemoveSegmentCommand::new(SegmentId::new(3)).apply(&spec).unwrap();
        assert!(!outcome.changed);
    }
}
