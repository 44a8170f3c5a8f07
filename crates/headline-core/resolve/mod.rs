//! Segment resolution: partitioning the headline into renderable runs
//!
//! Given the headline text and its declared segments, [`resolve`] produces an
//! ordered sequence of disjoint [`TextRun`]s that covers the text exactly
//! once. Runs borrow from the input (zero-copy spans); nothing is allocated
//! beyond the run vector itself.
//!
//! # Overlap policy
//!
//! Earlier-inserted segments win overlapping ranges (first-write priority).
//! A later segment keeps only the part past the cursor; a segment fully
//! inside already-consumed text is dropped.
//!
//! # Guarantees
//!
//! - Concatenating run texts in order reproduces the input text exactly
//! - Runs are contiguous, non-overlapping, and ordered by start index
//! - Out-of-range segment bounds clamp; resolution never fails

use crate::spec::SegmentStyle;

/// One maximal contiguous slice of the headline sharing a single segment
/// attribution (or none)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextRun<'a> {
    /// Slice of the source text this run covers
    pub text: &'a str,

    /// Byte offset of the run within the source text
    pub start_index: usize,

    /// Segment whose styling applies to this run, if any. Borrowed from the
    /// spec's segment list, never owned.
    pub segment: Option<&'a SegmentStyle>,
}

impl TextRun<'_> {
    /// Whether a segment style applies to this run
    #[must_use]
    pub const fn is_segment(&self) -> bool {
        self.segment.is_some()
    }

    /// Number of letters in this run. Whitespace counts: every character
    /// participates in the stagger so spacing stays stable under
    /// transform-based animation.
    #[must_use]
    pub fn letter_count(&self) -> usize {
        self.text.chars().count()
    }
}

/// Partition `text` into ordered, disjoint runs according to `segments`
///
/// Empty text yields no runs. An empty segment list yields one plain run
/// covering the whole text.
///
/// # Examples
///
/// ```rust
/// use headline_core::resolve::resolve;
/// use headline_core::spec::{SegmentId, SegmentStyle};
///
/// let segments = [SegmentStyle::new(SegmentId::new(0), 0, 5)];
/// let runs = resolve("Hello World", &segments);
/// assert_eq!(runs.len(), 2);
/// assert_eq!(runs[0].text, "Hello");
/// assert!(runs[0].is_segment());
/// assert_eq!(runs[1].text, " World");
/// assert!(!runs[1].is_segment());
/// ```
#[must_use]
pub fn resolve<'a>(text: &'a str, segments: &'a [SegmentStyle]) -> Vec<TextRun<'a>> {
    if text.is_empty() {
        return Vec::new();
    }
    if segments.is_empty() {
        return vec![TextRun {
            text,
            start_index: 0,
            segment: None,
        }];
    }

    // Stable sort keeps insertion order on equal start indices, which is what
    // gives earlier-inserted segments priority on overlap.
    let mut ordered: Vec<&SegmentStyle> = segments.iter().collect();
    ordered.sort_by_key(|segment| segment.clamped_range(text).0);

    let mut runs = Vec::with_capacity(ordered.len() * 2 + 1);
    let mut cursor = 0usize;

    for segment in ordered {
        let (start, end) = segment.clamped_range(text);

        // Fully consumed by earlier segments
        if end <= cursor {
            continue;
        }

        if start > cursor {
            runs.push(TextRun {
                text: &text[cursor..start],
                start_index: cursor,
                segment: None,
            });
            cursor = start;
        }

        // Only the remainder past the cursor survives an overlap
        let run_start = start.max(cursor);
        if run_start < end {
            runs.push(TextRun {
                text: &text[run_start..end],
                start_index: run_start,
                segment: Some(segment),
            });
            cursor = end;
        }
    }

    if cursor < text.len() {
        runs.push(TextRun {
            text: &text[cursor..],
            start_index: cursor,
            segment: None,
        });
    }

    runs
}

/// Total letter count across a run sequence
///
/// Letter indices for animation are global across the entire sequence, so
/// segment boundaries never reset the stagger.
#[must_use]
pub fn total_letters(runs: &[TextRun<'_>]) -> usize {
    runs.iter().map(TextRun::letter_count).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{SegmentId, SegmentStyle};

    fn seg(id: u64, start: usize, end: usize) -> SegmentStyle {
        SegmentStyle::new(SegmentId::new(id), start, end)
    }

    fn concat(runs: &[TextRun<'_>]) -> String {
        runs.iter().map(|run| run.text).collect()
    }

    #[test]
    fn empty_segments_yield_single_plain_run() {
        let runs = resolve("Hello", &[]);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].text, "Hello");
        assert_eq!(runs[0].start_index, 0);
        assert!(!runs[0].is_segment());
    }

    #[test]
    fn empty_text_yields_no_runs() {
        assert!(resolve("", &[]).is_empty());
        assert!(resolve("", &[seg(0, 0, 3)]).is_empty());
    }

    #[test]
    fn hello_world_scenario() {
        let segments = [seg(0, 0, 5)];
        let runs = resolve("Hello World", &segments);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "Hello");
        assert_eq!(runs[0].segment.map(|s| s.id), Some(SegmentId::new(0)));
        assert_eq!(runs[1].text, " World");
        assert_eq!(runs[1].start_index, 5);
        assert!(runs[1].segment.is_none());
    }

    #[test]
    fn mid_text_segment_produces_three_runs() {
        let segments = [seg(0, 6, 11)];
        let runs = resolve("Hello World!", &segments);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "Hello ");
        assert_eq!(runs[1].text, "World");
        assert!(runs[1].is_segment());
        assert_eq!(runs[2].text, "!");
        assert_eq!(concat(&runs), "Hello World!");
    }

    #[test]
    fn first_write_priority_on_overlap() {
        // A=[0,5) inserted before B=[3,8): A owns [0,5), B keeps [5,8)
        let segments = [seg(0, 0, 5), seg(1, 3, 8)];
        let runs = resolve("abcdefghij", &segments);
        assert_eq!(runs.len(), 3);
        assert_eq!(runs[0].text, "abcde");
        assert_eq!(runs[0].segment.map(|s| s.id), Some(SegmentId::new(0)));
        assert_eq!(runs[1].text, "fgh");
        assert_eq!(runs[1].start_index, 5);
        assert_eq!(runs[1].segment.map(|s| s.id), Some(SegmentId::new(1)));
        assert_eq!(runs[2].text, "ij");
        assert!(runs[2].segment.is_none());
    }

    #[test]
    fn contained_segment_is_dropped() {
        let segments = [seg(0, 0, 8), seg(1, 2, 5)];
        let runs = resolve("abcdefghij", &segments);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].text, "abcdefgh");
        assert_eq!(runs[1].text, "ij");
        assert_eq!(concat(&runs), "abcdefghij");
    }

    #[test]
    fn insertion_order_breaks_start_ties() {
        let segments = [seg(0, 2, 6), seg(1, 2, 4)];
        let runs = resolve("abcdefgh", &segments);
        // First-inserted wins the shared start; second is fully contained
        let styled: Vec<_> = runs.iter().filter(|r| r.is_segment()).collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].segment.map(|s| s.id), Some(SegmentId::new(0)));
        assert_eq!(styled[0].text, "cdef");
    }

    #[test]
    fn out_of_range_bounds_clamp() {
        let segments = [seg(0, 3, 999)];
        let runs = resolve("abcdef", &segments);
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[1].text, "def");
        assert!(runs[1].is_segment());
        assert_eq!(concat(&runs), "abcdef");
    }

    #[test]
    fn degenerate_range_emits_no_segment_run() {
        let segments = [seg(0, 4, 4)];
        let runs = resolve("abcdef", &segments);
        assert_eq!(concat(&runs), "abcdef");
        assert!(runs.iter().all(|run| !run.is_segment()));
    }

    #[test]
    fn multibyte_bounds_snap_to_char_boundaries() {
        // "héllo": 'é' spans bytes 1..3; a range cutting into it floors
        let segments = [seg(0, 2, 6)];
        let runs = resolve("héllo", &segments);
        assert_eq!(concat(&runs), "héllo");
        let styled: Vec<_> = runs.iter().filter(|r| r.is_segment()).collect();
        assert_eq!(styled.len(), 1);
        assert_eq!(styled[0].text, "éllo");
    }

    #[test]
    fn runs_are_contiguous_and_ordered() {
        let segments = [seg(0, 8, 12), seg(1, 2, 5), seg(2, 14, 20)];
        let text = "the quick brown fox jumps";
        let runs = resolve(text, &segments);
        assert_eq!(concat(&runs), text);
        let mut expected_start = 0;
        for run in &runs {
            assert_eq!(run.start_index, expected_start);
            expected_start += run.text.len();
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn total_letters_counts_whitespace() {
        let segments = [seg(0, 0, 5)];
        let runs = resolve("Hello World", &segments);
        assert_eq!(total_letters(&runs), 11);
    }
}
