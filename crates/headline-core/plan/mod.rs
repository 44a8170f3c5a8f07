//! Per-letter animation planning
//!
//! Computes the delay schedule fed to the host's animation driver. Letter
//! indices are global across the entire resolved run sequence, so segment
//! boundaries never reset the stagger and the wave flows continuously over
//! styled and unstyled text alike. Whitespace characters count as letters
//! and receive a delay; renderers substitute a non-breaking placeholder so
//! spacing survives transform-based animation.

use crate::resolve::TextRun;
use crate::spec::{AnimationPattern, SegmentStyle};

/// Timing and attribution for one rendered letter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LetterTiming<'a> {
    /// The character itself
    pub ch: char,

    /// Global letter index across all runs
    pub index: usize,

    /// Animation start delay in milliseconds
    pub delay_ms: u32,

    /// Segment attribution inherited from the letter's run
    pub segment: Option<&'a SegmentStyle>,

    /// Whether renderers should substitute a non-breaking placeholder
    pub is_whitespace: bool,
}

fn delay_for(index: usize, total: usize, pattern: AnimationPattern, base_ms: u32) -> u32 {
    let position = match pattern {
        AnimationPattern::AllTogether => return 0,
        AnimationPattern::LeftToRight => index,
        AnimationPattern::RightToLeft => total - 1 - index,
    };
    u32::try_from(position)
        .unwrap_or(u32::MAX)
        .saturating_mul(base_ms)
}

/// Compute the delay schedule for `total_letters` letters
///
/// # Examples
///
/// ```rust
/// use headline_core::plan::plan_letter_delays;
/// use headline_core::spec::AnimationPattern;
///
/// let delays = plan_letter_delays(4, AnimationPattern::RightToLeft, 100);
/// assert_eq!(delays, vec![300, 200, 100, 0]);
/// ```
#[must_use]
pub fn plan_letter_delays(
    total_letters: usize,
    pattern: AnimationPattern,
    base_delay_ms: u32,
) -> Vec<u32> {
    (0..total_letters)
        .map(|index| delay_for(index, total_letters, pattern, base_delay_ms))
        .collect()
}

/// Plan per-letter timing over a resolved run sequence
///
/// Letters carry the segment attribution of the run they came from; indices
/// and delays are assigned globally across the whole sequence.
#[must_use]
pub fn plan_for_runs<'a>(
    runs: &[TextRun<'a>],
    pattern: AnimationPattern,
    base_delay_ms: u32,
) -> Vec<LetterTiming<'a>> {
    let total: usize = runs.iter().map(TextRun::letter_count).sum();
    let mut letters = Vec::with_capacity(total);
    let mut index = 0usize;

    for run in runs {
        for ch in run.text.chars() {
            letters.push(LetterTiming {
                ch,
                index,
                delay_ms: delay_for(index, total, pattern, base_delay_ms),
                segment: run.segment,
                is_whitespace: ch.is_whitespace(),
            });
            index += 1;
        }
    }

    letters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::resolve;
    use crate::spec::{SegmentId, SegmentStyle};

    #[test]
    fn all_together_is_all_zero() {
        let delays = plan_letter_delays(9, AnimationPattern::AllTogether, 250);
        assert_eq!(delays.len(), 9);
        assert!(delays.iter().all(|&d| d == 0));
    }

    #[test]
    fn left_to_right_is_monotonic_with_constant_step() {
        let delays = plan_letter_delays(6, AnimationPattern::LeftToRight, 75);
        assert_eq!(delays[0], 0);
        for pair in delays.windows(2) {
            assert_eq!(pair[1] - pair[0], 75);
        }
    }

    #[test]
    fn right_to_left_reference_schedule() {
        let delays = plan_letter_delays(4, AnimationPattern::RightToLeft, 100);
        assert_eq!(delays, vec![300, 200, 100, 0]);
    }

    #[test]
    fn zero_letters_plans_nothing() {
        assert!(plan_letter_delays(0, AnimationPattern::LeftToRight, 100).is_empty());
    }

    #[test]
    fn stagger_continues_across_run_boundaries() {
        let segments = [SegmentStyle::new(SegmentId::new(0), 0, 5)];
        let runs = resolve("Hello World", &segments);
        let letters = plan_for_runs(&runs, AnimationPattern::LeftToRight, 100);

        assert_eq!(letters.len(), 11);
        for (i, letter) in letters.iter().enumerate() {
            assert_eq!(letter.index, i);
            assert_eq!(letter.delay_ms, u32::try_from(i).unwrap() * 100);
        }
        // Attribution flips at the segment boundary without resetting delays
        assert!(letters[4].segment.is_some());
        assert!(letters[5].segment.is_none());
    }

    #[test]
    fn whitespace_letters_are_counted_and_flagged() {
        let runs = resolve("a b", &[]);
        let letters = plan_for_runs(&runs, AnimationPattern::LeftToRight, 50);
        assert_eq!(letters.len(), 3);
        assert!(letters[1].is_whitespace);
        assert_eq!(letters[1].delay_ms, 50);
    }

    #[test]
    fn huge_indices_saturate_instead_of_overflowing() {
        let delay = delay_for(usize::MAX, usize::MAX, AnimationPattern::LeftToRight, 2);
        assert_eq!(delay, u32::MAX);
    }
}
