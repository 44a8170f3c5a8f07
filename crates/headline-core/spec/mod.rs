//! Declarative style specification for a headline
//!
//! [`StyleSpec`] is the single source of truth for one headline: its text,
//! typography, color/gradient configuration, effects, letter animation, and
//! per-segment styling. The engine treats every spec as an immutable
//! snapshot; mutation lives in the editor layer, which produces a fresh spec
//! value per edit.
//!
//! Serialization uses the camelCase field names of the reference document
//! format so an exported data document round-trips field-for-field.

pub mod animation;
pub mod segment;

use core::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

pub use animation::{AnimationKind, AnimationPattern, Playback};
pub use segment::{SegmentId, SegmentStyle};

/// Valid range for `font_size` in pixels
pub const FONT_SIZE_RANGE: RangeInclusive<u32> = 12..=120;

/// Valid range for `fade_in_duration` in milliseconds
pub const FADE_IN_DURATION_RANGE: RangeInclusive<u32> = 300..=3000;

/// Valid range for `glow_intensity` in pixels
pub const GLOW_INTENSITY_RANGE: RangeInclusive<u32> = 5..=30;

/// Valid range for `letter_animation_delay` in milliseconds
pub const LETTER_ANIMATION_DELAY_RANGE: RangeInclusive<u32> = 50..=300;

/// Direction of the gradient fill, serialized as CSS keywords
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GradientDirection {
    /// Left edge to right edge
    #[serde(rename = "to right")]
    ToRight,
    /// Right edge to left edge
    #[serde(rename = "to left")]
    ToLeft,
    /// Top edge to bottom edge
    #[serde(rename = "to bottom")]
    ToBottom,
    /// Bottom edge to top edge
    #[serde(rename = "to top")]
    ToTop,
}

impl GradientDirection {
    /// CSS keyword for this direction
    #[must_use]
    pub const fn as_css(self) -> &'static str {
        match self {
            Self::ToRight => "to right",
            Self::ToLeft => "to left",
            Self::ToBottom => "to bottom",
            Self::ToTop => "to top",
        }
    }
}

/// Strength level shared by the text shadow and text outline effects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectLevel {
    /// Effect disabled
    None,
    /// Small preset
    Sm,
    /// Medium preset
    Md,
    /// Large preset
    Lg,
}

impl EffectLevel {
    /// Whether the effect is active at all
    #[must_use]
    pub const fn is_enabled(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// Complete visual/animation configuration for one headline
///
/// Field indices in [`SegmentStyle`] ranges refer to `text` as byte offsets;
/// the resolver clamps them to valid char boundaries before slicing.
///
/// # Examples
///
/// ```rust
/// use headline_core::spec::StyleSpec;
///
/// let spec = StyleSpec::default();
/// assert_eq!(spec.font_family, "Inter");
/// assert!(spec.segments.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    /// Headline content; single source of truth for all segment indices
    pub text: String,

    /// Font family name
    pub font_family: String,

    /// Font weight token ("300" through "900")
    pub font_weight: String,

    /// Font size in pixels, within [`FONT_SIZE_RANGE`]
    pub font_size: u32,

    /// Whether the gradient fill replaces the solid text color
    pub enable_gradient: bool,

    /// Solid text color, used when the gradient is disabled
    pub text_color: String,

    /// Gradient start color
    pub gradient_start: String,

    /// Gradient end color
    pub gradient_end: String,

    /// Gradient axis
    pub gradient_direction: GradientDirection,

    /// Whether the headline fades in on appearance
    pub enable_fade_in: bool,

    /// Fade-in duration in milliseconds, within [`FADE_IN_DURATION_RANGE`]
    pub fade_in_duration: u32,

    /// Whether the pointer-engaged glow is active
    pub enable_hover_glow: bool,

    /// Glow color
    pub glow_color: String,

    /// Glow blur radius in pixels, within [`GLOW_INTENSITY_RANGE`]
    pub glow_intensity: u32,

    /// Whether per-letter animation is active
    pub enable_letter_animation: bool,

    /// Which animation kind the letters play
    pub letter_animation_type: AnimationKind,

    /// Base stagger delay in milliseconds, within
    /// [`LETTER_ANIMATION_DELAY_RANGE`]
    pub letter_animation_delay: u32,

    /// How the stagger walks the letters
    pub letter_animation_pattern: AnimationPattern,

    /// Text shadow strength
    pub text_shadow: EffectLevel,

    /// Text shadow color
    pub text_shadow_color: String,

    /// Text outline strength
    pub text_outline: EffectLevel,

    /// Text outline color
    pub text_outline_color: String,

    /// Styled sub-ranges; insertion order is display priority
    pub segments: Vec<SegmentStyle>,

    /// Monotonic id source for new segments. Never decremented, so a segment
    /// id is unique for the lifetime of the spec even across remove/add
    /// cycles.
    #[serde(default)]
    pub next_segment_id: u64,
}

impl Default for StyleSpec {
    fn default() -> Self {
        Self {
            text: "Your Amazing Headlines That Capture Attention and Inspire Action"
                .to_string(),
            font_family: "Inter".to_string(),
            font_weight: "700".to_string(),
            font_size: 48,
            enable_gradient: false,
            text_color: "#0046FF".to_string(),
            gradient_start: "#6366f1".to_string(),
            gradient_end: "#8b5cf6".to_string(),
            gradient_direction: GradientDirection::ToRight,
            enable_fade_in: false,
            fade_in_duration: 1000,
            enable_hover_glow: false,
            glow_color: "#0046FF".to_string(),
            glow_intensity: 10,
            enable_letter_animation: false,
            letter_animation_type: AnimationKind::Bounce,
            letter_animation_delay: 100,
            letter_animation_pattern: AnimationPattern::LeftToRight,
            text_shadow: EffectLevel::None,
            text_shadow_color: "rgba(0,0,0,0.3)".to_string(),
            text_outline: EffectLevel::None,
            text_outline_color: "#000000".to_string(),
            segments: Vec::new(),
            next_segment_id: 0,
        }
    }
}

impl StyleSpec {
    /// Parse a spec from its exported data document
    ///
    /// # Errors
    ///
    /// Returns [`crate::utils::CoreError::Document`] when the document is not
    /// valid JSON for this schema.
    pub fn from_json(document: &str) -> crate::utils::Result<Self> {
        Ok(serde_json::from_str(document)?)
    }

    /// Look up a segment by id
    #[must_use]
    pub fn segment(&self, id: SegmentId) -> Option<&SegmentStyle> {
        self.segments.iter().find(|segment| segment.id == id)
    }

    /// The slice of `text` a segment currently covers, clamped to valid
    /// bounds
    ///
    /// Ranges captured before a text edit may have drifted; the slice clamps
    /// rather than panics, which can yield an empty string.
    #[must_use]
    pub fn segment_text(&self, segment: &SegmentStyle) -> &str {
        let (start, end) = segment.clamped_range(&self.text);
        &self.text[start..end]
    }
}
