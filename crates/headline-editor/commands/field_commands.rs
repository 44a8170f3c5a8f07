//! Single-field edit commands with boundary clamping
//!
//! One typed variant per mutable spec field, mirroring the host UI's
//! `update(field, value)` contract: single-field replace, immutable-update
//! semantics. Numeric fields clamp to their documented ranges at this
//! boundary, so a slider reporting 150 for font size lands at 120 and 5
//! lands at 12.

use core::ops::RangeInclusive;

use headline_core::spec::{
    FADE_IN_DURATION_RANGE, FONT_SIZE_RANGE, GLOW_INTENSITY_RANGE, LETTER_ANIMATION_DELAY_RANGE,
};
use headline_core::{AnimationKind, AnimationPattern, EffectLevel, GradientDirection, StyleSpec};

use super::{CommandOutcome, EditCommand};
use crate::errors::Result;

fn clamped(value: u32, range: &RangeInclusive<u32>) -> u32 {
    value.clamp(*range.start(), *range.end())
}

/// One single-field replacement
#[derive(Debug, Clone, PartialEq)]
pub enum FieldEdit {
    /// Replace the headline text
    Text(String),
    /// Replace the font family
    FontFamily(String),
    /// Replace the font weight token
    FontWeight(String),
    /// Replace the font size (clamped to 12–120 px)
    FontSize(u32),
    /// Replace the solid text color
    TextColor(String),
    /// Toggle the gradient fill
    EnableGradient(bool),
    /// Replace the gradient start color
    GradientStart(String),
    /// Replace the gradient end color
    GradientEnd(String),
    /// Replace the gradient direction
    GradientDirection(GradientDirection),
    /// Toggle the entrance fade
    EnableFadeIn(bool),
    /// Replace the fade duration (clamped to 300–3000 ms)
    FadeInDuration(u32),
    /// Toggle the hover glow
    EnableHoverGlow(bool),
    /// Replace the glow color
    GlowColor(String),
    /// Replace the glow intensity (clamped to 5–30 px)
    GlowIntensity(u32),
    /// Toggle per-letter animation
    EnableLetterAnimation(bool),
    /// Replace the letter animation kind
    LetterAnimationType(AnimationKind),
    /// Replace the stagger delay (clamped to 50–300 ms)
    LetterAnimationDelay(u32),
    /// Replace the stagger pattern
    LetterAnimationPattern(AnimationPattern),
    /// Replace the shadow level
    TextShadow(EffectLevel),
    /// Replace the shadow color
    TextShadowColor(String),
    /// Replace the outline level
    TextOutline(EffectLevel),
    /// Replace the outline color
    TextOutlineColor(String),
}

impl FieldEdit {
    fn write_to(&self, spec: &mut StyleSpec) {
        match self {
            Self::Text(value) => spec.text = value.clone(),
            Self::FontFamily(value) => spec.font_family = value.clone(),
            Self::FontWeight(value) => spec.font_weight = value.clone(),
            Self::FontSize(value) => spec.font_size = clamped(*value, &FONT_SIZE_RANGE),
            Self::TextColor(value) => spec.text_color = value.clone(),
            Self::EnableGradient(value) => spec.enable_gradient = *value,
            Self::GradientStart(value) => spec.gradient_start = value.clone(),
            Self::GradientEnd(value) => spec.gradient_end = value.clone(),
            Self::GradientDirection(value) => spec.gradient_direction = *value,
            Self::EnableFadeIn(value) => spec.enable_fade_in = *value,
            Self::FadeInDuration(value) => {
                spec.fade_in_duration = clamped(*value, &FADE_IN_DURATION_RANGE);
            }
            Self::EnableHoverGlow(value) => spec.enable_hover_glow = *value,
            Self::GlowColor(value) => spec.glow_color = value.clone(),
            Self::GlowIntensity(value) => {
                spec.glow_intensity = clamped(*value, &GLOW_INTENSITY_RANGE);
            }
            Self::EnableLetterAnimation(value) => spec.enable_letter_animation = *value,
            Self::LetterAnimationType(value) => spec.letter_animation_type = *value,
            Self::LetterAnimationDelay(value) => {
                spec.letter_animation_delay = clamped(*value, &LETTER_ANIMATION_DELAY_RANGE);
            }
            Self::LetterAnimationPattern(value) => spec.letter_animation_pattern = *value,
            Self::TextShadow(value) => spec.text_shadow = *value,
            Self::TextShadowColor(value) => spec.text_shadow_color = value.clone(),
            Self::TextOutline(value) => spec.text_outline = *value,
            Self::TextOutlineColor(value) => spec.text_outline_color = value.clone(),
        }
    }
}

/// Command applying one [`FieldEdit`] to a spec snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct SetFieldCommand {
    /// The edit to apply
    pub edit: FieldEdit,
}

impl SetFieldCommand {
    /// Create a field edit command
    #[must_use]
    pub const fn new(edit: FieldEdit) -> Self {
        Self { edit }
    }
}

impl EditCommand for SetFieldCommand {
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome> {
        let mut next = spec.clone();
        self.edit.write_to(&mut next);
        if next == *spec {
            return Ok(CommandOutcome::unchanged(next, "value unchanged"));
        }
        Ok(CommandOutcome::changed(next))
    }
}
