//! Ready-made style presets
//!
//! The nine presets of the reference catalog, expressed as literal spec
//! values. Applying one replaces the whole spec (see
//! [`crate::commands::ApplyPresetCommand`]).

use headline_core::spec::{AnimationKind, AnimationPattern, EffectLevel, StyleSpec};

/// A named, ready-made style
#[derive(Debug, Clone, PartialEq)]
pub struct Preset {
    /// Catalog name
    pub name: &'static str,
    /// The complete spec this preset applies
    pub spec: StyleSpec,
}

fn base(name: &'static str, spec: StyleSpec) -> Preset {
    Preset { name, spec }
}

/// The full preset catalog, in display order
#[must_use]
pub fn presets() -> Vec<Preset> {
    vec![
        base(
            "Modern",
            StyleSpec {
                text: "Modern Design".to_string(),
                font_family: "Inter".to_string(),
                font_weight: "600".to_string(),
                font_size: 42,
                ..StyleSpec::default()
            },
        ),
        base(
            "Elegant",
            StyleSpec {
                text: "Elegant Typography".to_string(),
                font_family: "Georgia".to_string(),
                font_weight: "400".to_string(),
                font_size: 48,
                text_color: "#8b5cf6".to_string(),
                enable_fade_in: true,
                fade_in_duration: 1200,
                glow_color: "#8b5cf6".to_string(),
                letter_animation_type: AnimationKind::SlideUp,
                ..StyleSpec::default()
            },
        ),
        base(
            "Bold",
            StyleSpec {
                text: "BOLD IMPACT".to_string(),
                font_family: "Inter".to_string(),
                font_weight: "900".to_string(),
                font_size: 56,
                text_color: "#ef4444".to_string(),
                enable_hover_glow: true,
                glow_color: "#ef4444".to_string(),
                glow_intensity: 15,
                letter_animation_type: AnimationKind::Scale,
                text_shadow: EffectLevel::Md,
                text_shadow_color: "rgba(0,0,0,0.4)".to_string(),
                ..StyleSpec::default()
            },
        ),
        base(
            "Gradient",
            StyleSpec {
                text: "Gradient Magic".to_string(),
                enable_gradient: true,
                gradient_start: "#6366f1".to_string(),
                gradient_end: "#ec4899".to_string(),
                enable_hover_glow: true,
                glow_color: "#6366f1".to_string(),
                glow_intensity: 12,
                letter_animation_type: AnimationKind::Rotate,
                ..StyleSpec::default()
            },
        ),
        base(
            "Shadow",
            StyleSpec {
                text: "Shadow Depth".to_string(),
                text_color: "#10b981".to_string(),
                glow_color: "#10b981".to_string(),
                text_shadow: EffectLevel::Lg,
                text_shadow_color: "#374151".to_string(),
                ..StyleSpec::default()
            },
        ),
        base(
            "Retro",
            StyleSpec {
                text: "RETRO VIBES".to_string(),
                font_family: "Times".to_string(),
                font_size: 52,
                text_color: "#f97316".to_string(),
                glow_color: "#f97316".to_string(),
                enable_letter_animation: true,
                letter_animation_type: AnimationKind::Pulse,
                letter_animation_delay: 150,
                text_shadow: EffectLevel::Sm,
                text_shadow_color: "rgba(0,0,0,0.5)".to_string(),
                ..StyleSpec::default()
            },
        ),
        base(
            "Neon Glow",
            StyleSpec {
                text: "NEON LIGHTS".to_string(),
                font_family: "Arial".to_string(),
                font_size: 52,
                text_color: "#00ffff".to_string(),
                enable_hover_glow: true,
                glow_color: "#00ffff".to_string(),
                glow_intensity: 20,
                enable_letter_animation: true,
                letter_animation_type: AnimationKind::Pulse,
                letter_animation_pattern: AnimationPattern::AllTogether,
                text_shadow: EffectLevel::Lg,
                text_shadow_color: "#00ffff".to_string(),
                text_outline: EffectLevel::Sm,
                text_outline_color: "#ffffff".to_string(),
                ..StyleSpec::default()
            },
        ),
        base(
            "Minimal",
            StyleSpec {
                text: "clean & simple".to_string(),
                font_family: "Helvetica".to_string(),
                font_weight: "400".to_string(),
                font_size: 40,
                text_color: "#6b7280".to_string(),
                enable_fade_in: true,
                fade_in_duration: 800,
                glow_color: "#6b7280".to_string(),
                letter_animation_type: AnimationKind::FadeIn,
                ..StyleSpec::default()
            },
        ),
        base(
            "Playful",
            StyleSpec {
                text: "Fun & Playful!".to_string(),
                font_weight: "600".to_string(),
                font_size: 44,
                enable_gradient: true,
                gradient_start: "#f472b6".to_string(),
                gradient_end: "#fbbf24".to_string(),
                enable_hover_glow: true,
                glow_color: "#f472b6".to_string(),
                glow_intensity: 12,
                enable_letter_animation: true,
                letter_animation_type: AnimationKind::Bounce,
                letter_animation_delay: 80,
                ..StyleSpec::default()
            },
        ),
    ]
}

/// Look up a preset by catalog name
#[must_use]
pub fn preset(name: &str) -> Option<Preset> {
    presets().into_iter().find(|preset| preset.name == name)
}
