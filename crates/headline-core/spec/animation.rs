//! Closed animation-kind table for per-letter animation
//!
//! Every supported animation is a variant of [`AnimationKind`] carrying its
//! static metadata: stylesheet identifier, display label, UI category,
//! playback class, and keyframe body. The table is compile-time data; there
//! is no runtime string dispatch, and exporters emit the keyframe bodies
//! verbatim.

use serde::{Deserialize, Serialize};

/// Whether an animation plays once on appearance or loops indefinitely
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Playback {
    /// Entrance animation: single iteration, holds its final frame
    Once,
    /// Ambient animation: loops until removed
    Loop,
}

/// How the per-letter stagger walks the headline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationPattern {
    /// Delay grows with letter index
    LeftToRight,
    /// Delay grows from the last letter backwards
    RightToLeft,
    /// Every letter starts at once
    AllTogether,
}

/// Named animation curve applied per letter
///
/// Serialized with the camelCase tokens of the reference document format
/// ("bounce", "slideUp", "heartBeat", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationKind {
    /// Vertical bounce
    Bounce,
    /// Gentle vertical wave
    Wave,
    /// Full rotation
    Rotate,
    /// Grow-and-shrink
    Scale,
    /// Fade in from transparent
    FadeIn,
    /// Slide in from below
    SlideUp,
    /// Slide in from above
    SlideDown,
    /// Slide in from the right
    SlideLeft,
    /// Slide in from the left
    SlideRight,
    /// Perspective flip entrance
    Flip,
    /// Rubber-band stretch
    Rubber,
    /// Soft scale pulse
    Pulse,
    /// Pendulum swing
    Swing,
    /// Celebratory shake-and-grow
    Tada,
    /// Side-to-side wobble
    Wobble,
    /// Gelatinous skew
    Jello,
    /// Double-beat scale
    HeartBeat,
    /// Opacity flash
    Flash,
    /// Horizontal shake
    Shake,
    /// Rolling entrance from the left
    RollIn,
    /// Zoom entrance
    ZoomIn,
    /// Skewed high-speed entrance
    LightSpeed,
    /// Flip entrance around the X axis
    FlipInX,
    /// Flip entrance around the Y axis
    FlipInY,
    /// Back-eased entrance from below
    BackInUp,
}

impl AnimationKind {
    /// Every supported kind, in UI catalog order
    pub const ALL: [Self; 25] = [
        Self::Bounce,
        Self::Rubber,
        Self::Jello,
        Self::Tada,
        Self::Wave,
        Self::Swing,
        Self::Wobble,
        Self::Shake,
        Self::Scale,
        Self::Pulse,
        Self::HeartBeat,
        Self::ZoomIn,
        Self::Rotate,
        Self::Flip,
        Self::FlipInX,
        Self::FlipInY,
        Self::FadeIn,
        Self::SlideUp,
        Self::SlideDown,
        Self::SlideLeft,
        Self::SlideRight,
        Self::RollIn,
        Self::LightSpeed,
        Self::BackInUp,
        Self::Flash,
    ];

    /// Stylesheet identifier, used both as the animation name and the
    /// keyframes name
    #[must_use]
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Bounce => "bounce",
            Self::Wave => "wave",
            Self::Rotate => "rotate",
            Self::Scale => "scale",
            Self::FadeIn => "fadeIn",
            Self::SlideUp => "slideUp",
            Self::SlideDown => "slideDown",
            Self::SlideLeft => "slideLeft",
            Self::SlideRight => "slideRight",
            Self::Flip => "flip",
            Self::Rubber => "rubber",
            Self::Pulse => "pulse",
            Self::Swing => "swing",
            Self::Tada => "tada",
            Self::Wobble => "wobble",
            Self::Jello => "jello",
            Self::HeartBeat => "heartBeat",
            Self::Flash => "flash",
            Self::Shake => "shake",
            Self::RollIn => "rollIn",
            Self::ZoomIn => "zoomIn",
            Self::LightSpeed => "lightSpeed",
            Self::FlipInX => "flipInX",
            Self::FlipInY => "flipInY",
            Self::BackInUp => "backInUp",
        }
    }

    /// Human-readable label from the reference catalog
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bounce => "Bounce",
            Self::Wave => "Wave",
            Self::Rotate => "Rotate",
            Self::Scale => "Scale",
            Self::FadeIn => "Fade In",
            Self::SlideUp => "Slide Up",
            Self::SlideDown => "Slide Down",
            Self::SlideLeft => "Slide Left",
            Self::SlideRight => "Slide Right",
            Self::Flip => "Flip",
            Self::Rubber => "Rubber",
            Self::Pulse => "Pulse",
            Self::Swing => "Swing",
            Self::Tada => "Tada",
            Self::Wobble => "Wobble",
            Self::Jello => "Jello",
            Self::HeartBeat => "Heart Beat",
            Self::Flash => "Flash",
            Self::Shake => "Shake",
            Self::RollIn => "Roll In",
            Self::ZoomIn => "Zoom In",
            Self::LightSpeed => "Light Speed",
            Self::FlipInX => "Flip In X",
            Self::FlipInY => "Flip In Y",
            Self::BackInUp => "Back In Up",
        }
    }

    /// Catalog grouping from the reference UI
    #[must_use]
    pub const fn category(self) -> &'static str {
        match self {
            Self::Bounce | Self::Rubber | Self::Jello | Self::Tada => "Bounce & Elastic",
            Self::Wave | Self::Swing | Self::Wobble | Self::Shake => "Wave & Movement",
            Self::Scale | Self::Pulse | Self::HeartBeat | Self::ZoomIn => "Scale & Pulse",
            Self::Rotate | Self::Flip | Self::FlipInX | Self::FlipInY => "Rotation & Flip",
            Self::FadeIn
            | Self::SlideUp
            | Self::SlideDown
            | Self::SlideLeft
            | Self::SlideRight
            | Self::RollIn
            | Self::LightSpeed
            | Self::BackInUp => "Entrance Effects",
            Self::Flash => "Special Effects",
        }
    }

    /// Whether this kind is an entrance animation (plays once)
    #[must_use]
    pub const fn is_entrance(self) -> bool {
        matches!(
            self,
            Self::FadeIn
                | Self::SlideUp
                | Self::SlideDown
                | Self::SlideLeft
                | Self::SlideRight
                | Self::Flip
                | Self::FlipInX
                | Self::FlipInY
                | Self::RollIn
                | Self::ZoomIn
                | Self::LightSpeed
                | Self::BackInUp
        )
    }

    /// Playback class derived from the entrance table
    #[must_use]
    pub const fn playback(self) -> Playback {
        if self.is_entrance() {
            Playback::Once
        } else {
            Playback::Loop
        }
    }

    /// Static keyframe body for this kind, emitted verbatim inside an
    /// `@keyframes` block
    #[must_use]
    pub const fn keyframes(self) -> &'static str {
        match self {
            Self::Bounce => {
                "  0%, 20%, 50%, 80%, 100% { transform: translateY(0); }\n  40% { transform: translateY(-0.4em); }\n  60% { transform: translateY(-0.2em); }"
            }
            Self::Wave => {
                "  0%, 100% { transform: translateY(0); }\n  50% { transform: translateY(-0.25em); }"
            }
            Self::Rotate => {
                "  from { transform: rotate(0deg); }\n  to { transform: rotate(360deg); }"
            }
            Self::Scale => {
                "  0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.25); }"
            }
            Self::FadeIn => "  from { opacity: 0; }\n  to { opacity: 1; }",
            Self::SlideUp => {
                "  from { opacity: 0; transform: translateY(1em); }\n  to { opacity: 1; transform: translateY(0); }"
            }
            Self::SlideDown => {
                "  from { opacity: 0; transform: translateY(-1em); }\n  to { opacity: 1; transform: translateY(0); }"
            }
            Self::SlideLeft => {
                "  from { opacity: 0; transform: translateX(1em); }\n  to { opacity: 1; transform: translateX(0); }"
            }
            Self::SlideRight => {
                "  from { opacity: 0; transform: translateX(-1em); }\n  to { opacity: 1; transform: translateX(0); }"
            }
            Self::Flip => {
                "  from { opacity: 0; transform: perspective(400px) rotateY(90deg); }\n  to { opacity: 1; transform: perspective(400px) rotateY(0); }"
            }
            Self::Rubber => {
                "  0% { transform: scale(1, 1); }\n  30% { transform: scale(1.25, 0.75); }\n  40% { transform: scale(0.75, 1.25); }\n  50% { transform: scale(1.15, 0.85); }\n  65% { transform: scale(0.95, 1.05); }\n  75% { transform: scale(1.05, 0.95); }\n  100% { transform: scale(1, 1); }"
            }
            Self::Pulse => {
                "  0%, 100% { transform: scale(1); }\n  50% { transform: scale(1.05); }"
            }
            Self::Swing => {
                "  20% { transform: rotate(15deg); }\n  40% { transform: rotate(-10deg); }\n  60% { transform: rotate(5deg); }\n  80% { transform: rotate(-5deg); }\n  100% { transform: rotate(0deg); }"
            }
            Self::Tada => {
                "  0% { transform: scale(1); }\n  10%, 20% { transform: scale(0.9) rotate(-3deg); }\n  30%, 50%, 70%, 90% { transform: scale(1.1) rotate(3deg); }\n  40%, 60%, 80% { transform: scale(1.1) rotate(-3deg); }\n  100% { transform: scale(1) rotate(0); }"
            }
            Self::Wobble => {
                "  0% { transform: translateX(0); }\n  15% { transform: translateX(-25%) rotate(-5deg); }\n  30% { transform: translateX(20%) rotate(3deg); }\n  45% { transform: translateX(-15%) rotate(-3deg); }\n  60% { transform: translateX(10%) rotate(2deg); }\n  75% { transform: translateX(-5%) rotate(-1deg); }\n  100% { transform: translateX(0); }"
            }
            Self::Jello => {
                "  0%, 11.1%, 100% { transform: skewX(0) skewY(0); }\n  22.2% { transform: skewX(-12.5deg) skewY(-12.5deg); }\n  33.3% { transform: skewX(6.25deg) skewY(6.25deg); }\n  44.4% { transform: skewX(-3.125deg) skewY(-3.125deg); }\n  55.5% { transform: skewX(1.5625deg) skewY(1.5625deg); }\n  66.6% { transform: skewX(-0.78125deg) skewY(-0.78125deg); }\n  77.7% { transform: skewX(0.390625deg) skewY(0.390625deg); }\n  88.8% { transform: skewX(-0.1953125deg) skewY(-0.1953125deg); }"
            }
            Self::HeartBeat => {
                "  0% { transform: scale(1); }\n  14% { transform: scale(1.3); }\n  28% { transform: scale(1); }\n  42% { transform: scale(1.3); }\n  70% { transform: scale(1); }"
            }
            Self::Flash => {
                "  0%, 50%, 100% { opacity: 1; }\n  25%, 75% { opacity: 0; }"
            }
            Self::Shake => {
                "  0%, 100% { transform: translateX(0); }\n  10%, 30%, 50%, 70%, 90% { transform: translateX(-0.2em); }\n  20%, 40%, 60%, 80% { transform: translateX(0.2em); }"
            }
            Self::RollIn => {
                "  from { opacity: 0; transform: translateX(-100%) rotate(-120deg); }\n  to { opacity: 1; transform: translateX(0) rotate(0deg); }"
            }
            Self::ZoomIn => {
                "  from { opacity: 0; transform: scale(0.3); }\n  50% { opacity: 1; }\n  to { opacity: 1; transform: scale(1); }"
            }
            Self::LightSpeed => {
                "  from { opacity: 0; transform: translateX(100%) skewX(-30deg); }\n  60% { opacity: 1; transform: skewX(20deg); }\n  80% { transform: skewX(-5deg); }\n  to { opacity: 1; transform: translateX(0) skewX(0); }"
            }
            Self::FlipInX => {
                "  from { opacity: 0; transform: perspective(400px) rotateX(90deg); }\n  40% { transform: perspective(400px) rotateX(-20deg); }\n  60% { opacity: 1; transform: perspective(400px) rotateX(10deg); }\n  80% { transform: perspective(400px) rotateX(-5deg); }\n  to { opacity: 1; transform: perspective(400px) rotateX(0); }"
            }
            Self::FlipInY => {
                "  from { opacity: 0; transform: perspective(400px) rotateY(90deg); }\n  40% { transform: perspective(400px) rotateY(-20deg); }\n  60% { opacity: 1; transform: perspective(400px) rotateY(10deg); }\n  80% { transform: perspective(400px) rotateY(-5deg); }\n  to { opacity: 1; transform: perspective(400px) rotateY(0); }"
            }
            Self::BackInUp => {
                "  0% { opacity: 0.7; transform: translateY(100%) scale(0.7); }\n  80% { opacity: 0.7; transform: translateY(0) scale(0.7); }\n  100% { opacity: 1; transform: translateY(0) scale(1); }"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_lists_every_kind_once() {
        assert_eq!(AnimationKind::ALL.len(), 25);
        for (i, kind) in AnimationKind::ALL.iter().enumerate() {
            assert!(
                !AnimationKind::ALL[i + 1..].contains(kind),
                "duplicate kind in catalog"
            );
        }
    }

    #[test]
    fn entrance_classification_matches_table() {
        let loops = [
            AnimationKind::Bounce,
            AnimationKind::Wave,
            AnimationKind::Rotate,
            AnimationKind::Scale,
            AnimationKind::Rubber,
            AnimationKind::Pulse,
            AnimationKind::Swing,
            AnimationKind::Tada,
            AnimationKind::Wobble,
            AnimationKind::Jello,
            AnimationKind::HeartBeat,
            AnimationKind::Flash,
            AnimationKind::Shake,
        ];
        for kind in AnimationKind::ALL {
            let expected_loop = loops.contains(&kind);
            assert_eq!(kind.is_entrance(), !expected_loop, "{}", kind.css_name());
            let playback = kind.playback();
            if expected_loop {
                assert_eq!(playback, Playback::Loop);
            } else {
                assert_eq!(playback, Playback::Once);
            }
        }
    }

    #[test]
    fn css_names_round_trip_through_serde() {
        for kind in AnimationKind::ALL {
            let json = serde_json::to_string(&kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.css_name()));
            let back: AnimationKind = serde_json::from_str(&json).unwrap();
            assert_eq!(back, kind);
        }
    }

    #[test]
    fn every_kind_has_keyframes_and_category() {
        for kind in AnimationKind::ALL {
            assert!(!kind.keyframes().is_empty());
            assert!(!kind.category().is_empty());
            assert!(!kind.label().is_empty());
        }
    }

    #[test]
    fn pattern_serializes_camel_case() {
        assert_eq!(
            serde_json::to_string(&AnimationPattern::LeftToRight).unwrap(),
            r#""leftToRight""#
        );
        assert_eq!(
            serde_json::to_string(&AnimationPattern::AllTogether).unwrap(),
            r#""allTogether""#
        );
    }
}
