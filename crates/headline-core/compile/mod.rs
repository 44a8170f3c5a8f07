//! Visual property compilation
//!
//! Maps a [`StyleSpec`] (global) or a [`SegmentStyle`] (local) into a
//! platform-neutral [`PropertySet`]: an ordered list of CSS declarations
//! ready for rendering or stylesheet emission. Compilation is pure; the
//! hover glow and fade-in are state-dependent deltas exposed as separate
//! values rather than folded into the static set.

use crate::spec::{EffectLevel, SegmentStyle, StyleSpec};

/// One compiled CSS declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// CSS property name
    pub property: &'static str,
    /// Property value
    pub value: String,
}

/// Ordered set of compiled declarations
///
/// `set` has last-write-wins semantics but keeps the original insertion
/// position, matching the override behavior of the reference implementation
/// (later compilation steps replace earlier values in place).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertySet {
    declarations: Vec<Declaration>,
}

impl PropertySet {
    /// Create an empty set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a declaration
    pub fn set(&mut self, property: &'static str, value: impl Into<String>) {
        let value = value.into();
        if let Some(existing) = self
            .declarations
            .iter_mut()
            .find(|decl| decl.property == property)
        {
            existing.value = value;
        } else {
            self.declarations.push(Declaration { property, value });
        }
    }

    /// Value of a property, if present
    #[must_use]
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|decl| decl.property == property)
            .map(|decl| decl.value.as_str())
    }

    /// All declarations in insertion order
    #[must_use]
    pub fn iter(&self) -> core::slice::Iter<'_, Declaration> {
        self.declarations.iter()
    }

    /// Declarations that survive export filtering
    ///
    /// Values of `none`, `unset`, `initial`, and `transparent` are carriers
    /// of "nothing to render" and are skipped when emitting text forms.
    pub fn emitted(&self) -> impl Iterator<Item = &Declaration> {
        self.declarations.iter().filter(|decl| {
            !matches!(decl.value.as_str(), "none" | "unset" | "initial" | "transparent")
        })
    }

    /// Number of declarations, including non-emitted ones
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Whether the set holds no declarations at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

impl<'a> IntoIterator for &'a PropertySet {
    type Item = &'a Declaration;
    type IntoIter = core::slice::Iter<'a, Declaration>;

    fn into_iter(self) -> Self::IntoIter {
        self.declarations.iter()
    }
}

/// Hover-state glow delta
///
/// Not part of the static property set: renderers apply it while the pointer
/// is engaged and remove it on disengage, over [`GlowEffect::TRANSITION`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlowEffect {
    /// Glow color
    pub color: String,
    /// Blur radius in pixels
    pub intensity: u32,
}

impl GlowEffect {
    /// Transition applied when the glow engages or releases
    pub const TRANSITION: &'static str = "text-shadow 0.3s ease";

    /// The `text-shadow` value rendered while the pointer is engaged
    #[must_use]
    pub fn shadow_value(&self) -> String {
        format!("0 0 {}px {}", self.intensity, self.color)
    }
}

/// Entrance fade for the whole headline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeEffect {
    /// Fade duration in milliseconds
    pub duration_ms: u32,
}

const fn shadow_offsets(level: EffectLevel) -> &'static str {
    match level {
        EffectLevel::None => "",
        EffectLevel::Sm => "1px 1px 2px",
        EffectLevel::Md => "2px 2px 4px",
        EffectLevel::Lg => "3px 3px 6px",
    }
}

const fn outline_width(level: EffectLevel) -> &'static str {
    match level {
        EffectLevel::None => "",
        EffectLevel::Sm => "1px",
        EffectLevel::Md => "2px",
        EffectLevel::Lg => "3px",
    }
}

/// Compile the global property set for a spec
///
/// Later steps override earlier ones: base typography and solid color, then
/// shadow, then outline, then the gradient fill, which always wins over the
/// solid color by forcing it transparent and clipping the gradient to the
/// glyph shapes.
///
/// # Examples
///
/// ```rust
/// use headline_core::compile::compile_global;
/// use headline_core::spec::StyleSpec;
///
/// let mut spec = StyleSpec::default();
/// spec.enable_gradient = true;
/// let set = compile_global(&spec);
/// assert_eq!(set.get("color"), Some("transparent"));
/// assert!(set.get("background").unwrap().starts_with("linear-gradient"));
/// ```
#[must_use]
pub fn compile_global(spec: &StyleSpec) -> PropertySet {
    let mut set = PropertySet::new();

    set.set("font-family", spec.font_family.clone());
    set.set("font-weight", spec.font_weight.clone());
    set.set("font-size", format!("{}px", spec.font_size));
    set.set("line-height", "1.2");
    set.set("text-align", "center");
    set.set("color", spec.text_color.clone());

    if spec.text_shadow.is_enabled() {
        set.set(
            "text-shadow",
            format!("{} {}", shadow_offsets(spec.text_shadow), spec.text_shadow_color),
        );
    }

    if spec.text_outline.is_enabled() {
        set.set(
            "-webkit-text-stroke",
            format!("{} {}", outline_width(spec.text_outline), spec.text_outline_color),
        );
    }

    if spec.enable_gradient {
        set.set(
            "background",
            format!(
                "linear-gradient({}, {}, {})",
                spec.gradient_direction.as_css(),
                spec.gradient_start,
                spec.gradient_end
            ),
        );
        set.set("-webkit-background-clip", "text");
        set.set("background-clip", "text");
        set.set("-webkit-text-fill-color", "transparent");
        set.set("color", "transparent");
    }

    set
}

/// Compile the local property set for one segment
///
/// Applied to the run's wrapping element at render time, additive over the
/// global set. Highlight before background: both paint `background-color`,
/// and the documented precedence is background > highlight.
#[must_use]
pub fn compile_segment(segment: &SegmentStyle) -> PropertySet {
    let mut set = PropertySet::new();

    if segment.highlight {
        set.set("background-color", segment.highlight_color.clone());
        set.set("padding", "0.1em 0.2em");
    }

    if segment.underline {
        set.set("text-decoration-line", "underline");
        set.set("text-decoration-color", segment.underline_color.clone());
        set.set("text-decoration-thickness", "2px");
    }

    if segment.background {
        set.set("background-color", segment.background_color.clone());
        set.set("padding", "0.1em 0.3em");
        set.set("display", "inline-block");
    }

    set
}

/// The hover glow parameters, when enabled
#[must_use]
pub fn glow_effect(spec: &StyleSpec) -> Option<GlowEffect> {
    spec.enable_hover_glow.then(|| GlowEffect {
        color: spec.glow_color.clone(),
        intensity: spec.glow_intensity,
    })
}

/// The entrance fade parameters, when enabled
#[must_use]
pub fn fade_effect(spec: &StyleSpec) -> Option<FadeEffect> {
    spec.enable_fade_in.then(|| FadeEffect {
        duration_ms: spec.fade_in_duration,
    })
}
