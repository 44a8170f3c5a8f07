//! Stylesheet export
//!
//! Renders the compiled global property set as a `.headline` rule, then
//! conditionally appends the hover-glow rule, the fade-in block, and the
//! per-letter animation block. Keyframe bodies come from the static
//! animation table and are emitted verbatim, at most once per stylesheet.

use crate::compile::{compile_global, fade_effect, glow_effect, GlowEffect};
use crate::spec::{Playback, StyleSpec};

/// Duration of one letter-animation iteration
pub const LETTER_ANIMATION_DURATION: &str = "1s";

/// Keyframes name for the whole-headline entrance fade
const FADE_IN_KEYFRAMES: &str = "headlineFadeIn";

/// Append an `@keyframes` block unless the stylesheet already contains it
///
/// Repeatedly enabling an animation must never duplicate global style text,
/// so inclusion is guarded by a presence check.
fn push_keyframes(out: &mut String, name: &str, body: &str) {
    let header = format!("@keyframes {name} ");
    if out.contains(&header) {
        return;
    }
    out.push_str(&format!("\n{header}{{\n{body}\n}}\n"));
}

/// Render the compiled global properties as a `.headline` rule
fn base_rule(spec: &StyleSpec) -> String {
    let declarations: Vec<String> = compile_global(spec)
        .emitted()
        .map(|decl| format!("  {}: {};", decl.property, decl.value))
        .collect();
    format!(".headline {{\n{}\n}}\n", declarations.join("\n"))
}

fn hover_rule(glow: &GlowEffect) -> String {
    format!(
        ".headline:hover {{\n  text-shadow: {};\n  transition: {};\n}}\n",
        glow.shadow_value(),
        GlowEffect::TRANSITION
    )
}

/// Produce the full stylesheet for a spec
///
/// # Examples
///
/// ```rust
/// use headline_core::export::stylesheet;
/// use headline_core::spec::StyleSpec;
///
/// let css = stylesheet(&StyleSpec::default());
/// assert!(css.starts_with(".headline {"));
/// assert!(css.contains("font-family: Inter;"));
/// ```
#[must_use]
pub fn stylesheet(spec: &StyleSpec) -> String {
    let mut out = base_rule(spec);

    if let Some(glow) = glow_effect(spec) {
        out.push('\n');
        out.push_str(&hover_rule(&glow));
    }

    if let Some(fade) = fade_effect(spec) {
        push_keyframes(&mut out, FADE_IN_KEYFRAMES, "  from { opacity: 0; }\n  to { opacity: 1; }");
        out.push_str(&format!(
            "\n.headline {{\n  animation: {FADE_IN_KEYFRAMES} {}ms ease-in both;\n}}\n",
            fade.duration_ms
        ));
    }

    if spec.enable_letter_animation {
        let kind = spec.letter_animation_type;
        push_keyframes(&mut out, kind.css_name(), kind.keyframes());
        let iteration = match kind.playback() {
            Playback::Once => "1",
            Playback::Loop => "infinite",
        };
        let mut rule = format!(
            "\n.headline .letter {{\n  display: inline-block;\n  white-space: pre;\n  animation: {} {LETTER_ANIMATION_DURATION} ease {iteration};\n",
            kind.css_name()
        );
        if kind.is_entrance() {
            rule.push_str("  animation-fill-mode: both;\n");
        }
        rule.push_str("}\n");
        out.push_str(&rule);
    }

    out
}
