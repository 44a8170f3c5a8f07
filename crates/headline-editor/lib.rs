//! Command-based mutation layer for headline style specifications
//!
//! `headline-editor` sits between a host UI and the pure `headline-core`
//! engine. It owns everything about *changing* a spec: typed single-field
//! edits with boundary clamping, segment add/update/remove by id, and the
//! preset catalog. Every command consumes an immutable spec snapshot and
//! returns a fresh one with outcome metadata; the host replaces its current
//! snapshot after each edit (copy-on-write discipline).
//!
//! # Example
//!
//! ```rust
//! use headline_editor::{AddSegmentCommand, EditCommand, FieldEdit, SetFieldCommand};
//! use headline_core::StyleSpec;
//!
//! let spec = StyleSpec::default();
//!
//! // Sliders clamp at the boundary: 150 lands at the documented max
//! let outcome = SetFieldCommand::new(FieldEdit::FontSize(150)).apply(&spec)?;
//! assert_eq!(outcome.spec.font_size, 120);
//!
//! // Missing substrings are a no-op signal, not an error
//! let outcome = AddSegmentCommand::new("not in the headline").apply(&outcome.spec)?;
//! assert!(!outcome.changed);
//! # Ok::<(), headline_editor::EditorError>(())
//! ```

#![deny(clippy::all)]
#![deny(unsafe_code)]

pub mod commands;
pub mod errors;
pub mod presets;

// Re-export core types as first-class citizens
pub use headline_core::spec::{
    AnimationKind, AnimationPattern, EffectLevel, GradientDirection, SegmentId, SegmentStyle,
    StyleSpec,
};

pub use commands::{
    AddSegmentCommand, ApplyPresetCommand, CommandOutcome, EditCommand, FieldEdit,
    RemoveSegmentCommand, SegmentChange, SetFieldCommand, UpdateSegmentCommand,
};
pub use errors::{EditorError, Result};
pub use presets::{preset, presets, Preset};
