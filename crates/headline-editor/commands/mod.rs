//! Command system for spec mutation
//!
//! Every edit is a command applied to an immutable [`StyleSpec`] snapshot,
//! producing a fresh spec plus outcome metadata. Commands never mutate in
//! place; the host replaces its current snapshot with the returned one.
//! Expected misses degrade to a no-op outcome (`changed: false`) rather than
//! an error: blank or missing substring on segment add, unknown segment id.

pub mod field_commands;
pub mod segment_commands;

use headline_core::StyleSpec;

use crate::errors::Result;

pub use field_commands::{FieldEdit, SetFieldCommand};
pub use segment_commands::{
    AddSegmentCommand, RemoveSegmentCommand, SegmentChange, UpdateSegmentCommand,
};

/// Result of applying a command: the new spec snapshot plus metadata
#[derive(Debug, Clone, PartialEq)]
pub struct CommandOutcome {
    /// The spec after the command (may equal the input for no-ops)
    pub spec: StyleSpec,

    /// Whether the command changed anything
    pub changed: bool,

    /// Optional message about the operation (surfaced as inline validation
    /// text by hosts)
    pub message: Option<String>,
}

impl CommandOutcome {
    /// A successful outcome with a changed spec
    #[must_use]
    pub const fn changed(spec: StyleSpec) -> Self {
        Self {
            spec,
            changed: true,
            message: None,
        }
    }

    /// A no-op outcome returning the input spec untouched
    #[must_use]
    pub fn unchanged(spec: StyleSpec, message: impl Into<String>) -> Self {
        Self {
            spec,
            changed: false,
            message: Some(message.into()),
        }
    }

    /// Attach a message to the outcome
    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// An edit applied to an immutable spec snapshot
pub trait EditCommand {
    /// Apply this command to a snapshot, producing a new one
    ///
    /// # Errors
    ///
    /// Commands reserve the error channel for genuinely exceptional cases;
    /// expected misses (not-found substrings, unknown ids) are no-op
    /// outcomes instead.
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome>;
}

/// Command that replaces the whole spec with a preset
#[derive(Debug, Clone)]
pub struct ApplyPresetCommand {
    /// The preset spec to switch to
    pub preset: StyleSpec,
}

impl ApplyPresetCommand {
    /// Create a preset-application command
    #[must_use]
    pub const fn new(preset: StyleSpec) -> Self {
        Self { preset }
    }
}

impl EditCommand for ApplyPresetCommand {
    fn apply(&self, spec: &StyleSpec) -> Result<CommandOutcome> {
        if *spec == self.preset {
            return Ok(CommandOutcome::unchanged(
                spec.clone(),
                "preset already active",
            ));
        }
        Ok(CommandOutcome::changed(self.preset.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apply_preset_replaces_spec() {
        let spec = StyleSpec::default();
        let mut preset = StyleSpec::default();
        preset.text = "BOLD IMPACT".to_string();
        preset.font_weight = "900".to_string();

        let outcome = ApplyPresetCommand::new(preset.clone()).apply(&spec).unwrap();
        assert!(outcome.changed);
        assert_eq!(outcome.spec, preset);
    }

    #[test]
    fn apply_identical_preset_is_noop() {
        let spec = StyleSpec::default();
        let outcome = ApplyPresetCommand::new(spec.clone()).apply(&spec).unwrap();
        assert!(!outcome.changed);
        assert_eq!(outcome.spec, spec);
    }

    #[test]
    fn outcome_constructors_set_metadata() {
        let spec = StyleSpec::default();
        let changed = CommandOutcome::changed(spec.clone());
        assert!(changed.changed);
        assert!(changed.message.is_none());

        let unchanged = CommandOutcome::unchanged(spec, "nothing to do");
        assert!(!unchanged.changed);
        assert_eq!(unchanged.message.as_deref(), Some("nothing to do"));
    }
}
