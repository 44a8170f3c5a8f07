//! Clipboard export of the compiled declarations
//!
//! The clipboard is the engine's only external I/O boundary. The host
//! supplies a [`ClipboardWriter`]; a failed write is caught and reported as
//! `false`, never propagated as a crash.

use crate::compile::compile_global;
use crate::spec::StyleSpec;
use crate::utils::Result;

/// Host-provided clipboard sink
pub trait ClipboardWriter {
    /// Write the given text to the system clipboard
    ///
    /// # Errors
    ///
    /// Implementations return [`crate::utils::CoreError::ClipboardWrite`]
    /// (or any `CoreError`) when the host denies or fails the write.
    fn write_text(&mut self, text: &str) -> Result<()>;
}

/// The compiled global declarations as space-joined inline text
///
/// Same declarations and filtering as the stylesheet export, formatted for
/// pasting into an inline `style` attribute.
#[must_use]
pub fn clipboard_declarations(spec: &StyleSpec) -> String {
    compile_global(spec)
        .emitted()
        .map(|decl| format!("{}: {};", decl.property, decl.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Copy the inline declarations to the host clipboard
///
/// Returns `true` on success, `false` when the host rejects the write.
pub fn copy_to_clipboard(spec: &StyleSpec, writer: &mut dyn ClipboardWriter) -> bool {
    writer.write_text(&clipboard_declarations(spec)).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::CoreError;

    #[derive(Default)]
    struct RecordingClipboard {
        contents: Option<String>,
        deny: bool,
    }

    impl ClipboardWriter for RecordingClipboard {
        fn write_text(&mut self, text: &str) -> Result<()> {
            if self.deny {
                return Err(CoreError::clipboard("write denied"));
            }
            self.contents = Some(text.to_string());
            Ok(())
        }
    }

    #[test]
    fn declarations_are_space_joined() {
        let text = clipboard_declarations(&StyleSpec::default());
        assert!(text.starts_with("font-family: Inter; font-weight: 700;"));
        assert!(text.ends_with("color: #0046FF;"));
        assert!(!text.contains('\n'));
    }

    #[test]
    fn copy_reports_success() {
        let mut clipboard = RecordingClipboard::default();
        assert!(copy_to_clipboard(&StyleSpec::default(), &mut clipboard));
        assert!(clipboard.contents.unwrap().contains("font-size: 48px;"));
    }

    #[test]
    fn denied_write_reports_false_without_panic() {
        let mut clipboard = RecordingClipboard {
            deny: true,
            ..RecordingClipboard::default()
        };
        assert!(!copy_to_clipboard(&StyleSpec::default(), &mut clipboard));
        assert!(clipboard.contents.is_none());
    }
}
