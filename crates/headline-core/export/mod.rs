//! Export of compiled styles to file payloads and the clipboard
//!
//! Exporters are pure functions over the compiled property sets and the
//! spec's text; they carry no resolution logic of their own. Three file
//! formats are supported (data document, stylesheet, standalone page) plus
//! a clipboard text form of the inline declarations.

pub mod clipboard;
pub mod css;
pub mod html;
pub mod json;

pub use clipboard::{clipboard_declarations, copy_to_clipboard, ClipboardWriter};
pub use css::stylesheet;
pub use html::page;
pub use json::data_document;

use crate::spec::StyleSpec;
use crate::utils::Result;

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    /// Full spec as a JSON data document
    Json,
    /// Compiled stylesheet
    Css,
    /// Standalone page embedding the stylesheet
    Html,
}

impl ExportFormat {
    /// Download file name for this format
    #[must_use]
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Json => "headline-style.json",
            Self::Css => "headline-style.css",
            Self::Html => "headline.html",
        }
    }

    /// MIME type for this format
    #[must_use]
    pub const fn mime_type(self) -> &'static str {
        match self {
            Self::Json => "application/json",
            Self::Css => "text/css",
            Self::Html => "text/html",
        }
    }
}

/// One exported file: name, MIME type, and contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportPayload {
    /// Suggested download file name
    pub file_name: &'static str,
    /// MIME type of `contents`
    pub mime_type: &'static str,
    /// File contents
    pub contents: String,
}

/// Export a spec in the requested format
///
/// # Errors
///
/// Only the data-document format can fail, and only on serialization errors.
pub fn export(spec: &StyleSpec, format: ExportFormat) -> Result<ExportPayload> {
    let contents = match format {
        ExportFormat::Json => data_document(spec)?,
        ExportFormat::Css => stylesheet(spec),
        ExportFormat::Html => page(spec),
    };
    Ok(ExportPayload {
        file_name: format.file_name(),
        mime_type: format.mime_type(),
        contents,
    })
}
