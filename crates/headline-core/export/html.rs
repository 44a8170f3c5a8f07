//! Standalone page export
//!
//! Embeds the stylesheet in a minimal HTML document wrapping the headline
//! text in a heading element. The text is escaped; the stylesheet is emitted
//! as-is.

use crate::export::css::stylesheet;
use crate::spec::StyleSpec;

/// Escape text for safe inclusion in HTML content
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

/// Produce a standalone page for a spec
#[must_use]
pub fn page(spec: &StyleSpec) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html lang=\"en\">\n\
         <head>\n\
         <meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>Headline</title>\n\
         <style>\n{}</style>\n\
         </head>\n\
         <body>\n\
         <h1 class=\"headline\">{}</h1>\n\
         </body>\n\
         </html>\n",
        stylesheet(spec),
        escape_html(&spec.text)
    )
}
