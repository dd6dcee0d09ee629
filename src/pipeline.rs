//! End-to-end rendering: HTML in, display text out.

use tracing::debug;

use crate::convert::{AnnotationKind, Conversion, convert_html};
use crate::error::Result;
use crate::render::{apply_highlights, extract_summary, format_known_dates};
use crate::settings::Settings;

/// How the converted text is presented.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Keep only the `[News]` lines.
    pub summary: bool,
    /// Emit ANSI color escapes.
    pub color: bool,
}

/// What: Convert a document according to `settings`.
///
/// # Errors
/// - Returns `Error::Tokenization` when the document cannot be tokenized.
pub fn convert_document(html: &str, settings: &Settings) -> Result<Conversion> {
    convert_html(html, &settings.layout, settings.strict_markup)
}

/// What: Apply date formatting, the summary filter and highlighting to converted text.
///
/// Inputs:
/// - `conversion`: Output of the converter.
/// - `settings`: Date color and highlight list.
/// - `options`: Summary and color switches.
///
/// Output:
/// - Final display text.
///
/// Details:
/// - Summary lines are picked on uncolored text, so a highlight overlapping `[News]` cannot
///   hide them; only the kept lines are highlighted.
#[must_use]
pub fn present(conversion: &Conversion, settings: &Settings, options: RenderOptions) -> String {
    let dates: Vec<&str> = conversion
        .annotations
        .iter()
        .filter(|a| a.kind == AnnotationKind::Date)
        .map(|a| a.text.as_str())
        .collect();
    let text = format_known_dates(
        &conversion.text,
        &dates,
        options.color.then_some(settings.date_color),
    );
    let text = if options.summary {
        let summary = extract_summary(&text);
        debug!(lines = summary.lines().count(), "summary extracted");
        summary
    } else {
        text
    };
    if options.color {
        apply_highlights(&text, &settings.highlights)
    } else {
        text
    }
}

/// What: Convert and present a document in one step.
///
/// # Errors
/// - Returns `Error::Tokenization` when the document cannot be tokenized.
pub fn render_document(html: &str, settings: &Settings, options: RenderOptions) -> Result<String> {
    let conversion = convert_document(html, settings)?;
    Ok(present(&conversion, settings, options))
}

/// What: Serialize the structured fields of a conversion as pretty JSON.
///
/// # Errors
/// - Returns `Error::Serialize` if serialization fails.
pub fn annotations_json(conversion: &Conversion) -> Result<String> {
    Ok(serde_json::to_string_pretty(&conversion.annotations)?)
}
