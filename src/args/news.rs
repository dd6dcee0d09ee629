//! Command-line news functionality.

use artix_news::Result;
use artix_news::pipeline::{RenderOptions, annotations_json, convert_document, present};
use artix_news::settings::load_settings;
use artix_news::sources::{fetch_news_page, read_document};

use crate::args::{Args, use_color};

/// What: Produce the text the CLI prints for the given arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `Ok(String)` with the full text, the summary, or the JSON annotations.
///
/// # Errors
/// - Settings, fetch/read and tokenization failures are returned unchanged; nothing is
///   printed for them.
///
/// Details:
/// - `--input` skips the network entirely.
/// - `--url` overrides the configured page.
pub async fn run(args: &Args) -> Result<String> {
    let mut settings = load_settings(args.config.as_deref())?;
    if let Some(url) = &args.url {
        settings.url.clone_from(url);
    }

    let html = match &args.input {
        Some(path) => read_document(path)?,
        None => fetch_news_page(&settings).await?,
    };
    let conversion = convert_document(&html, &settings)?;
    tracing::info!(
        annotations = conversion.annotations.len(),
        summary = args.summary,
        json = args.json,
        "news page converted"
    );

    if args.json {
        return annotations_json(&conversion);
    }
    let options = RenderOptions {
        summary: args.summary,
        color: use_color(args),
    };
    Ok(present(&conversion, &settings, options))
}
