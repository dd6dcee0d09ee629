//! HTML-to-text conversion engine.
//!
//! A [`Converter`] consumes the open/close/text events of one document and renders them
//! into plain text, tagging news paragraphs with `[News]` and timestamps with `[Date]`.

mod buffer;
mod stack;
mod tag;
mod tokens;

use serde::Serialize;
use tracing::debug;

use crate::error::Result;
use buffer::{OutputBuffer, indent_lines, squeeze_whitespace};
use stack::ElementStack;
use tag::TagKind;

pub use tokens::{Token, tokenize};

/// Marker opening the summary line of a news entry.
pub const NEWS_MARKER: &str = "[News] ";
/// Marker preceding the text of a timestamp anchor.
pub const DATE_MARKER: &str = "[Date] ";
/// Separator emitted around links and between a marker and its entry text.
const SEPARATOR: &str = " ";
/// List item prefix.
const BULLET: &str = " \u{2022} ";

/// Structural conventions of the news page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageLayout {
    /// `div` classes whose whole subtree is left out of the output.
    pub suppress_classes: Vec<String>,
    /// `div` class wrapping the paragraphs of one news entry.
    pub news_class: String,
    /// `div` class wrapping the anchor that carries an entry date.
    pub timestamp_class: String,
    /// Tag whose text is always discarded.
    pub ignored_tag: String,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            suppress_classes: vec!["right".to_string(), "sidebar".to_string()],
            news_class: "news".to_string(),
            timestamp_class: "timestamp".to_string(),
            ignored_tag: "h0".to_string(),
        }
    }
}

impl PageLayout {
    /// Whether a `div` with this class starts a suppressed subtree.
    #[must_use]
    pub fn suppresses(&self, class: &str) -> bool {
        self.suppress_classes.iter().any(|c| c == class)
    }
}

/// Kind of structured field recognized during conversion.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationKind {
    /// First paragraph of a `div.news` entry.
    News,
    /// Anchor text inside a `div.timestamp`.
    Date,
}

/// One structured field, in document order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Annotation {
    /// Field kind.
    pub kind: AnnotationKind,
    /// Field text without its marker.
    pub text: String,
}

/// Result of converting one document.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Conversion {
    /// Rendered plain text with embedded markers.
    pub text: String,
    /// Structured fields found along the way.
    pub annotations: Vec<Annotation>,
}

/// What: Stateful streaming converter for a single document.
///
/// Details:
/// - Build one instance per document with [`Converter::new`], feed it every token in order,
///   then call [`Converter::finish`].
/// - The context stack is pushed on every opening tag, even inside suppressed subtrees, so it
///   mirrors the nesting of the source.
pub struct Converter<'a> {
    /// Page conventions driving suppression and extraction.
    layout: &'a PageLayout,
    /// Currently open elements.
    stack: ElementStack,
    /// Rendered text.
    out: OutputBuffer,
    /// Stack depth of the element that started the current suppressed subtree.
    suppress_root: Option<usize>,
    /// Inside `<pre>`.
    inside_pre: bool,
    /// Structured fields collected so far.
    annotations: Vec<Annotation>,
    /// Closing tags seen while the stack was empty.
    unmatched_closes: usize,
}

impl<'a> Converter<'a> {
    /// Create a converter for one document laid out according to `layout`.
    #[must_use]
    pub fn new(layout: &'a PageLayout) -> Self {
        Self {
            layout,
            stack: ElementStack::default(),
            out: OutputBuffer::default(),
            suppress_root: None,
            inside_pre: false,
            annotations: Vec::new(),
            unmatched_closes: 0,
        }
    }

    /// True while inside a suppressed subtree.
    #[must_use]
    pub const fn is_suppressed(&self) -> bool {
        self.suppress_root.is_some()
    }

    /// Text rendered so far.
    #[must_use]
    pub fn output(&self) -> &str {
        self.out.as_str()
    }

    /// Dispatch one token to its handler.
    pub fn feed(&mut self, token: Token) {
        match token {
            Token::Start { tag, attrs } => self.handle_start(&tag, attrs),
            Token::End { tag } => self.handle_end(&tag),
            Token::Text(data) => self.handle_text(&data),
        }
    }

    /// What: Handle an opening tag.
    ///
    /// Inputs:
    /// - `tag`: Lowercase tag name.
    /// - `attrs`: Attributes in source order.
    ///
    /// Details:
    /// - Inside a suppressed subtree only the stack is updated; a nested suppress-matching
    ///   `div` does not move the suppression root.
    pub fn handle_start(&mut self, tag: &str, attrs: Vec<(String, String)>) {
        self.stack.push(tag, attrs);
        if self.is_suppressed() {
            return;
        }
        match TagKind::of(tag) {
            TagKind::Anchor => self.out.append(SEPARATOR),
            TagKind::LineBreak => self.out.append("\n"),
            TagKind::Code => self.out.append("\n\n"),
            TagKind::Pre => self.inside_pre = true,
            TagKind::Div if self.current_div_suppresses() => {
                self.suppress_root = Some(self.stack.depth());
            }
            TagKind::ListItem => self.out.append(BULLET),
            _ => {}
        }
    }

    /// What: Handle a closing tag.
    ///
    /// Inputs:
    /// - `tag`: Lowercase tag name.
    ///
    /// Details:
    /// - Pops one frame regardless of its name; a close on an empty stack is tolerated.
    /// - Suppression ends once the frame that started it has been popped.
    pub fn handle_end(&mut self, tag: &str) {
        if self.stack.pop().is_none() {
            self.unmatched_closes += 1;
            debug!(tag, "closing tag without an open element");
        }
        if let Some(root) = self.suppress_root
            && self.stack.depth() < root
        {
            self.suppress_root = None;
        }
        if self.is_suppressed() {
            return;
        }
        match TagKind::of(tag) {
            TagKind::Paragraph | TagKind::Div => self.out.append("\n\n"),
            TagKind::Anchor => self.out.append(SEPARATOR),
            TagKind::ListItem | TagKind::List | TagKind::Code => self.out.append("\n"),
            TagKind::Pre => {
                self.inside_pre = false;
                self.out.append("\n");
            }
            _ => {}
        }
    }

    /// What: Handle character data.
    ///
    /// Inputs:
    /// - `data`: Raw text between two tags.
    ///
    /// Details:
    /// - Leading whitespace is always dropped; what remains empty is ignored.
    /// - News and timestamp patterns are recognized before generic formatting.
    /// - `pre`/`code` text keeps its layout with one tab per line; other text is squeezed.
    pub fn handle_text(&mut self, data: &str) {
        let data = data.trim_start();
        if self.is_suppressed() || data.is_empty() {
            return;
        }
        let tag = self.stack.current().map_or("", |f| f.tag.as_str());
        if tag == self.layout.ignored_tag {
            return;
        }
        let kind = TagKind::of(tag);

        if kind == TagKind::Paragraph && self.parent_is_pending_news() {
            self.emit_news(data);
            return;
        }
        if kind == TagKind::Anchor && self.parent_is_timestamp() {
            self.out.append(&format!("{DATE_MARKER}{data}"));
            self.annotate(AnnotationKind::Date, data.trim_end());
            return;
        }

        if self.inside_pre || kind == TagKind::Code {
            self.out.push_raw(&indent_lines(data));
        } else if kind == TagKind::Pre {
            self.out.append("\n");
        } else if kind != TagKind::Script {
            let squeezed = squeeze_whitespace(data);
            // No lone space at the beginning of a line.
            if squeezed != " " || !self.out.at_line_start() {
                self.out.append(&squeezed);
            }
        }
    }

    /// What: Finish the document and hand back the rendered text.
    ///
    /// Output:
    /// - The accumulated `Conversion`; the converter is consumed.
    #[must_use]
    pub fn finish(self) -> Conversion {
        debug!(
            bytes = self.out.as_str().len(),
            annotations = self.annotations.len(),
            unclosed = self.stack.depth(),
            unmatched_closes = self.unmatched_closes,
            "conversion finished"
        );
        Conversion {
            text: self.out.into_string(),
            annotations: self.annotations,
        }
    }

    /// Whether the innermost frame is a `div` whose class starts suppression.
    fn current_div_suppresses(&self) -> bool {
        self.stack
            .current()
            .and_then(|f| f.attr("class"))
            .is_some_and(|class| self.layout.suppresses(class))
    }

    /// Whether the parent is a `div.news` that has not produced its `[News]` line yet.
    fn parent_is_pending_news(&self) -> bool {
        self.stack
            .parent()
            .is_some_and(|p| p.is("div", &self.layout.news_class) && !p.emitted)
    }

    /// Whether the parent is a `div.timestamp`.
    fn parent_is_timestamp(&self) -> bool {
        self.stack
            .parent()
            .is_some_and(|p| p.is("div", &self.layout.timestamp_class))
    }

    /// Write the `[News]` line for the current paragraph and mark its entry as done.
    fn emit_news(&mut self, data: &str) {
        let squeezed = squeeze_whitespace(data);
        let text = squeezed.trim_end();
        if !self.out.at_line_start() {
            self.out.append("\n");
        }
        self.out.push_raw(NEWS_MARKER);
        self.out.push_raw(SEPARATOR);
        self.out.push_raw(text);
        if let Some(parent) = self.stack.parent_mut() {
            parent.emitted = true;
        }
        self.annotate(AnnotationKind::News, text);
    }

    /// Record a structured field.
    fn annotate(&mut self, kind: AnnotationKind, text: &str) {
        self.annotations.push(Annotation {
            kind,
            text: text.to_string(),
        });
    }
}

/// What: Run a token stream through a fresh converter.
///
/// Inputs:
/// - `tokens`: Events in document order.
/// - `layout`: Page conventions.
///
/// Output:
/// - The rendered `Conversion`.
pub fn convert_tokens<I>(tokens: I, layout: &PageLayout) -> Conversion
where
    I: IntoIterator<Item = Token>,
{
    let mut converter = Converter::new(layout);
    for token in tokens {
        converter.feed(token);
    }
    converter.finish()
}

/// What: Tokenize and convert an HTML document.
///
/// Inputs:
/// - `html`: Full document text.
/// - `layout`: Page conventions.
/// - `strict`: Treat any markup error reported by the parser as fatal.
///
/// Output:
/// - `Ok(Conversion)`; no partial output is returned on failure.
///
/// # Errors
/// - Returns `Error::Tokenization` when the document cannot be tokenized.
pub fn convert_html(html: &str, layout: &PageLayout, strict: bool) -> Result<Conversion> {
    let tokens = tokenize(html, strict)?;
    Ok(convert_tokens(tokens, layout))
}
