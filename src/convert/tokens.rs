//! Turn raw HTML into the flat open/close/text event stream the converter consumes.

use ego_tree::iter::Edge;
use scraper::{Html, Node};
use tracing::{debug, warn};

use crate::error::{Error, Result};

/// One structural event of the document, in source order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// Opening tag with its attributes in source order.
    Start {
        /// Lowercase tag name.
        tag: String,
        /// `(name, value)` pairs.
        attrs: Vec<(String, String)>,
    },
    /// Closing tag.
    End {
        /// Lowercase tag name.
        tag: String,
    },
    /// Character data between tags.
    Text(String),
}

impl Token {
    /// Shorthand for an opening tag without attributes.
    #[must_use]
    pub fn start(tag: &str) -> Self {
        Self::Start {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    /// Shorthand for an opening tag with a single `class` attribute.
    #[must_use]
    pub fn start_class(tag: &str, class: &str) -> Self {
        Self::Start {
            tag: tag.to_string(),
            attrs: vec![("class".to_string(), class.to_string())],
        }
    }

    /// Shorthand for a closing tag.
    #[must_use]
    pub fn end(tag: &str) -> Self {
        Self::End {
            tag: tag.to_string(),
        }
    }

    /// Shorthand for character data.
    #[must_use]
    pub fn text(data: &str) -> Self {
        Self::Text(data.to_string())
    }
}

/// What: Tokenize an HTML document into `Token`s.
///
/// Inputs:
/// - `html`: Full document text.
/// - `strict`: When true, any parse error reported by the HTML parser is fatal.
///
/// Output:
/// - `Ok(tokens)` in document order; `Err(Error::Tokenization)` when the markup is unusable.
///
/// # Errors
/// - Returns `Error::Tokenization` when `strict` is set and the parser reported errors.
/// - Returns `Error::Tokenization` when the input is empty or whitespace only.
///
/// Details:
/// - The document is parsed with `scraper` (html5ever) and walked with an ego-tree traversal,
///   so every `Open` edge becomes `Token::Start` and every `Close` edge becomes `Token::End`.
/// - Comments, doctypes and processing instructions produce no events.
pub fn tokenize(html: &str, strict: bool) -> Result<Vec<Token>> {
    if html.trim().is_empty() {
        warn!("refusing to tokenize an empty document");
        return Err(Error::Tokenization("document is empty".into()));
    }
    let document = Html::parse_document(html);
    if !document.errors.is_empty() {
        if strict {
            return Err(Error::Tokenization(document.errors.join("; ")));
        }
        debug!(count = document.errors.len(), "html parser recovered from markup errors");
    }

    let mut tokens = Vec::new();
    for edge in document.tree.root().traverse() {
        match edge {
            Edge::Open(node) => match node.value() {
                Node::Element(el) => tokens.push(Token::Start {
                    tag: el.name().to_string(),
                    attrs: el
                        .attrs()
                        .map(|(k, v)| (k.to_string(), v.to_string()))
                        .collect(),
                }),
                Node::Text(t) => tokens.push(Token::Text((**t).to_string())),
                _ => {}
            },
            Edge::Close(node) => {
                if let Node::Element(el) = node.value() {
                    tokens.push(Token::End {
                        tag: el.name().to_string(),
                    });
                }
            }
        }
    }
    debug!(tokens = tokens.len(), "tokenized document");
    Ok(tokens)
}
