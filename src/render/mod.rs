//! Post-processing passes over converted text: date brackets, keyword colors, summary.

use std::fmt;
use std::str::FromStr;

use crate::convert::DATE_MARKER;

/// ANSI sequence restoring the default terminal style.
pub const RESET: &str = "\x1b[0m";

/// Terminal colors available for highlighting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    /// `ESC[32m`
    Green,
    /// `ESC[34m`
    Blue,
    /// `ESC[31m`
    Red,
}

impl Color {
    /// Escape sequence switching the foreground to this color.
    #[must_use]
    pub const fn escape(self) -> &'static str {
        match self {
            Self::Green => "\x1b[32m",
            Self::Blue => "\x1b[34m",
            Self::Red => "\x1b[31m",
        }
    }

    /// Wrap `text` in this color and a reset.
    #[must_use]
    pub fn paint(self, text: &str) -> String {
        format!("{}{text}{RESET}", self.escape())
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "green" => Ok(Self::Green),
            "blue" => Ok(Self::Blue),
            "red" => Ok(Self::Red),
            other => Err(format!("unknown color '{other}' (expected green, blue or red)")),
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Green => "green",
            Self::Blue => "blue",
            Self::Red => "red",
        })
    }
}

/// A keyword to color wherever it appears in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Highlight {
    /// Literal text to match.
    pub keyword: String,
    /// Color wrapped around every match.
    pub color: Color,
}

/// What: Rewrite every `[Date] <content>` into a bracketed, optionally colored date.
///
/// Inputs:
/// - `text`: Converted output.
/// - `color`: Color for the date content; `None` keeps the brackets without escapes.
///
/// Output:
/// - Text where each marker and its content become ` [<content>]`.
///
/// Details:
/// - Content runs to the end of the marker's line, trailing whitespace excluded.
/// - A marker with no content on its line is left untouched.
#[must_use]
pub fn format_dates(text: &str, color: Option<Color>) -> String {
    format_known_dates(text, &[], color)
}

/// What: Like [`format_dates`], but bracket exactly the known date texts.
///
/// Inputs:
/// - `text`: Converted output.
/// - `dates`: Date texts in document order, as recorded by the converter.
/// - `color`: Color for the date content.
///
/// Output:
/// - Text where each marker and its date become ` [<date>]`; text following the date on the
///   same line stays outside the brackets.
///
/// Details:
/// - Markers are matched against `dates` in order. A marker whose content does not start with
///   the next known date falls back to the end-of-line rule.
#[must_use]
pub fn format_known_dates(text: &str, dates: &[&str], color: Option<Color>) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut known = dates.iter().filter(|d| !d.is_empty()).peekable();
    while let Some(pos) = rest.find(DATE_MARKER) {
        out.push_str(&rest[..pos]);
        let after = &rest[pos + DATE_MARKER.len()..];
        let content = match known.peek().copied() {
            Some(date) if after.starts_with(*date) => {
                known.next();
                &after[..date.len()]
            }
            _ => {
                let line_end = after.find('\n').unwrap_or(after.len());
                after[..line_end].trim_end()
            }
        };
        if content.is_empty() {
            out.push_str(DATE_MARKER);
        } else {
            out.push_str(" [");
            match color {
                Some(c) => out.push_str(&c.paint(content)),
                None => out.push_str(content),
            }
            out.push(']');
        }
        rest = &after[content.len()..];
    }
    out.push_str(rest);
    out
}

/// What: Wrap every occurrence of `keyword` in `color`.
///
/// Inputs:
/// - `text`: Text to scan.
/// - `keyword`: Literal to match; an empty keyword changes nothing.
/// - `color`: Color to apply.
///
/// Output:
/// - A copy of `text` with each match colored.
///
/// Details:
/// - Plain substitution: applying the same keyword twice wraps it twice.
#[must_use]
pub fn colorize(text: &str, keyword: &str, color: Color) -> String {
    if keyword.is_empty() {
        return text.to_string();
    }
    text.replace(keyword, &color.paint(keyword))
}

/// What: Apply a list of highlights, each distinct keyword at most once.
///
/// Inputs:
/// - `text`: Text to scan.
/// - `highlights`: Keyword/color pairs; on duplicates the first entry wins.
///
/// Output:
/// - Colored text.
#[must_use]
pub fn apply_highlights(text: &str, highlights: &[Highlight]) -> String {
    let mut seen: Vec<&str> = Vec::new();
    let mut out = text.to_string();
    for h in highlights {
        if seen.contains(&h.keyword.as_str()) {
            continue;
        }
        seen.push(&h.keyword);
        out = colorize(&out, &h.keyword, h.color);
    }
    out
}

/// Keep only the lines carrying a `[News]` marker.
#[must_use]
pub fn extract_summary(text: &str) -> String {
    text.lines()
        .filter(|line| line.contains("[News]"))
        .collect::<Vec<_>>()
        .join("\n")
}
