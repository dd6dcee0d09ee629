//! Configuration file parsing utilities.
//!
//! Helpers for the `key = value` format used by `settings.conf`: comment skipping,
//! key-value splitting and boolean interpretation.

/// What: Check if a line should be skipped (empty or comment).
///
/// Inputs:
/// - `line`: Line to check
///
/// Output:
/// - `true` if the line should be skipped, `false` otherwise
///
/// Details:
/// - Skips empty lines and lines starting with `#`, `//`, or `;`
#[must_use]
pub fn skip_comment_or_empty(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty()
        || trimmed.starts_with('#')
        || trimmed.starts_with("//")
        || trimmed.starts_with(';')
}

/// What: Parse a key-value pair from a line.
///
/// Inputs:
/// - `line`: Line containing key=value format
///
/// Output:
/// - `Some((key, value))` if parsing succeeds, `None` otherwise
///
/// Details:
/// - Splits on the first `=` character.
/// - The key is lowercased with `.`, `-` and spaces folded into `_`.
/// - The value is trimmed and loses any inline ` # comment`.
#[must_use]
pub fn parse_key_value(line: &str) -> Option<(String, String)> {
    let (raw_key, raw_val) = line.trim().split_once('=')?;
    let key = raw_key.trim().to_lowercase().replace(['.', '-', ' '], "_");
    if key.is_empty() {
        return None;
    }
    Some((key, strip_inline_comment(raw_val).to_string()))
}

/// What: Remove an inline comment from a value.
///
/// Details:
/// - A comment starts at a `#` preceded by whitespace, so URLs and `KEY:#fff`-like values survive.
#[must_use]
pub fn strip_inline_comment(value: &str) -> &str {
    let cut = value
        .char_indices()
        .find(|&(i, c)| {
            c == '#'
                && i > 0
                && value[..i].chars().next_back().is_some_and(char::is_whitespace)
        })
        .map_or(value.len(), |(i, _)| i);
    value[..cut].trim()
}

/// Interpret `true`/`1`/`yes`/`on` and `false`/`0`/`no`/`off` (case-insensitive).
#[must_use]
pub fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Comment lines and blanks are skipped, assignments are split and normalized.
    ///
    /// Inputs:
    /// - Comment styles `#`, `//`, `;`, a blank line and `News-Class = entry # note`.
    ///
    /// Output:
    /// - Skips the first group; key `news_class`, value `entry`.
    fn config_lines_are_classified_and_split() {
        for line in ["# c", "  // c", "; c", "   "] {
            assert!(skip_comment_or_empty(line));
        }
        assert!(!skip_comment_or_empty("url = x"));
        assert_eq!(
            parse_key_value("News-Class = entry # note"),
            Some(("news_class".to_string(), "entry".to_string()))
        );
        assert_eq!(parse_key_value("no assignment"), None);
        assert_eq!(parse_key_value(" = value"), None);
    }

    #[test]
    fn inline_comments_keep_urls() {
        assert_eq!(
            strip_inline_comment(" https://artixlinux.org/news.php  # default"),
            "https://artixlinux.org/news.php"
        );
        assert_eq!(strip_inline_comment("a#b"), "a#b");
    }

    #[test]
    fn booleans() {
        assert_eq!(parse_bool("Yes"), Some(true));
        assert_eq!(parse_bool("off"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
    }
}
