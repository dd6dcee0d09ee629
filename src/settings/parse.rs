//! `settings.conf` parsing.

use crate::error::{Error, Result};
use crate::render::{Color, Highlight};
use crate::settings::Settings;
use crate::util::config::{parse_bool, parse_key_value, skip_comment_or_empty};
use tracing::{debug, warn};

/// What: Parse `settings.conf` content on top of the defaults.
///
/// Inputs:
/// - `content`: File content.
/// - `strict`: Whether an invalid value is an error instead of a warning.
///
/// Output:
/// - `Ok(Settings)` with every recognized key applied.
///
/// # Errors
/// - Returns `Error::Config` for an invalid value when `strict` is set.
///
/// Details:
/// - Unknown keys are ignored.
/// - The first `highlight` line replaces the default highlights; later ones are appended.
pub fn parse_settings(content: &str, strict: bool) -> Result<Settings> {
    let mut settings = Settings::default();
    let mut highlights_seen = false;
    for (idx, line) in content.lines().enumerate() {
        if skip_comment_or_empty(line) {
            continue;
        }
        let Some((key, val)) = parse_key_value(line) else {
            debug!(line = idx + 1, "ignoring settings line without '='");
            continue;
        };
        if let Err(msg) = apply(&mut settings, &key, &val, &mut highlights_seen) {
            let msg = format!("line {}: {msg}", idx + 1);
            if strict {
                return Err(Error::Config(msg));
            }
            warn!(error = %msg, "ignoring invalid setting");
        }
    }
    Ok(settings)
}

/// Apply one `key = value` pair, reporting an invalid value as a message.
fn apply(
    settings: &mut Settings,
    key: &str,
    val: &str,
    highlights_seen: &mut bool,
) -> std::result::Result<(), String> {
    match key {
        "url" => settings.url = non_empty(key, val)?,
        "user_agent" => settings.user_agent = non_empty(key, val)?,
        "connect_timeout_secs" => settings.connect_timeout_secs = seconds(key, val)?,
        "timeout_secs" => settings.timeout_secs = seconds(key, val)?,
        "suppress_classes" => {
            settings.layout.suppress_classes = val
                .split(',')
                .map(str::trim)
                .filter(|c| !c.is_empty())
                .map(str::to_string)
                .collect();
        }
        "news_class" => settings.layout.news_class = non_empty(key, val)?,
        "timestamp_class" => settings.layout.timestamp_class = non_empty(key, val)?,
        "ignored_tag" => settings.layout.ignored_tag = non_empty(key, val)?.to_ascii_lowercase(),
        "strict_markup" => {
            settings.strict_markup =
                parse_bool(val).ok_or_else(|| format!("{key}: expected a boolean, got '{val}'"))?;
        }
        "date_color" => settings.date_color = val.parse::<Color>()?,
        "highlight" => {
            let highlight = parse_highlight(val)?;
            if !*highlights_seen {
                settings.highlights.clear();
                *highlights_seen = true;
            }
            settings.highlights.push(highlight);
        }
        other => debug!(key = other, "unknown settings key"),
    }
    Ok(())
}

/// What: Parse a `KEYWORD:color` highlight entry.
///
/// Details:
/// - Splits on the last `:` so keywords may contain colons.
fn parse_highlight(val: &str) -> std::result::Result<Highlight, String> {
    let (keyword, color) = val
        .rsplit_once(':')
        .ok_or_else(|| format!("highlight: expected KEYWORD:color, got '{val}'"))?;
    let keyword = keyword.trim();
    if keyword.is_empty() {
        return Err("highlight: keyword is empty".to_string());
    }
    Ok(Highlight {
        keyword: keyword.to_string(),
        color: color.parse()?,
    })
}

/// Reject empty values for keys that need one.
fn non_empty(key: &str, val: &str) -> std::result::Result<String, String> {
    if val.is_empty() {
        Err(format!("{key}: value must not be empty"))
    } else {
        Ok(val.to_string())
    }
}

/// Parse a positive number of seconds.
fn seconds(key: &str, val: &str) -> std::result::Result<u64, String> {
    match val.parse::<u64>() {
        Ok(v) if v > 0 => Ok(v),
        _ => Err(format!("{key}: expected a positive number of seconds, got '{val}'")),
    }
}
