//! User settings: page URL, HTTP identity, page layout and colors.

use std::fs;
use std::path::Path;

use tracing::{info, warn};

use crate::convert::PageLayout;
use crate::error::{Error, Result};
use crate::render::{Color, Highlight};

mod parse;
mod paths;

pub use parse::parse_settings;
pub use paths::{config_dir, logs_dir};

/// Page fetched when no URL is configured.
pub const DEFAULT_URL: &str = "https://artixlinux.org/news.php";
/// User agent sent with the page request.
pub const DEFAULT_USER_AGENT: &str = "Chrome/72.0.3626.109";

/// Everything the fetch, conversion and post-processing steps can be configured with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    /// News page URL.
    pub url: String,
    /// `User-Agent` header value.
    pub user_agent: String,
    /// TCP connect timeout.
    pub connect_timeout_secs: u64,
    /// Whole-request timeout.
    pub timeout_secs: u64,
    /// Structural conventions of the page.
    pub layout: PageLayout,
    /// Fail on any markup error the HTML parser reports.
    pub strict_markup: bool,
    /// Color of reformatted dates.
    pub date_color: Color,
    /// Keywords colored in the final text.
    pub highlights: Vec<Highlight>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
            layout: PageLayout::default(),
            strict_markup: false,
            date_color: Color::Green,
            highlights: vec![Highlight {
                keyword: "[News]".to_string(),
                color: Color::Blue,
            }],
        }
    }
}

/// What: Load settings from an explicit file or the XDG location.
///
/// Inputs:
/// - `explicit`: Path given on the command line, if any.
///
/// Output:
/// - `Ok(Settings)`; defaults when no file exists.
///
/// # Errors
/// - Returns `Error::Io` when the explicit file cannot be read.
/// - Returns `Error::Config` when the explicit file holds an invalid value.
///
/// Details:
/// - A discovered (not explicit) file is parsed leniently: read failures and bad values
///   are logged and the defaults kept.
pub fn load_settings(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        let content = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = parse_settings(&content, true)?;
        info!(path = %path.display(), "settings loaded");
        return Ok(settings);
    }

    let Some(path) = paths::resolve_settings_config_path() else {
        return Ok(Settings::default());
    };
    match fs::read_to_string(&path) {
        Ok(content) => {
            let settings = parse_settings(&content, false)?;
            info!(path = %path.display(), "settings loaded");
            Ok(settings)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read settings; using defaults");
            Ok(Settings::default())
        }
    }
}
