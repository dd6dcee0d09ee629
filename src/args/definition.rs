//! Command-line argument definition.

use std::path::PathBuf;

use clap::Parser;

/// artix-news - Read the Artix Linux news page as plain terminal text
#[derive(Parser, Debug)]
#[command(name = "artix-news")]
#[command(version)]
#[command(about = "Read the Artix Linux news page as plain terminal text", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
pub struct Args {
    /// Only print the news headlines (lines marked [News])
    #[arg(short, long)]
    pub summary: bool,

    /// Print the extracted news and date fields as JSON
    #[arg(long, conflicts_with = "summary")]
    pub json: bool,

    /// Convert a local HTML file instead of fetching the page
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Fetch this URL instead of the configured one
    #[arg(long)]
    pub url: Option<String>,

    /// Read settings from this file (default: ~/.config/artix-news/settings.conf)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Set the logging level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Enable verbose output (equivalent to --log-level debug)
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::Args;
    use clap::Parser;

    #[test]
    /// What: Flags map onto the argument struct and `--json` excludes `--summary`.
    ///
    /// Inputs:
    /// - `-s -i page.html --no-color`, then `--json --summary`.
    ///
    /// Output:
    /// - Parsed fields for the first; a usage error for the second.
    fn args_parse_and_conflict() {
        let args = Args::try_parse_from(["artix-news", "-s", "-i", "page.html", "--no-color"])
            .expect("valid arguments");
        assert!(args.summary);
        assert!(args.no_color);
        assert!(!args.json);
        assert_eq!(
            args.input.as_deref(),
            Some(std::path::Path::new("page.html"))
        );
        assert_eq!(args.log_level, "info");

        assert!(Args::try_parse_from(["artix-news", "--json", "--summary"]).is_err());
    }
}
