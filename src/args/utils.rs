//! Shared utilities for argument processing.

/// What: Determine the log level based on command-line arguments.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - Log level string (trace, debug, info, warn, error).
///
/// Details:
/// - Verbose flag overrides `log_level` argument.
#[must_use]
pub fn determine_log_level(args: &crate::args::Args) -> String {
    if args.verbose {
        "debug".to_string()
    } else {
        args.log_level.clone()
    }
}

/// What: Decide whether ANSI colors should be written.
///
/// Inputs:
/// - `args`: Parsed command-line arguments.
///
/// Output:
/// - `false` with `--no-color` or when `NO_COLOR` is set, `true` otherwise.
#[must_use]
pub fn use_color(args: &crate::args::Args) -> bool {
    !args.no_color && std::env::var_os("NO_COLOR").is_none()
}
