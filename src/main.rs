//! artix-news binary entrypoint kept minimal. The conversion engine lives in the library.

mod args;

use std::fmt;
use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use tracing_appender::non_blocking::WorkerGuard;

/// Log timestamp formatter (`YYYY-MM-DD-T HH:MM:SS`, local time).
struct NewsTimer;

impl tracing_subscriber::fmt::time::FormatTime for NewsTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let ts = chrono::Local::now().format("%Y-%m-%d-T %H:%M:%S").to_string();
        w.write_str(&ts)
    }
}

/// Open `path` for appending behind a non-blocking writer.
///
/// Records still queued are flushed when the returned guard is dropped.
fn open_log_writer(
    path: &Path,
) -> std::io::Result<(tracing_appender::non_blocking::NonBlocking, WorkerGuard)> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;
    Ok(tracing_appender::non_blocking(file))
}

/// What: Install the tracing subscriber.
///
/// Inputs:
/// - `level`: Default filter when `RUST_LOG` is not set.
///
/// Output:
/// - The log file's worker guard; `None` when logging fell back to stderr.
///
/// Details:
/// - Logs go to `~/.config/artix-news/logs/artix-news.log`; stderr is the fallback when the
///   file cannot be opened, so stdout only ever carries the news text.
fn init_logging(level: &str) -> Option<WorkerGuard> {
    let mut log_path = artix_news::settings::logs_dir();
    log_path.push("artix-news.log");
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));
    match open_log_writer(&log_path) {
        Ok((non_blocking, guard)) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(NewsTimer)
                .init();
            tracing::info!(path = %log_path.display(), "logging initialized");
            Some(guard)
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(std::io::stderr)
                .with_timer(NewsTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
            None
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = args::Args::parse();
    // Dropped when `main` returns, which flushes the log file before the process exits.
    let _log_guard = init_logging(&args::determine_log_level(&args));
    tracing::info!(summary = args.summary, input = ?args.input, "artix-news starting");

    match args::news::run(&args).await {
        Ok(out) => {
            println!("{out}");
            tracing::info!("artix-news finished");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::error!(error = %err, parse_failure = err.is_parse_failure(), "artix-news failed");
            eprintln!("artix-news: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

#[cfg(test)]
mod tests {
    /// What: FormatTime impl writes a non-empty timestamp without panicking
    ///
    /// - Input: Tracing writer buffer
    /// - Output: Buffer receives some content
    #[test]
    fn news_timer_formats_time_without_panic() {
        use tracing_subscriber::fmt::time::FormatTime;
        let mut buf = String::new();
        let mut writer = tracing_subscriber::fmt::format::Writer::new(&mut buf);
        let t = super::NewsTimer;
        let _ = t.format_time(&mut writer);
        assert!(buf.contains("-T "));
    }

    /// What: Dropping the worker guard flushes queued records to the log file
    ///
    /// - Input: An error record written through the non-blocking file writer
    /// - Output: The record is in the file once the guard is gone
    #[test]
    fn dropping_log_guard_flushes_error_record() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("artix-news.log");
        let (writer, guard) = super::open_log_writer(&path).expect("open log file");
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(writer)
            .with_timer(super::NewsTimer)
            .finish();
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(error = "boom", "artix-news failed");
        });
        drop(guard);
        let content = std::fs::read_to_string(&path).expect("read log file");
        assert!(content.contains("artix-news failed"), "{content:?}");
        assert!(content.contains("boom"));
    }
}
