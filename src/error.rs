//! Error taxonomy shared by the fetch, conversion and configuration layers.

use std::path::PathBuf;

/// Result type alias used throughout the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// What: Every failure the news pipeline can surface to its caller.
///
/// Details:
/// - Parse-class variants (`Tokenization`, `Decode`) mean the document itself was unusable.
/// - Fetch-class variants (`Fetch`, `HttpStatus`) come from the network collaborator and are
///   passed through unmodified; nothing is retried.
/// - Unmatched closing tags are not an error at all, the converter recovers from them.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The markup could not be tokenized into a usable event stream.
    #[error("tokenization failed: {0}")]
    Tokenization(String),
    /// The document bytes were not valid UTF-8.
    #[error("document is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),
    /// Transport-level failure while requesting the page.
    #[error("fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),
    /// The server answered, but not with `200 OK`.
    #[error("fetch failed: {url} answered with status {status}")]
    HttpStatus {
        /// Requested URL.
        url: String,
        /// Status code returned by the server.
        status: u16,
    },
    /// Reading a local file (input document or settings) failed.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
    /// A settings value could not be interpreted.
    #[error("invalid setting: {0}")]
    Config(String),
    /// Annotations could not be serialized.
    #[error("cannot serialize annotations: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    /// What: Tell parse failures apart from fetch/io failures.
    ///
    /// Output:
    /// - `true` for `Tokenization` and `Decode`.
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(self, Self::Tokenization(_) | Self::Decode(_))
    }

    /// What: Process exit status for this failure.
    ///
    /// Output:
    /// - `2` for parse failures, `1` for everything else.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        if self.is_parse_failure() { 2 } else { 1 }
    }
}
