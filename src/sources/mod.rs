//! Document sources: the news page over HTTP or a local HTML file.

mod fetch;

use std::path::Path;

use crate::error::{Error, Result};

pub use fetch::{build_client, fetch_news_page, fetch_page};

/// What: Read a local HTML document.
///
/// Inputs:
/// - `path`: File to read.
///
/// Output:
/// - The file content as text.
///
/// # Errors
/// - Returns `Error::Io` when the file cannot be read.
/// - Returns `Error::Decode` when it is not UTF-8.
pub fn read_document(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), bytes = bytes.len(), "read local document");
    Ok(String::from_utf8(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::read_document;
    use crate::error::Error;
    use crate::settings::Settings;

    #[test]
    /// What: Local documents are read as UTF-8 and bad bytes are a decode failure.
    ///
    /// Inputs:
    /// - One UTF-8 file, one file with invalid bytes, one missing path.
    ///
    /// Output:
    /// - Content, `Error::Decode`, `Error::Io` respectively.
    fn read_document_variants() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let good = dir.path().join("news.html");
        std::fs::write(&good, "<p>caf\u{e9}</p>").expect("write html");
        assert_eq!(read_document(&good).expect("readable"), "<p>caf\u{e9}</p>");

        let bad = dir.path().join("bad.html");
        std::fs::write(&bad, [0x3c, 0xff, 0x3e]).expect("write bytes");
        let err = read_document(&bad).expect_err("invalid utf-8");
        assert!(matches!(err, Error::Decode(_)));
        assert!(err.is_parse_failure());

        let err = read_document(&dir.path().join("missing.html")).expect_err("missing file");
        assert!(matches!(err, Error::Io { .. }));
        assert!(!err.is_parse_failure());
    }

    #[tokio::test]
    /// What: A refused connection surfaces as a fetch failure, not a parse failure.
    ///
    /// Inputs:
    /// - Settings pointing at a loopback port with no listener.
    ///
    /// Output:
    /// - A fetch-class error with exit code 1 (`Error::Fetch`, or `Error::HttpStatus` when a
    ///   system proxy answers instead).
    async fn fetch_refused_connection_is_fetch_error() {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
        let port = listener.local_addr().expect("local addr").port();
        drop(listener);

        let settings = Settings {
            url: format!("http://127.0.0.1:{port}/news.php"),
            connect_timeout_secs: 2,
            timeout_secs: 2,
            ..Settings::default()
        };
        let err = super::fetch_news_page(&settings)
            .await
            .expect_err("nothing listens on the port");
        assert!(
            matches!(err, Error::Fetch(_) | Error::HttpStatus { .. }),
            "{err:?}"
        );
        assert!(!err.is_parse_failure());
        assert_eq!(err.exit_code(), 1);
    }
}
