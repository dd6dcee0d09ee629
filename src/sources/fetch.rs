//! HTTP retrieval of the news page.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, HeaderMap, HeaderValue};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::settings::Settings;

/// What: Build the HTTP client used for the page request.
///
/// Inputs:
/// - `settings`: Provides the user agent and timeouts.
///
/// Output:
/// - A configured `reqwest::Client`.
///
/// # Errors
/// - Returns `Error::Fetch` when the client cannot be built (e.g. TLS backend failure).
pub fn build_client(settings: &Settings) -> Result<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(
        ACCEPT,
        HeaderValue::from_static("text/html,application/xhtml+xml;q=0.9,*/*;q=0.8"),
    );
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    let client = reqwest::Client::builder()
        .connect_timeout(Duration::from_secs(settings.connect_timeout_secs))
        .timeout(Duration::from_secs(settings.timeout_secs))
        .user_agent(settings.user_agent.as_str())
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// What: GET `url` and return its body as text.
///
/// Inputs:
/// - `client`: Client from [`build_client`].
/// - `url`: Page to request.
///
/// Output:
/// - `Ok(String)` with the UTF-8 body of a `200 OK` response.
///
/// # Errors
/// - Returns `Error::Fetch` on transport failures (DNS, connect, timeout, body read).
/// - Returns `Error::HttpStatus` when the server answers with anything but `200`.
/// - Returns `Error::Decode` when the body is not UTF-8.
///
/// Details:
/// - One attempt only; failures go back to the caller unchanged.
pub async fn fetch_page(client: &reqwest::Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await.map_err(|e| {
        warn!(url, error = %e, "news page request failed");
        e
    })?;
    let status = response.status();
    if status != StatusCode::OK {
        warn!(url, status = status.as_u16(), "unexpected status for news page");
        return Err(Error::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }
    let bytes = response.bytes().await?;
    info!(url, bytes = bytes.len(), "fetched news page");
    Ok(String::from_utf8(bytes.to_vec())?)
}

/// Fetch the configured news page.
///
/// # Errors
/// - See [`build_client`] and [`fetch_page`].
pub async fn fetch_news_page(settings: &Settings) -> Result<String> {
    let client = build_client(settings)?;
    fetch_page(&client, &settings.url).await
}
