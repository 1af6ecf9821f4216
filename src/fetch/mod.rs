//! HTTP fetching for crawl tasks.
//!
//! One function, one contract: GET a URL and hand back its HTML body, or a
//! [`FetchError`] the caller treats as "skip this URL". The client's
//! User-Agent and timeout are fixed at initialization
//! (see [`crate::initialization::init_client`]).

use log::debug;
use reqwest::header::CONTENT_TYPE;

use crate::error_handling::FetchError;

/// Fetches a URL and returns its HTML body.
///
/// # Errors
///
/// - [`FetchError::Network`] on any transport failure (connect, DNS,
///   timeout, body read)
/// - [`FetchError::HttpStatus`] when the response status is 400 or above
/// - [`FetchError::ContentType`] when the response Content-Type does not
///   declare HTML
///
/// All of these are per-URL and non-fatal; the crawl skips the URL and moves
/// on. Nothing here retries.
pub async fn fetch_html(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    debug!("GET {url}");
    let response = client.get(url).send().await?;

    let status = response.status();
    if status.is_client_error() || status.is_server_error() {
        return Err(FetchError::HttpStatus(status));
    }

    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    if !content_type.contains("text/html") {
        return Err(FetchError::ContentType(content_type));
    }

    Ok(response.text().await?)
}
