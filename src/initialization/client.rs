//! HTTP client initialization.

use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::Config;

/// Initializes the HTTP client used for all page fetches.
///
/// Creates a `reqwest::Client` configured with:
/// - the configured User-Agent header (fixed for the whole crawl)
/// - the configured per-request timeout
/// - redirect following enabled (reqwest's default of up to 10 hops)
///
/// The client is cheap to clone and internally pooled, so one client serves
/// every concurrent task.
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(config: &Config) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(config.user_agent.clone())
        .build()
}
