// Shared test helpers for building mock sites and crawl configs.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use site_crawler::{Config, LogFormat, LogLevel};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Builds a minimal HTML page with the given heading and extra body markup.
#[allow(dead_code)] // Used by other test files
pub fn html_page(h1: &str, body: &str) -> String {
    format!("<html><body><h1>{h1}</h1>{body}</body></html>")
}

/// Renders a list of hrefs as anchor tags.
#[allow(dead_code)] // Used by other test files
pub fn links(hrefs: &[&str]) -> String {
    hrefs
        .iter()
        .map(|href| format!(r#"<a href="{href}">{href}</a>"#))
        .collect()
}

/// Mounts an HTML page at `route` on the mock server.
#[allow(dead_code)] // Used by other test files
pub async fn mount_page(server: &MockServer, route: &str, html: String) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/html; charset=utf-8")
                .set_body_string(html),
        )
        .mount(server)
        .await;
}

/// Creates a crawl config pointed at a test server.
/// Error-level logging keeps test output quiet.
#[allow(dead_code)] // Used by other test files
pub fn create_test_config(base_url: &str, max_concurrency: usize) -> Config {
    Config {
        base_url: base_url.to_string(),
        max_concurrency,
        timeout_seconds: 5,
        user_agent: "site_crawler_test/1.0".to_string(),
        log_level: LogLevel::Error,
        log_format: LogFormat::Plain,
        event_callback: None,
        cancel: None,
    }
}
