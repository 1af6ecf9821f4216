//! Configuration types and CLI options.
//!
//! This module defines the library-level `Config` struct, the clap-derived
//! CLI options (`Opt`), and the enums shared between them.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use tokio_util::sync::CancellationToken;

use crate::config::constants::{
    DEFAULT_MAX_CONCURRENCY, DEFAULT_REPORT_PATH, DEFAULT_TIMEOUT_SECONDS, DEFAULT_USER_AGENT,
};
use crate::crawler::EventCallback;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to
/// most verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line options for the `site_crawler` binary.
///
/// This is the CLI surface only; it converts into the library [`Config`]
/// before the crawl starts.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "site_crawler",
    about = "Crawl a website's internal link graph and write a CSV report of page data",
    version
)]
pub struct Opt {
    /// Base URL to start crawling from (traversal never leaves this host)
    pub base_url: String,

    /// Maximum number of concurrent page fetches
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECONDS)]
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    /// Path of the CSV report to write
    #[arg(long, default_value = DEFAULT_REPORT_PATH)]
    pub output: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value = "plain")]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// This is the core configuration struct used by [`run_crawl`]. It can be
/// constructed programmatically without any CLI involvement.
///
/// # Examples
///
/// ```no_run
/// use site_crawler::Config;
///
/// let config = Config {
///     base_url: "https://example.com".to_string(),
///     max_concurrency: 3,
///     ..Default::default()
/// };
/// ```
///
/// [`run_crawl`]: crate::run_crawl
#[derive(Clone)]
pub struct Config {
    /// Base URL the crawl is seeded with and scoped to
    pub base_url: String,

    /// Maximum concurrent fetches (must be at least 1)
    pub max_concurrency: usize,

    /// Per-request timeout in seconds
    pub timeout_seconds: u64,

    /// HTTP User-Agent header value
    pub user_agent: String,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,

    /// Optional sink for structured crawl events
    pub event_callback: EventCallback,

    /// Optional cancellation signal; when triggered, the crawl stops starting
    /// new fetches and drains what is already in flight
    pub cancel: Option<CancellationToken>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            max_concurrency: DEFAULT_MAX_CONCURRENCY,
            timeout_seconds: DEFAULT_TIMEOUT_SECONDS,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            event_callback: None,
            cancel: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("base_url", &self.base_url)
            .field("max_concurrency", &self.max_concurrency)
            .field("timeout_seconds", &self.timeout_seconds)
            .field("user_agent", &self.user_agent)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .field("event_callback", &self.event_callback.is_some())
            .field("cancel", &self.cancel.is_some())
            .finish()
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            base_url: opt.base_url,
            max_concurrency: opt.max_concurrency,
            timeout_seconds: opt.timeout_seconds,
            user_agent: opt.user_agent,
            log_level: opt.log_level,
            log_format: opt.log_format,
            event_callback: None,
            cancel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_conversion() {
        assert_eq!(
            log::LevelFilter::from(LogLevel::Error),
            log::LevelFilter::Error
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Warn),
            log::LevelFilter::Warn
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Info),
            log::LevelFilter::Info
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Debug),
            log::LevelFilter::Debug
        );
        assert_eq!(
            log::LevelFilter::from(LogLevel::Trace),
            log::LevelFilter::Trace
        );
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.timeout_seconds, DEFAULT_TIMEOUT_SECONDS);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert!(config.base_url.is_empty());
        assert!(config.event_callback.is_none());
        assert!(config.cancel.is_none());
    }

    #[test]
    fn test_config_from_opt() {
        let opt = Opt {
            base_url: "https://example.com".to_string(),
            max_concurrency: 7,
            timeout_seconds: 3,
            user_agent: "test-agent".to_string(),
            output: PathBuf::from("out.csv"),
            log_level: LogLevel::Debug,
            log_format: LogFormat::Json,
        };
        let config = Config::from(opt);
        assert_eq!(config.base_url, "https://example.com");
        assert_eq!(config.max_concurrency, 7);
        assert_eq!(config.timeout_seconds, 3);
        assert_eq!(config.user_agent, "test-agent");
    }

    #[test]
    fn test_config_debug_omits_callback_body() {
        let config = Config::default();
        let rendered = format!("{:?}", config);
        assert!(rendered.contains("event_callback: false"));
        assert!(rendered.contains("cancel: false"));
    }
}
