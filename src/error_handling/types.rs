//! Error type definitions.
//!
//! This module defines the per-URL fetch error taxonomy and the counter
//! categories tracked during a crawl.

use log::SetLoggerError;
use reqwest::StatusCode;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
///
/// These are the only errors that abort a run: they are detected before any
/// crawl task starts.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] reqwest::Error),
}

/// Per-URL fetch failure.
///
/// Every variant means "skip this URL": the owning task logs the failure,
/// counts it, and completes without recording a page. A fetch failure never
/// aborts sibling tasks or the crawl, and is never retried within a run.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Transport-level failure (connect, DNS, timeout, body read).
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a status of 400 or above.
    #[error("HTTP status {0}")]
    HttpStatus(StatusCode),

    /// The response Content-Type is not HTML.
    #[error("unexpected content type: {0:?}")]
    ContentType(String),
}

impl FetchError {
    /// Maps the failure onto its statistics counter category.
    pub fn error_type(&self) -> ErrorType {
        match self {
            FetchError::Network(_) => ErrorType::NetworkError,
            FetchError::HttpStatus(_) => ErrorType::HttpStatusError,
            FetchError::ContentType(_) => ErrorType::ContentTypeError,
        }
    }
}

/// Categories of per-URL errors counted during a crawl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum ErrorType {
    /// Transport failure while fetching a page
    NetworkError,
    /// Response status was 400 or above
    HttpStatusError,
    /// Response Content-Type was not HTML
    ContentTypeError,
}

/// Categories of silent skips counted during a crawl.
///
/// Skips are not errors: they are the mechanism that terminates traversal
/// (domain scoping and deduplication).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum SkipType {
    /// URL host differs from the base URL host
    DomainMismatch,
    /// URL was already claimed or completed in the ledger
    AlreadyVisited,
    /// URL could not be parsed at all
    InvalidUrl,
}

impl std::fmt::Display for ErrorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorType {
    /// Returns a human-readable string representation of the error type.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorType::NetworkError => "Network error",
            ErrorType::HttpStatusError => "HTTP status error",
            ErrorType::ContentTypeError => "Unexpected content type",
        }
    }
}

impl std::fmt::Display for SkipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl SkipType {
    /// Returns a human-readable string representation of the skip type.
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipType::DomainMismatch => "Off-domain URL",
            SkipType::AlreadyVisited => "Already visited",
            SkipType::InvalidUrl => "Unparsable URL",
        }
    }
}
