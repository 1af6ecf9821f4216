//! Application initialization and resource setup.
//!
//! This module provides functions to initialize the shared resources of a
//! crawl:
//! - the HTTP client (User-Agent, timeouts)
//! - the concurrency semaphore
//! - the logger
//!
//! All initialization functions return proper error types for error handling.

mod client;
mod logger;

use std::sync::Arc;

use tokio::sync::Semaphore;

// Re-export public API
pub use client::init_client;
pub use logger::init_logger_with;

/// Initializes a semaphore for controlling fetch concurrency.
///
/// Creates a new semaphore with the specified permit count. Each crawl task
/// holds one permit for the duration of its own fetch only, so this bounds
/// the number of simultaneous in-flight HTTP requests.
///
/// # Arguments
///
/// * `count` - Maximum number of concurrent fetches allowed
///
/// # Returns
///
/// An `Arc<Semaphore>` that can be shared across multiple tasks.
pub fn init_semaphore(count: usize) -> Arc<Semaphore> {
    Arc::new(Semaphore::new(count))
}
