//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (defaults, report formatting)
//! - CLI option types and parsing
//! - The library-level `Config` struct

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, LogFormat, LogLevel, Opt};
