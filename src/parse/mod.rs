//! HTML parsing and data extraction.
//!
//! This module extracts the page data the crawler reports on:
//! - first heading and first paragraph text
//! - outgoing links (resolved to absolute URLs)
//! - image URLs (resolved to absolute URLs)
//!
//! All parsing is done using CSS selectors via the `scraper` crate.

mod html;

// Re-export public API
pub use html::{
    extract_first_paragraph, extract_h1, extract_images, extract_links, extract_page_data,
};
