//! HTML extraction for crawled pages.
//!
//! This module pulls the reported fields out of a fetched page:
//! - first `<h1>` text
//! - first paragraph (preferring one under `<main>`)
//! - outgoing anchor hrefs, resolved to absolute URLs
//! - image srcs, resolved to absolute URLs
//!
//! Extraction never fails: malformed or sparse HTML degrades each field to
//! empty independently.

use scraper::{Html, Selector};
use std::sync::LazyLock;
use url::Url;

use crate::models::PageRecord;

// CSS selector strings
const H1_SELECTOR_STR: &str = "h1";
const MAIN_PARAGRAPH_SELECTOR_STR: &str = "main p";
const PARAGRAPH_SELECTOR_STR: &str = "p";
const ANCHOR_SELECTOR_STR: &str = "a[href]";
const IMAGE_SELECTOR_STR: &str = "img[src]";

static H1_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(H1_SELECTOR_STR));
static MAIN_PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(MAIN_PARAGRAPH_SELECTOR_STR));
static PARAGRAPH_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(PARAGRAPH_SELECTOR_STR));
static ANCHOR_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(ANCHOR_SELECTOR_STR));
static IMAGE_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| parse_selector_with_fallback(IMAGE_SELECTOR_STR));

/// Parses a static CSS selector with a safe fallback.
///
/// If parsing fails, logs an error and returns a selector that matches
/// nothing (`*:not(*)`), so extraction degrades to empty instead of panicking.
fn parse_selector_with_fallback(selector_str: &str) -> Selector {
    Selector::parse(selector_str).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{selector_str}': {e}. Using fallback.");
        Selector::parse("*:not(*)")
            .expect("Fallback selector '*:not(*)' should always parse - this is a programming error")
    })
}

/// Extracts structured data from a fetched page.
///
/// Parses the HTML once and runs every extractor over the same document.
/// If `page_url` itself cannot be parsed, link and image resolution degrade
/// to empty while the text fields are still extracted.
///
/// # Arguments
///
/// * `html` - The raw HTML body of the page
/// * `page_url` - The URL the page was fetched from, used to resolve
///   relative hrefs and srcs
pub fn extract_page_data(html: &str, page_url: &str) -> PageRecord {
    let document = Html::parse_document(html);
    let base = Url::parse(page_url).ok();

    let (outgoing_links, image_urls) = match &base {
        Some(base) => (
            extract_links(&document, base),
            extract_images(&document, base),
        ),
        None => {
            log::debug!("Cannot resolve links against unparsable page URL {page_url}");
            (Vec::new(), Vec::new())
        }
    };

    PageRecord {
        url: page_url.to_string(),
        h1: extract_h1(&document),
        first_paragraph: extract_first_paragraph(&document),
        outgoing_links,
        image_urls,
    }
}

/// Extracts the text of the first `<h1>` element in document order.
///
/// Returns an empty string if the document has no `<h1>`.
pub fn extract_h1(document: &Html) -> String {
    document
        .select(&H1_SELECTOR)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the text of the first paragraph.
///
/// Prefers a paragraph nested (at any depth) under a `<main>` element over
/// one elsewhere in the document, so main-content text wins over boilerplate.
/// Returns an empty string if the document has no paragraphs at all.
pub fn extract_first_paragraph(document: &Html) -> String {
    document
        .select(&MAIN_PARAGRAPH_SELECTOR)
        .next()
        .or_else(|| document.select(&PARAGRAPH_SELECTOR).next())
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

/// Extracts the href of every anchor, resolved against the page URL.
///
/// Absolute hrefs pass through unchanged; root-relative and path-relative
/// hrefs resolve per standard relative-URL resolution. Anchors without an
/// href, and hrefs that cannot be resolved, are skipped. Document order is
/// preserved.
pub fn extract_links(document: &Html, base: &Url) -> Vec<String> {
    document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_href(base, href))
        .collect()
}

/// Extracts the src of every image, resolved against the page URL.
///
/// Images without a src, and srcs that cannot be resolved, are skipped.
/// Document order is preserved.
pub fn extract_images(document: &Html, base: &Url) -> Vec<String> {
    document
        .select(&IMAGE_SELECTOR)
        .filter_map(|element| element.value().attr("src"))
        .filter_map(|src| resolve_href(base, src))
        .collect()
}

/// Resolves a possibly-relative reference against the page URL.
fn resolve_href(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(resolved) => Some(resolved.to_string()),
        Err(e) => {
            log::debug!("Skipping unresolvable href {href:?}: {e}");
            None
        }
    }
}
