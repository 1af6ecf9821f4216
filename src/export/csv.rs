//! CSV report writing.
//!
//! Serializes a crawl snapshot to CSV: one row per page, list columns joined
//! with the report delimiter.

use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use csv::Writer;

use crate::config::REPORT_LIST_DELIMITER;
use crate::models::PageRecord;
use crate::normalize::NormalizedUrl;

/// Writes the crawl snapshot as a CSV report.
///
/// Columns are `page_url, h1, first_paragraph, outgoing_link_urls,
/// image_urls`; the two list columns are joined with
/// [`REPORT_LIST_DELIMITER`]. Rows come out sorted by normalized URL because
/// the snapshot is a `BTreeMap`.
///
/// # Arguments
///
/// * `pages` - The crawl snapshot (normalized URL → page record)
/// * `output` - Output file path, or stdout if `None`
///
/// # Returns
///
/// Returns the number of rows written, or an error if writing fails.
pub fn write_csv_report(
    pages: &BTreeMap<NormalizedUrl, PageRecord>,
    output: Option<&Path>,
) -> Result<usize> {
    // Use a trait object to handle both File and Stdout
    let mut writer: Writer<Box<dyn Write>> = if let Some(output_path) = output {
        let file = std::fs::File::create(output_path).with_context(|| {
            format!("Failed to create output file: {}", output_path.display())
        })?;
        Writer::from_writer(Box::new(file) as Box<dyn Write>)
    } else {
        Writer::from_writer(Box::new(io::stdout()) as Box<dyn Write>)
    };

    writer.write_record([
        "page_url",
        "h1",
        "first_paragraph",
        "outgoing_link_urls",
        "image_urls",
    ])?;

    let mut record_count = 0;
    for page in pages.values() {
        let outgoing_link_urls = page.outgoing_links.join(REPORT_LIST_DELIMITER);
        let image_urls = page.image_urls.join(REPORT_LIST_DELIMITER);
        writer.write_record([
            page.url.as_str(),
            page.h1.as_str(),
            page.first_paragraph.as_str(),
            outgoing_link_urls.as_str(),
            image_urls.as_str(),
        ])?;
        record_count += 1;
    }

    writer.flush()?;

    Ok(record_count)
}
