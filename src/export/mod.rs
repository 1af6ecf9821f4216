//! Report export functionality.
//!
//! The core exposes only the crawl snapshot; this module is the reporting
//! collaborator that turns a snapshot into something a human opens.

mod csv;

pub use self::csv::write_csv_report;
