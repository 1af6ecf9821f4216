//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_crawler` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Ctrl-C wiring into the crawl's cancellation token
//! - User-facing output formatting and the CSV report
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;
use tokio_util::sync::CancellationToken;

use site_crawler::export::write_csv_report;
use site_crawler::initialization::init_logger_with;
use site_crawler::{run_crawl, Config, Opt};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments; clap exits with usage on a missing or
    // extra positional argument
    let opt = Opt::parse();

    // Initialize logger based on options
    let log_level = opt.log_level.clone();
    let log_format = opt.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // First Ctrl-C stops new fetches and lets in-flight work drain
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                log::warn!("interrupt received, finishing in-flight fetches");
                cancel.cancel();
            }
        });
    }

    let output = opt.output.clone();
    let mut config = Config::from(opt);
    config.cancel = Some(cancel);

    // Run the crawl using the library
    match run_crawl(config).await {
        Ok(report) => {
            println!(
                "Crawled {} page{} from {} in {:.1}s ({} fetch failure{}, {} skipped)",
                report.pages_crawled,
                if report.pages_crawled == 1 { "" } else { "s" },
                report.base_url,
                report.elapsed_seconds,
                report.fetch_failures,
                if report.fetch_failures == 1 { "" } else { "s" },
                report.pages_skipped
            );
            for (key, page) in &report.pages {
                println!(
                    "  {} - h1: {:?}, {} links, {} images",
                    key,
                    page.h1,
                    page.outgoing_links.len(),
                    page.image_urls.len()
                );
            }

            let rows = write_csv_report(&report.pages, Some(&output))
                .context("Failed to write CSV report")?;
            println!("Report with {} rows saved to {}", rows, output.display());
            Ok(())
        }
        Err(e) => {
            eprintln!("site_crawler error: {:#}", e);
            process::exit(1);
        }
    }
}
