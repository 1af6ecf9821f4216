//! Per-URL crawl task.
//!
//! Each task walks one URL through the crawl state machine: domain check →
//! claim → fetch (permit-bounded) → extract → record → spawn children →
//! await children. Every exit path is a silent skip or a counted, contained
//! failure; nothing a task does can abort its siblings.

use std::sync::atomic::Ordering;
use std::sync::Arc;

use futures::future::{BoxFuture, FutureExt};
use futures::stream::FuturesUnordered;
use futures::StreamExt;
use log::{debug, warn};
use url::Url;

use crate::error_handling::SkipType;
use crate::fetch::fetch_html;
use crate::normalize::normalize_url;
use crate::parse::extract_page_data;

use super::events::{CrawlEvent, SkipReason};
use super::CrawlContext;

/// Crawls one URL and, recursively, every in-domain page reachable from it.
///
/// Returns a boxed future rather than being an `async fn`: the task spawns
/// itself for each outgoing link, and boxing keeps the recursive future type
/// finite and the traversal off the call stack (a cyclic link graph has
/// unbounded depth).
///
/// The task completes only after every child it spawned has completed, so
/// awaiting the root task awaits the entire crawl.
pub(crate) fn crawl_page(ctx: Arc<CrawlContext>, url: String) -> BoxFuture<'static, ()> {
    async move {
        // DomainCheck: out-of-domain URLs are recorded nowhere; this is not
        // an error, it is how the traversal is scoped
        let parsed = match Url::parse(&url) {
            Ok(parsed) => parsed,
            Err(e) => {
                debug!("skipping unparsable URL {url}: {e}");
                ctx.stats.increment_skip(SkipType::InvalidUrl);
                return;
            }
        };
        let host = parsed.host_str().map(str::to_lowercase);
        if host.as_deref() != Some(ctx.base_host.as_str()) {
            debug!("skipping off-domain URL {url}");
            ctx.stats.increment_skip(SkipType::DomainMismatch);
            ctx.emit(CrawlEvent::Skipped {
                url,
                reason: SkipReason::OffDomain,
            });
            return;
        }

        // Claim: the atomic insert is the exactly-once guarantee; losing the
        // race means another task owns (or already finished) this page
        let key = normalize_url(&url);
        if !ctx.ledger.claim(&key).await {
            debug!("already visited {key}, skipping {url}");
            ctx.stats.increment_skip(SkipType::AlreadyVisited);
            return;
        }

        // Fetching: the permit is held for the duration of this task's own
        // fetch only and is dropped when the block ends, before any child is
        // awaited, so bounded network concurrency cannot deadlock against
        // deep recursion
        let html = {
            let _permit = tokio::select! {
                _ = ctx.cancel.cancelled() => return,
                permit = ctx.semaphore.acquire() => match permit {
                    Ok(permit) => permit,
                    // The semaphore is never closed while tasks run; treat a
                    // closed semaphore as shutdown
                    Err(_) => return,
                },
            };

            ctx.emit(CrawlEvent::Fetching { url: url.clone() });
            debug!("fetching {url}");

            let fetched = tokio::select! {
                _ = ctx.cancel.cancelled() => return,
                fetched = fetch_html(&ctx.client, &url) => fetched,
            };

            match fetched {
                Ok(html) => html,
                Err(e) => {
                    warn!("failed to fetch {url}: {e}");
                    ctx.stats.increment_error(e.error_type());
                    ctx.failed_pages.fetch_add(1, Ordering::SeqCst);
                    ctx.emit(CrawlEvent::FetchFailed {
                        url,
                        error: e.to_string(),
                    });
                    // The key stays claimed: failed URLs are not retried
                    // within a run
                    return;
                }
            }
        };

        // Extracting: fully synchronous; scraper's DOM is not Send and must
        // never live across an await
        let record = extract_page_data(&html, &url);
        let links = record.outgoing_links.clone();
        let images = record.image_urls.len();

        // Recording: single writer for this key by construction of claim
        ctx.ledger.record(&key, record).await;
        ctx.completed_pages.fetch_add(1, Ordering::SeqCst);
        ctx.emit(CrawlEvent::Crawled {
            url: url.clone(),
            links: links.len(),
            images,
        });

        // Spawning: one task per outgoing link, always from the record of
        // the page actually fetched; off-domain links are the child's
        // DomainCheck problem, which keeps the ledger domain-pure
        let mut children = FuturesUnordered::new();
        for link in links {
            if ctx.cancel.is_cancelled() {
                debug!("cancelled, not spawning remaining children of {url}");
                break;
            }
            children.push(tokio::spawn(crawl_page(Arc::clone(&ctx), link)));
        }

        // AwaitingChildren: this task is not done until every child is; a
        // panicked child is contained here
        while let Some(joined) = children.next().await {
            if let Err(join_error) = joined {
                warn!("crawl task panicked: {join_error:?}");
            }
        }
    }
    .boxed()
}
