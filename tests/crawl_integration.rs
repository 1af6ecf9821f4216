//! Integration tests for the crawl orchestrator.
//!
//! These tests drive `run_crawl` against a local mock site and verify:
//! - traversal, deduplication, and domain scoping over a cyclic link graph
//! - per-URL failure containment (HTTP errors, wrong content type)
//! - semaphore enforcement of the fetch concurrency cap
//! - cancellation behavior
//! - structured event emission

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use site_crawler::{normalize_url, run_crawl, CrawlEvent, SkipReason};
use wiremock::matchers::{method, path, path_regex};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[path = "helpers.rs"]
mod helpers;

use helpers::{create_test_config, html_page, links, mount_page};

fn html_response(body: String) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("Content-Type", "text/html; charset=utf-8")
        .set_body_string(body)
}

/// End-to-end fixture graph: A -> {B, C}, B -> {A, D}, D off-domain.
///
/// The snapshot must be exactly {A, B, C}: D is never traversed, and A is
/// not re-fetched despite B linking back to it.
#[tokio::test]
async fn test_crawl_collects_linked_pages_exactly_once() {
    let server = MockServer::start().await;

    let root_hits = Arc::new(AtomicUsize::new(0));
    let root_hits_in_responder = Arc::clone(&root_hits);
    let root_html = html_page("Home", &links(&["/b", "/c"]));
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(move |_req: &wiremock::Request| {
            root_hits_in_responder.fetch_add(1, Ordering::SeqCst);
            html_response(root_html.clone())
        })
        .mount(&server)
        .await;

    let external = "https://external.example.com/d";
    mount_page(
        &server,
        "/b",
        html_page("Page B", &links(&["/", external])),
    )
    .await;
    mount_page(&server, "/c", html_page("Page C", "<p>done</p>")).await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, 2))
        .await
        .expect("crawl should succeed");

    // Snapshot keys are exactly the three in-domain pages
    assert_eq!(report.pages_crawled, 3);
    let keys: Vec<_> = report.pages.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![
            normalize_url(&base_url),
            normalize_url(&format!("{base_url}/b")),
            normalize_url(&format!("{base_url}/c")),
        ]
    );

    // A was fetched exactly once despite B linking back to it
    assert_eq!(root_hits.load(Ordering::SeqCst), 1);

    // The off-domain link is visible in B's record even though it was
    // never traversed
    let page_b = &report.pages[&normalize_url(&format!("{base_url}/b"))];
    assert_eq!(page_b.h1, "Page B");
    assert!(page_b.outgoing_links.iter().any(|link| link == external));
    assert!(!report
        .pages
        .keys()
        .any(|key| key.as_str().contains("external.example.com")));

    assert_eq!(report.fetch_failures, 0);
}

/// Extracted fields survive the full fetch -> extract -> record path.
#[tokio::test]
async fn test_crawl_records_page_fields() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        concat!(
            "<html><body><h1>Welcome</h1>",
            "<main><p>Main text.</p></main>",
            r#"<img src="/hero.png"><a href="/about">about</a>"#,
            "</body></html>"
        )
        .to_string(),
    )
    .await;
    mount_page(&server, "/about", html_page("About", "")).await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, 2))
        .await
        .expect("crawl should succeed");

    let root = &report.pages[&normalize_url(&base_url)];
    assert_eq!(root.h1, "Welcome");
    assert_eq!(root.first_paragraph, "Main text.");
    assert_eq!(root.outgoing_links, vec![format!("{base_url}/about")]);
    assert_eq!(root.image_urls, vec![format!("{base_url}/hero.png")]);
}

/// A failed fetch (HTTP 500) must not prevent sibling URLs from being
/// crawled, and the failed URL must not appear in the snapshot.
#[tokio::test]
async fn test_failed_fetch_does_not_block_siblings() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        html_page("Home", &links(&["/broken", "/ok"])),
    )
    .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;
    mount_page(&server, "/ok", html_page("Still here", "")).await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, 2))
        .await
        .expect("crawl should succeed despite per-URL failure");

    assert_eq!(report.pages_crawled, 2);
    assert!(report.pages.contains_key(&normalize_url(&base_url)));
    assert!(report
        .pages
        .contains_key(&normalize_url(&format!("{base_url}/ok"))));
    assert!(!report
        .pages
        .contains_key(&normalize_url(&format!("{base_url}/broken"))));
    assert_eq!(report.fetch_failures, 1);
}

/// Non-HTML responses are skipped as ContentType failures, not parsed.
#[tokio::test]
async fn test_non_html_content_type_is_skipped() {
    let server = MockServer::start().await;
    mount_page(&server, "/", html_page("Home", &links(&["/data.json"]))).await;
    Mock::given(method("GET"))
        .and(path("/data.json"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/json")
                .set_body_string(r#"{"not": "html"}"#),
        )
        .mount(&server)
        .await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, 2))
        .await
        .expect("crawl should succeed");

    assert_eq!(report.pages_crawled, 1);
    assert_eq!(report.fetch_failures, 1);
    assert!(!report
        .pages
        .contains_key(&normalize_url(&format!("{base_url}/data.json"))));
}

/// With limiter capacity N, the number of simultaneously in-flight fetches
/// never exceeds N. The responder blocks long enough for overlap to be
/// observable if the cap were broken.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_cap_is_enforced() {
    let max_concurrency = 2;

    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        html_page("Home", &links(&["/p1", "/p2", "/p3", "/p4", "/p5", "/p6"])),
    )
    .await;

    let concurrent = Arc::new(AtomicUsize::new(0));
    let max_observed = Arc::new(AtomicUsize::new(0));
    let concurrent_in_responder = Arc::clone(&concurrent);
    let max_in_responder = Arc::clone(&max_observed);

    Mock::given(method("GET"))
        .and(path_regex(r"^/p[0-9]+$"))
        .respond_with(move |_req: &wiremock::Request| {
            let current = concurrent_in_responder.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_responder.fetch_max(current, Ordering::SeqCst);

            // Hold the request open so overlapping fetches are observable
            std::thread::sleep(Duration::from_millis(100));

            concurrent_in_responder.fetch_sub(1, Ordering::SeqCst);
            html_response(html_page("leaf", ""))
        })
        .mount(&server)
        .await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, max_concurrency))
        .await
        .expect("crawl should succeed");

    assert_eq!(report.pages_crawled, 7);
    let observed = max_observed.load(Ordering::SeqCst);
    assert!(
        observed <= max_concurrency,
        "observed {observed} concurrent fetches with a cap of {max_concurrency}"
    );
}

/// Capacity 1 fully serializes fetches.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrency_one_serializes_fetches() {
    let server = MockServer::start().await;
    mount_page(
        &server,
        "/",
        html_page("Home", &links(&["/p1", "/p2", "/p3"])),
    )
    .await;

    let concurrent = Arc::new(AtomicUsize::new(0));
    let max_observed = Arc::new(AtomicUsize::new(0));
    let concurrent_in_responder = Arc::clone(&concurrent);
    let max_in_responder = Arc::clone(&max_observed);

    Mock::given(method("GET"))
        .and(path_regex(r"^/p[0-9]+$"))
        .respond_with(move |_req: &wiremock::Request| {
            let current = concurrent_in_responder.fetch_add(1, Ordering::SeqCst) + 1;
            max_in_responder.fetch_max(current, Ordering::SeqCst);
            std::thread::sleep(Duration::from_millis(50));
            concurrent_in_responder.fetch_sub(1, Ordering::SeqCst);
            html_response(html_page("leaf", ""))
        })
        .mount(&server)
        .await;

    let base_url = server.uri();
    let report = run_crawl(create_test_config(&base_url, 1))
        .await
        .expect("crawl should succeed");

    assert_eq!(report.pages_crawled, 4);
    assert_eq!(max_observed.load(Ordering::SeqCst), 1);
}

/// Cancellation stops new fetches, leaves the ledger uncorrupted, and the
/// crawl still terminates cleanly with partial results.
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_cancellation_stops_new_fetches() {
    use tokio_util::sync::CancellationToken;

    let server = MockServer::start().await;
    let child_routes: Vec<String> = (1..=10).map(|i| format!("/slow{i}")).collect();
    let child_hrefs: Vec<&str> = child_routes.iter().map(String::as_str).collect();
    mount_page(&server, "/", html_page("Home", &links(&child_hrefs))).await;

    Mock::given(method("GET"))
        .and(path_regex(r"^/slow[0-9]+$"))
        .respond_with(
            html_response(html_page("slow", "")).set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let cancel = CancellationToken::new();
    let mut config = create_test_config(&server.uri(), 2);
    config.cancel = Some(cancel.clone());

    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(300)).await;
        cancel.cancel();
    });

    let report = tokio::time::timeout(Duration::from_secs(10), run_crawl(config))
        .await
        .expect("cancelled crawl must terminate")
        .expect("cancelled crawl still returns partial results");

    // Root completes before the cancel; the slow children mostly do not
    assert!(report.pages_crawled >= 1);
    assert!(
        report.pages_crawled <= 5,
        "cancellation should stop most of the 10 slow children, crawled {}",
        report.pages_crawled
    );
}

/// The orchestrator emits structured events a sink can subscribe to.
#[tokio::test]
async fn test_event_callback_receives_events() {
    let server = MockServer::start().await;
    let external = "https://elsewhere.example.org/away";
    mount_page(&server, "/", html_page("Home", &links(&["/x", external]))).await;
    mount_page(&server, "/x", html_page("X", "")).await;

    let events: Arc<Mutex<Vec<CrawlEvent>>> = Arc::new(Mutex::new(Vec::new()));
    let events_in_callback = Arc::clone(&events);

    let base_url = server.uri();
    let mut config = create_test_config(&base_url, 2);
    config.event_callback = Some(Arc::new(move |event| {
        events_in_callback
            .lock()
            .expect("event sink lock poisoned")
            .push(event);
    }));

    run_crawl(config).await.expect("crawl should succeed");

    let events = events.lock().expect("event sink lock poisoned");
    let fetching = events
        .iter()
        .filter(|e| matches!(e, CrawlEvent::Fetching { .. }))
        .count();
    let crawled = events
        .iter()
        .filter(|e| matches!(e, CrawlEvent::Crawled { .. }))
        .count();
    assert_eq!(fetching, 2, "one Fetching event per in-domain page");
    assert_eq!(crawled, 2, "one Crawled event per recorded page");

    assert!(events.iter().any(|e| matches!(
        e,
        CrawlEvent::Skipped { url, reason: SkipReason::OffDomain } if url == external
    )));
}
