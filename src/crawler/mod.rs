//! Crawler module: bounded same-origin breadth-first discovery
//!
//! This module contains:
//! - The shared HTTP client and single-page fetcher
//! - The frontier (queue + seen-set) that bounds the crawl
//! - Link extraction from fetched HTML
//! - The crawl loop tying them together
//!
//! The crawl only discovers pages; the page auditor is never invoked here.

mod fetcher;
mod frontier;
mod parser;

pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use frontier::Frontier;
pub use parser::extract_links;

use reqwest::Client;
use std::time::Duration;
use url::Url;

/// One successfully fetched page, in discovery order
#[derive(Debug, Clone)]
pub struct CrawledPage {
    /// The fetched URL (fragment-stripped)
    pub url: Url,

    /// The raw HTML body
    pub html: String,
}

/// Crawls same-origin pages breadth-first from a start URL
///
/// Maintains a FIFO frontier seeded with the start URL. Each dequeued URL is
/// fetched with the client's timeout discipline; on a 200-399 response the
/// page is recorded and its same-origin links (scheme+host+port matching the
/// start URL) are enqueued if unseen. Fetch failures silently drop that URL
/// and the crawl continues. A fixed politeness delay is applied between
/// fetches.
///
/// # Arguments
///
/// * `client` - The shared HTTP client
/// * `start` - The start URL; its origin confines the crawl
/// * `budget` - Maximum number of pages to fetch successfully
/// * `delay` - Pause between consecutive fetches
///
/// # Returns
///
/// Successfully fetched pages in the order first discovered. Termination is
/// guaranteed: the seen-set strictly grows and the budget is finite.
pub async fn crawl(client: &Client, start: &Url, budget: usize, delay: Duration) -> Vec<CrawledPage> {
    let origin = start.origin();
    let mut frontier = Frontier::new(start.clone(), budget);
    let mut pages = Vec::new();
    let mut first_fetch = true;

    while let Some(url) = frontier.next() {
        if !first_fetch && !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
        first_fetch = false;

        match fetch_page(client, &url).await {
            FetchOutcome::Success { status, body } => {
                tracing::debug!("Fetched {} ({})", url, status);
                for link in extract_links(&body, &url) {
                    if link.origin() == origin {
                        frontier.enqueue(link);
                    }
                }
                frontier.record_fetched();
                pages.push(CrawledPage { url, html: body });
            }
            FetchOutcome::HttpError { status } => {
                tracing::debug!("Dropping {}: HTTP {}", url, status);
            }
            FetchOutcome::NetworkError { error } => {
                tracing::debug!("Dropping {}: {}", url, error);
            }
        }
    }

    tracing::info!(
        "Crawl finished: {} page(s) fetched, {} still queued",
        frontier.fetched(),
        frontier.queued()
    );
    pages
}
