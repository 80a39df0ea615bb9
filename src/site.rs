//! Site-level reachability checks
//!
//! Independently of the crawl, the site root is probed once per run for a
//! robots file and a sitemap file. Each probe yields a binary signal that
//! the aggregator blends into the discoverability category. The checks are
//! skipped entirely when the audit target is not a network URL.

use crate::crawler::{fetch_page, FetchOutcome};
use reqwest::Client;
use url::Url;

/// The two site-level reachability signals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteSignals {
    /// Whether /robots.txt answered with a 200-399 status
    pub robots_ok: bool,

    /// Whether /sitemap.xml answered with a 200-399 status
    pub sitemap_ok: bool,
}

/// Probes /robots.txt and /sitemap.xml under the start URL's origin
///
/// Uses the same client and timeout discipline as page fetches. Any fetch
/// error counts as unreachable; the content of either file is never
/// inspected.
pub async fn check_site(client: &Client, start: &Url) -> SiteSignals {
    let robots_ok = probe(client, start, "/robots.txt").await;
    let sitemap_ok = probe(client, start, "/sitemap.xml").await;
    tracing::debug!(
        "Site signals for {}: robots={}, sitemap={}",
        start,
        robots_ok,
        sitemap_ok
    );
    SiteSignals {
        robots_ok,
        sitemap_ok,
    }
}

async fn probe(client: &Client, start: &Url, path: &str) -> bool {
    let Ok(url) = start.join(path) else {
        return false;
    };
    matches!(fetch_page(client, &url).await, FetchOutcome::Success { .. })
}
