//! Audit run orchestration
//!
//! A run resolves the target, assembles the page set (crawl for network
//! targets, enumeration for local ones), audits every page in discovery
//! order, probes the site-level signals once for network targets, and
//! aggregates everything into the final report. Everything proceeds in a
//! single cooperative flow; the only suspension points are network fetches.

use crate::aggregate::aggregate;
use crate::audit::audit_page;
use crate::config::Config;
use crate::crawler::{build_http_client, crawl};
use crate::input::collect_local_pages;
use crate::model::{PageAuditResult, Report};
use crate::site::check_site;
use crate::{Result, SeoGateError};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// A resolved audit target
#[derive(Debug, Clone, PartialEq)]
pub enum AuditTarget {
    /// A network site, crawled from this start URL
    Remote(Url),
    /// A local HTML file or a directory of HTML files
    Local(PathBuf),
}

/// Resolves a raw target string to a network URL or a local path
///
/// A string that parses as an absolute http(s) URL is a remote target. An
/// existing filesystem path is a local target. Anything else is a usage
/// error, surfaced before any work starts.
pub fn resolve_target(raw: &str) -> Result<AuditTarget> {
    if let Ok(url) = Url::parse(raw) {
        if matches!(url.scheme(), "http" | "https") {
            return Ok(AuditTarget::Remote(url));
        }
    }

    let path = PathBuf::from(raw);
    if path.exists() {
        return Ok(AuditTarget::Local(path));
    }

    Err(SeoGateError::InvalidTarget(raw.to_string()))
}

/// Runs a complete audit and produces the report
///
/// # Arguments
///
/// * `config` - The run configuration
/// * `raw_target` - The target as the user supplied it (URL or path)
///
/// # Returns
///
/// * `Ok(Report)` - At least one page was audited
/// * `Err(SeoGateError::EmptyPageSet)` - No pages could be resolved; this is
///   a usage-level failure, not a zero score
pub async fn run_audit(config: &Config, raw_target: &str) -> Result<Report> {
    let target = resolve_target(raw_target)?;

    match target {
        AuditTarget::Remote(start) => {
            tracing::info!("Auditing network target {}", start);
            let client = build_http_client(
                &config.user_agent.header_value(),
                config.crawler.timeout_ms,
            )?;

            let pages = crawl(
                &client,
                &start,
                config.crawler.page_budget,
                Duration::from_millis(config.crawler.fetch_delay_ms),
            )
            .await;

            let results: Vec<PageAuditResult> = pages
                .iter()
                .map(|page| audit_page(&page.html, &page.url))
                .collect();

            if results.is_empty() {
                return Err(SeoGateError::EmptyPageSet {
                    target: raw_target.to_string(),
                });
            }

            // Site-level signals are probed exactly once per run, no matter
            // how many pages were crawled.
            let signals = check_site(&client, &start).await;
            Ok(aggregate(raw_target, &results, Some(signals)))
        }

        AuditTarget::Local(path) => {
            tracing::info!("Auditing local target {}", path.display());
            let pages = collect_local_pages(&path)?;

            let results: Vec<PageAuditResult> = pages
                .iter()
                .map(|page| audit_page(&page.html, &page.url))
                .collect();

            if results.is_empty() {
                return Err(SeoGateError::EmptyPageSet {
                    target: raw_target.to_string(),
                });
            }

            // Local targets get no site-level blend; discoverability rests
            // on the page-level canonical/noindex signals alone.
            Ok(aggregate(raw_target, &results, None))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_http_url() {
        match resolve_target("https://example.com/start").unwrap() {
            AuditTarget::Remote(url) => assert_eq!(url.as_str(), "https://example.com/start"),
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_existing_path() {
        let dir = tempfile::TempDir::new().unwrap();
        let target = resolve_target(dir.path().to_str().unwrap()).unwrap();
        assert!(matches!(target, AuditTarget::Local(_)));
    }

    #[test]
    fn test_resolve_rejects_other_schemes_and_missing_paths() {
        assert!(matches!(
            resolve_target("ftp://example.com/"),
            Err(SeoGateError::InvalidTarget(_))
        ));
        assert!(matches!(
            resolve_target("/definitely/not/a/real/path"),
            Err(SeoGateError::InvalidTarget(_))
        ));
    }
}
