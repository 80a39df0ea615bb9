//! Score aggregator
//!
//! Turns the per-page audit results and the site-level reachability signals
//! into one deterministic report: per-category averages across pages, a
//! site-signal blend for discoverability, and a fixed convex combination
//! over the five categories.

use crate::model::{Category, CategoryScore, Finding, PageAuditResult, Report, Severity, REPORT_VERSION};
use crate::site::SiteSignals;
use std::collections::BTreeMap;

/// Weight of the per-page average in the discoverability blend
const PAGE_SIGNAL_WEIGHT: f64 = 0.7;

/// Weight of the site-level signals in the discoverability blend
const SITE_SIGNAL_WEIGHT: f64 = 0.3;

/// Rounds a category score to 2 decimal places for the report
fn round2(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

/// Aggregates page results and site signals into the final report
///
/// Per-category scores are the unweighted arithmetic mean across all pages;
/// every page counts equally. When site signals are present (network
/// targets only), discoverability becomes
/// `min(1, avg*0.7 + ((robots+sitemap)/2)*0.3)` and a finding is emitted
/// for each missing signal, attributed to the first page. Local targets
/// keep their page-level discoverability untouched. The overall score is
/// `round(100 * sum(score*weight))` over the five fixed weights, never
/// renormalized.
///
/// # Panics
///
/// Must not be called with an empty page set; the caller turns that case
/// into a run-level usage failure instead.
pub fn aggregate(target: &str, pages: &[PageAuditResult], site: Option<SiteSignals>) -> Report {
    assert!(!pages.is_empty(), "aggregate requires at least one page");

    let mut findings: Vec<Finding> = pages.iter().flat_map(|p| p.findings.clone()).collect();

    let mut blended: BTreeMap<Category, f64> = BTreeMap::new();
    for category in Category::ALL {
        let sum: f64 = pages
            .iter()
            .map(|p| p.category_scores.get(&category).copied().unwrap_or(0.0))
            .sum();
        blended.insert(category, sum / pages.len() as f64);
    }

    if let Some(signals) = site {
        let site_score =
            (signals.robots_ok as u8 as f64 + signals.sitemap_ok as u8 as f64) / 2.0;
        let page_avg = blended[&Category::Discoverability];
        blended.insert(
            Category::Discoverability,
            (page_avg * PAGE_SIGNAL_WEIGHT + site_score * SITE_SIGNAL_WEIGHT).min(1.0),
        );

        let first_page = pages[0].url.clone();
        if !signals.robots_ok {
            findings.push(
                Finding::new(
                    "robots-missing",
                    "No robots.txt found",
                    Severity::Warn,
                    0.0,
                    first_page.clone(),
                )
                .with_suggestion("Serve a robots.txt at the site root"),
            );
        }
        if !signals.sitemap_ok {
            findings.push(
                Finding::new(
                    "sitemap-missing",
                    "No sitemap.xml found",
                    Severity::Info,
                    0.0,
                    first_page,
                )
                .with_suggestion("Serve a sitemap.xml at the site root"),
            );
        }
    }

    let total: f64 = blended
        .iter()
        .map(|(category, score)| score * category.weight())
        .sum();
    let score = (total * 100.0).round() as u32;

    let categories = blended
        .into_iter()
        .map(|(category, value)| {
            (
                category,
                CategoryScore {
                    score: round2(value),
                    weight: category.weight(),
                },
            )
        })
        .collect();

    Report {
        version: REPORT_VERSION,
        target: target.to_string(),
        pages: pages.len(),
        score,
        categories,
        findings,
    }
}
