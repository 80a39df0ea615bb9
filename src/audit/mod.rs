//! Page auditor: the per-page rule engine
//!
//! This module runs the fixed battery of rule checks against one page's
//! parsed HTML and composes the results into per-category sub-scores.
//! Auditing is deterministic and side-effect-free: identical input always
//! yields an identical `PageAuditResult`.

mod range;
mod rules;

pub use range::score_range;
pub use rules::{canonical_target, structured_blocks, CanonicalTarget, StructuredBlock};

use crate::model::{Category, PageAuditResult};
use scraper::Html;
use std::collections::BTreeMap;
use url::Url;

/// Clamps a composed category score to 1.0
fn clamp1(score: f64) -> f64 {
    score.min(1.0)
}

/// Arithmetic mean of rule sub-scores
fn avg(scores: &[f64]) -> f64 {
    scores.iter().sum::<f64>() / scores.len() as f64
}

/// Audits one page's raw HTML against the full rule battery
///
/// # Arguments
///
/// * `html` - The raw HTML text of the page
/// * `url` - The page's canonical URL, used for canonical-link resolution
///   and for attributing findings
///
/// # Returns
///
/// A `PageAuditResult` with one sub-score per category and the findings
/// emitted by the individual rules, in rule-evaluation order.
pub fn audit_page(html: &str, url: &Url) -> PageAuditResult {
    let doc = Html::parse_document(html);
    let page = url.to_string();
    let mut findings = Vec::new();

    let title = rules::check_title(&doc, &page, &mut findings);
    let description = rules::check_meta_description(&doc, &page, &mut findings);
    let (og, twitter) = rules::check_social_meta(&doc, &page, &mut findings);
    let canonical = rules::check_canonical(&doc, url, &page, &mut findings);
    let i18n_mobile = rules::check_lang_viewport(&doc, &page, &mut findings);
    let heading = rules::check_headings(&doc, &page, &mut findings);
    let img_alt = rules::check_image_alt(&doc, &page, &mut findings);
    let anchors = rules::check_anchor_text(&doc, &page, &mut findings);
    let noindex = rules::check_noindex(&doc, &page, &mut findings);
    let structured = rules::check_structured_data(&doc, &page, &mut findings);

    let mut category_scores = BTreeMap::new();
    category_scores.insert(Category::Metadata, clamp1(avg(&[title, description, og, twitter])));
    category_scores.insert(Category::Discoverability, clamp1(avg(&[canonical, noindex])));
    category_scores.insert(Category::Semantics, clamp1(avg(&[heading, img_alt, anchors])));
    category_scores.insert(Category::I18nMobile, clamp1(i18n_mobile));
    category_scores.insert(Category::Structured, clamp1(structured));

    PageAuditResult {
        url: page,
        category_scores,
        findings,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Severity;

    fn page_url() -> Url {
        Url::parse("https://example.com/page").unwrap()
    }

    /// A page that satisfies every rule except OG/Twitter and JSON-LD
    fn minimal_valid_page() -> String {
        format!(
            r#"<html lang="en"><head>
                <title>{}</title>
                <meta name="description" content="{}">
                <meta name="viewport" content="width=device-width, initial-scale=1">
                <link rel="canonical" href="https://example.com/page">
            </head><body>
                <h1>Heading</h1>
                <img src="pic.png" alt="A picture">
            </body></html>"#,
            "t".repeat(30),
            "d".repeat(100),
        )
    }

    #[test]
    fn test_minimal_valid_page_scores() {
        let result = audit_page(&minimal_valid_page(), &page_url());

        // OG/Twitter are absent so metadata stays below 1.
        assert!(result.category_scores[&Category::Metadata] < 1.0);
        assert_eq!(result.category_scores[&Category::Semantics], 1.0);
        assert_eq!(result.category_scores[&Category::I18nMobile], 1.0);
        assert_eq!(result.category_scores[&Category::Discoverability], 1.0);
        assert_eq!(result.category_scores[&Category::Structured], 0.0);

        // Exactly the social-meta and JSON-LD observations remain, in rule
        // order; og-image-missing fires even though all three OG tags are
        // absent.
        let ids: Vec<_> = result.findings.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["og-image-missing", "twitter-card-missing", "jsonld-missing"]
        );
        assert!(!result
            .findings
            .iter()
            .any(|f| f.severity == Severity::Error));
    }

    #[test]
    fn test_empty_head_emits_all_presence_findings() {
        let result = audit_page("<html><head></head><body></body></html>", &page_url());
        for id in [
            "title-missing",
            "meta-description-missing",
            "canonical-missing",
            "html-lang-missing",
            "viewport-missing",
        ] {
            let finding = result
                .findings
                .iter()
                .find(|f| f.id == id)
                .unwrap_or_else(|| panic!("missing finding {}", id));
            assert_eq!(finding.score, 0.0, "finding {} should carry score 0", id);
        }
        assert_eq!(result.category_scores[&Category::Metadata], 0.0);
        assert_eq!(result.category_scores[&Category::I18nMobile], 0.0);
    }

    #[test]
    fn test_audit_is_idempotent() {
        let html = minimal_valid_page();
        let first = audit_page(&html, &page_url());
        let second = audit_page(&html, &page_url());
        assert_eq!(first, second);
    }

    #[test]
    fn test_findings_attributed_to_page_url() {
        let result = audit_page("<html></html>", &page_url());
        assert!(result
            .findings
            .iter()
            .all(|f| f.page == "https://example.com/page"));
    }

    #[test]
    fn test_noindex_halves_discoverability_with_valid_canonical() {
        let html = r#"<html><head>
            <link rel="canonical" href="https://example.com/page">
            <meta name="robots" content="noindex">
        </head></html>"#;
        let result = audit_page(html, &page_url());
        assert_eq!(result.category_scores[&Category::Discoverability], 0.5);
    }

    #[test]
    fn test_all_category_scores_within_bounds() {
        let result = audit_page(&minimal_valid_page(), &page_url());
        assert_eq!(result.category_scores.len(), 5);
        for (category, score) in &result.category_scores {
            assert!(
                (0.0..=1.0).contains(score),
                "category {} out of bounds: {}",
                category,
                score
            );
        }
    }
}
