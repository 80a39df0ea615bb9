//! The fixed battery of per-page rule checks
//!
//! Each rule independently computes a sub-score in [0, 1] and optionally
//! emits one finding. Rules only inspect the parsed document and the page
//! URL; they never touch the network or the clock, so identical input
//! always yields identical output.

use crate::model::{Finding, Severity};
use scraper::{Html, Selector};
use serde_json::Value;
use url::Url;

use super::range::score_range;

/// Target window for `<title>` length, in characters
const TITLE_WINDOW: (usize, usize) = (15, 60);

/// Target window for meta description length, in characters
const DESCRIPTION_WINDOW: (usize, usize) = (70, 160);

/// Looks up the `content` attribute of the first matching `<meta>` tag,
/// treating an empty value as absent
fn meta_content(doc: &Html, selector: &str) -> Option<String> {
    let sel = Selector::parse(selector).unwrap();
    doc.select(&sel)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Title presence and length (metadata)
pub(crate) fn check_title(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let sel = Selector::parse("title").unwrap();
    let title = doc
        .select(&sel)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty());

    let Some(title) = title else {
        findings.push(
            Finding::new("title-missing", "Missing <title>", Severity::Error, 0.0, page)
                .with_suggestion("Add a descriptive <title> of 15-60 characters"),
        );
        return 0.0;
    };

    let len = title.chars().count();
    let (min, max) = TITLE_WINDOW;
    let score = score_range(min, max, len);
    if score < 1.0 {
        findings.push(
            Finding::new("title-length", "Sub-optimal <title> length", Severity::Warn, score, page)
                .with_evidence(format!("{} characters", len))
                .with_suggestion(format!("Aim for {}-{} characters", min, max)),
        );
    }
    score
}

/// Meta description presence and length (metadata)
pub(crate) fn check_meta_description(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let Some(description) = meta_content(doc, r#"meta[name="description"]"#) else {
        findings.push(
            Finding::new(
                "meta-description-missing",
                "Missing meta description",
                Severity::Warn,
                0.0,
                page,
            )
            .with_suggestion("Add a meta description of 70-160 characters"),
        );
        return 0.0;
    };

    let len = description.chars().count();
    let (min, max) = DESCRIPTION_WINDOW;
    let score = score_range(min, max, len);
    if score < 1.0 {
        findings.push(
            Finding::new(
                "meta-description-length",
                "Sub-optimal meta description length",
                Severity::Info,
                score,
                page,
            )
            .with_evidence(format!("{} characters", len))
            .with_suggestion(format!("Aim for {}-{} characters", min, max)),
        );
    }
    score
}

/// Open Graph coverage and Twitter card presence (metadata)
///
/// Returns `(og_score, twitter_score)`. The Open Graph score maps the count
/// of present og:title/og:description/og:image tags discretely; the Twitter
/// score is a binary presence signal.
pub(crate) fn check_social_meta(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> (f64, f64) {
    let og_title = meta_content(doc, r#"meta[property="og:title"]"#).is_some();
    let og_description = meta_content(doc, r#"meta[property="og:description"]"#).is_some();
    let og_image = meta_content(doc, r#"meta[property="og:image"]"#).is_some();

    let present = [og_title, og_description, og_image]
        .iter()
        .filter(|p| **p)
        .count();
    let og_score = match present {
        3 => 1.0,
        2 => 0.6,
        1 => 0.3,
        _ => 0.0,
    };

    // og:image is called out on its own regardless of the count-derived
    // score: link previews degrade badly without it.
    if !og_image {
        findings.push(
            Finding::new("og-image-missing", "Missing og:image", Severity::Warn, og_score, page)
                .with_suggestion("Add an og:image meta tag for link previews"),
        );
    }

    let twitter = meta_content(doc, r#"meta[name="twitter:card"]"#).is_some();
    let twitter_score = if twitter {
        1.0
    } else {
        findings.push(
            Finding::new(
                "twitter-card-missing",
                "Missing Twitter card",
                Severity::Info,
                0.0,
                page,
            )
            .with_suggestion("Add a twitter:card meta tag"),
        );
        0.0
    };

    (og_score, twitter_score)
}

/// The resolution outcome of a canonical link's raw href
///
/// Modeled explicitly so the invalid path is a testable branch rather than
/// a swallowed parse error.
#[derive(Debug, Clone, PartialEq)]
pub enum CanonicalTarget {
    /// No canonical link element on the page
    Missing,
    /// The raw href was already an absolute URL
    Absolute(Url),
    /// The raw href was relative and resolved against the page URL
    Resolved { raw: String, resolved: Url },
    /// The raw href could not be resolved to a URL at all
    Invalid(String),
}

/// Classifies the canonical link of a page
pub fn canonical_target(doc: &Html, base: &Url) -> CanonicalTarget {
    let sel = Selector::parse(r#"link[rel="canonical"]"#).unwrap();
    let raw = doc
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("href"))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty());

    let Some(raw) = raw else {
        return CanonicalTarget::Missing;
    };

    if let Ok(url) = Url::parse(&raw) {
        return CanonicalTarget::Absolute(url);
    }
    match base.join(&raw) {
        Ok(resolved) => CanonicalTarget::Resolved { raw, resolved },
        Err(_) => CanonicalTarget::Invalid(raw),
    }
}

/// Canonical link presence and resolvability (discoverability)
pub(crate) fn check_canonical(
    doc: &Html,
    base: &Url,
    page: &str,
    findings: &mut Vec<Finding>,
) -> f64 {
    match canonical_target(doc, base) {
        CanonicalTarget::Missing => {
            findings.push(
                Finding::new(
                    "canonical-missing",
                    "Missing canonical link",
                    Severity::Warn,
                    0.0,
                    page,
                )
                .with_suggestion(format!("Add <link rel=\"canonical\" href=\"{}\">", page)),
            );
            0.0
        }
        CanonicalTarget::Absolute(_) => 1.0,
        CanonicalTarget::Resolved { raw, resolved } => {
            findings.push(
                Finding::new(
                    "canonical-relative",
                    "Canonical link is relative",
                    Severity::Info,
                    0.9,
                    page,
                )
                .with_evidence(format!("\"{}\" resolves to {}", raw, resolved))
                .with_suggestion("Use an absolute URL in the canonical link"),
            );
            0.9
        }
        CanonicalTarget::Invalid(raw) => {
            findings.push(
                Finding::new(
                    "canonical-invalid",
                    "Canonical link is not a valid URL",
                    Severity::Warn,
                    0.2,
                    page,
                )
                .with_evidence(raw),
            );
            0.2
        }
    }
}

/// `html lang` and viewport meta presence (i18n/mobile)
///
/// Each binary presence contributes 0.5 to the combined sub-score; each
/// absence emits its own finding.
pub(crate) fn check_lang_viewport(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let sel = Selector::parse("html").unwrap();
    let lang = doc
        .select(&sel)
        .next()
        .and_then(|el| el.value().attr("lang"))
        .map(str::trim)
        .is_some_and(|s| !s.is_empty());
    if !lang {
        findings.push(
            Finding::new(
                "html-lang-missing",
                "Missing lang attribute on <html>",
                Severity::Warn,
                0.0,
                page,
            )
            .with_suggestion("Declare the page language, e.g. <html lang=\"en\">"),
        );
    }

    let viewport = meta_content(doc, r#"meta[name="viewport"]"#).is_some();
    if !viewport {
        findings.push(
            Finding::new(
                "viewport-missing",
                "Missing viewport meta tag",
                Severity::Warn,
                0.0,
                page,
            )
            .with_suggestion("Add <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">"),
        );
    }

    (lang as u8 as f64) * 0.5 + (viewport as u8 as f64) * 0.5
}

/// `<h1>` count (semantics)
pub(crate) fn check_headings(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let sel = Selector::parse("h1").unwrap();
    let count = doc.select(&sel).count();
    match count {
        0 => {
            findings.push(
                Finding::new("h1-missing", "Missing <h1> heading", Severity::Warn, 0.0, page)
                    .with_suggestion("Add exactly one <h1> describing the page"),
            );
            0.0
        }
        1 => 1.0,
        n => {
            findings.push(
                Finding::new("h1-multiple", "Multiple <h1> headings", Severity::Info, 0.4, page)
                    .with_evidence(format!("{} <h1> elements", n))
                    .with_suggestion("Keep a single <h1> per page"),
            );
            0.4
        }
    }
}

/// Image alt-text coverage (semantics)
///
/// A page with no images is vacuously compliant. An `alt=""` attribute
/// counts as present; only images lacking the attribute entirely are
/// considered missing.
pub(crate) fn check_image_alt(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let sel = Selector::parse("img").unwrap();
    let total = doc.select(&sel).count();
    if total == 0 {
        return 1.0;
    }

    let missing = doc
        .select(&sel)
        .filter(|el| el.value().attr("alt").is_none())
        .count();
    let ratio = missing as f64 / total as f64;
    let score = if ratio <= 0.10 {
        1.0
    } else if ratio <= 0.30 {
        0.6
    } else {
        0.2
    };

    if missing > 0 {
        let severity = if ratio > 0.30 {
            Severity::Warn
        } else {
            Severity::Info
        };
        findings.push(
            Finding::new("img-alt-missing", "Images without alt text", severity, score, page)
                .with_evidence(format!("{} of {} images lack alt", missing, total))
                .with_suggestion(format!("Add alt attributes to {} image(s)", missing)),
        );
    }
    score
}

/// Empty anchor text (semantics)
pub(crate) fn check_anchor_text(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let sel = Selector::parse("a").unwrap();
    let anchors: Vec<_> = doc.select(&sel).collect();
    if anchors.is_empty() {
        return 1.0;
    }

    let empty = anchors
        .iter()
        .filter(|el| el.text().collect::<String>().trim().is_empty())
        .count();
    let score = match empty {
        0 => 1.0,
        1..=2 => 0.7,
        _ => 0.4,
    };

    if empty > 0 {
        findings.push(
            Finding::new(
                "anchor-text-empty",
                "Anchors with empty text",
                Severity::Info,
                score,
                page,
            )
            .with_evidence(format!("{} of {} anchors have no text", empty, anchors.len()))
            .with_suggestion("Give every link descriptive text content"),
        );
    }
    score
}

/// Page-level robots noindex directive (discoverability)
///
/// Indexability is binary: a noindex directive zeroes the sub-score no
/// matter what the rest of the page looks like.
pub(crate) fn check_noindex(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let noindex = meta_content(doc, r#"meta[name="robots"]"#)
        .is_some_and(|content| content.to_lowercase().contains("noindex"));
    if noindex {
        findings.push(
            Finding::new(
                "robots-noindex",
                "Page is marked noindex",
                Severity::Error,
                0.0,
                page,
            )
            .with_suggestion("Remove the noindex directive if this page should be indexed"),
        );
        0.0
    } else {
        1.0
    }
}

/// The parse outcome of one structured-data script block
#[derive(Debug, Clone, PartialEq)]
pub enum StructuredBlock {
    /// The block parsed as a JSON document
    Parsed(Value),
    /// The block was declared as JSON-LD but did not parse
    Invalid,
}

/// Parses every JSON-LD script block on the page
pub fn structured_blocks(doc: &Html) -> Vec<StructuredBlock> {
    let sel = Selector::parse(r#"script[type="application/ld+json"]"#).unwrap();
    doc.select(&sel)
        .map(|el| {
            let payload = el.text().collect::<String>();
            match serde_json::from_str::<Value>(&payload) {
                Ok(value) => StructuredBlock::Parsed(value),
                Err(_) => StructuredBlock::Invalid,
            }
        })
        .collect()
}

/// JSON-LD structured data presence (structured)
///
/// Invalid blocks are dropped silently; only the absence of any
/// successfully parsed block is reported.
pub(crate) fn check_structured_data(doc: &Html, page: &str, findings: &mut Vec<Finding>) -> f64 {
    let parsed = structured_blocks(doc)
        .iter()
        .any(|b| matches!(b, StructuredBlock::Parsed(_)));
    if parsed {
        1.0
    } else {
        findings.push(
            Finding::new(
                "jsonld-missing",
                "No structured data found",
                Severity::Info,
                0.0,
                page,
            )
            .with_suggestion("Add a JSON-LD block describing the page entity"),
        );
        0.0
    }
}
