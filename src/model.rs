//! Core data model for audits and reports
//!
//! This module defines the types shared across the auditor, the aggregator,
//! and the report writers:
//! - Findings with severity and normalized scores
//! - The closed category enumeration with fixed weights
//! - Per-page audit results
//! - The final report shape serialized to JSON

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Report format version, bumped when the JSON shape changes
pub const REPORT_VERSION: u32 = 1;

/// Severity of a finding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warn,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Warn => write!(f, "warn"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// The five weighted SEO dimensions
///
/// This is a closed enumeration. Each category carries a fixed weight and
/// the weights sum to exactly 1.0; the aggregator never renormalizes them,
/// even when a category's evaluation was degenerate for every page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Discoverability,
    Semantics,
    Metadata,
    I18nMobile,
    Structured,
}

impl Category {
    /// All categories in their canonical order
    pub const ALL: [Category; 5] = [
        Category::Discoverability,
        Category::Semantics,
        Category::Metadata,
        Category::I18nMobile,
        Category::Structured,
    ];

    /// The fixed weight of this category in the overall score
    pub fn weight(self) -> f64 {
        match self {
            Category::Discoverability => 0.25,
            Category::Semantics => 0.25,
            Category::Metadata => 0.25,
            Category::I18nMobile => 0.15,
            Category::Structured => 0.10,
        }
    }

    /// The snake_case identifier used in reports
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Discoverability => "discoverability",
            Category::Semantics => "semantics",
            Category::Metadata => "metadata",
            Category::I18nMobile => "i18n_mobile",
            Category::Structured => "structured",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One detected issue or observation about a page
///
/// Findings are immutable once produced. The `id` is a stable slug used for
/// deduplication and testing; it is not unique across pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    /// Stable slug identifying the rule that fired (e.g. "title-missing")
    pub id: String,

    /// Short human-readable summary
    pub title: String,

    /// Severity of the issue
    pub severity: Severity,

    /// Normalized sub-score associated with this finding, in [0, 1]
    pub score: f64,

    /// Actionable fix suggestion, when one exists
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,

    /// Supporting evidence (counts, lengths, raw attribute values)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,

    /// The page this finding applies to
    pub page: String,
}

impl Finding {
    /// Creates a finding with no suggestion or evidence
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        severity: Severity,
        score: f64,
        page: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            severity,
            score,
            suggestion: None,
            evidence: None,
            page: page.into(),
        }
    }

    /// Attaches a fix suggestion
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Attaches supporting evidence
    pub fn with_evidence(mut self, evidence: impl Into<String>) -> Self {
        self.evidence = Some(evidence.into());
        self
    }
}

/// The result of auditing a single page
///
/// Created once per fetched page and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PageAuditResult {
    /// The canonical URL of the audited page
    pub url: String,

    /// Sub-score per category, each in [0, 1]
    pub category_scores: BTreeMap<Category, f64>,

    /// Findings in rule-evaluation order
    pub findings: Vec<Finding>,
}

/// Final score and weight for one category in the report
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CategoryScore {
    /// Blended category score, rounded to 2 decimal places
    pub score: f64,

    /// The fixed category weight
    pub weight: f64,
}

/// The final audit report
///
/// Derived, read-only, produced exactly once per run. The JSON field names
/// and types are a stable boundary shape consumed by CI tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report format version
    pub version: u32,

    /// The audit target as the user supplied it
    pub target: String,

    /// Number of pages that were audited
    pub pages: usize,

    /// Overall score, an integer in 0..=100
    pub score: u32,

    /// Per-category blended scores and weights
    pub categories: BTreeMap<Category, CategoryScore>,

    /// All findings, page findings first in crawl order, site findings last
    pub findings: Vec<Finding>,
}
