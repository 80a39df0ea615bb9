//! Markdown summary rendering
//!
//! Generates a human-readable markdown summary of an audit report, suitable
//! for posting into PR comments or CI artifacts.

use crate::model::{Report, Severity};

/// Formats a report as markdown
pub fn render_markdown(report: &Report) -> String {
    let mut md = String::new();

    md.push_str("# SEO Audit Report\n\n");
    md.push_str(&format!("- **Target**: {}\n", report.target));
    md.push_str(&format!("- **Pages audited**: {}\n", report.pages));
    md.push_str(&format!("- **Score**: {} / 100\n\n", report.score));

    md.push_str("## Categories\n\n");
    md.push_str("| Category | Score | Weight |\n");
    md.push_str("|----------|-------|--------|\n");
    for (category, entry) in &report.categories {
        md.push_str(&format!(
            "| {} | {:.2} | {:.2} |\n",
            category, entry.score, entry.weight
        ));
    }
    md.push('\n');

    md.push_str(&format!("## Findings ({})\n\n", report.findings.len()));
    if report.findings.is_empty() {
        md.push_str("No findings.\n");
    } else {
        for severity in [Severity::Error, Severity::Warn, Severity::Info] {
            let group: Vec<_> = report
                .findings
                .iter()
                .filter(|f| f.severity == severity)
                .collect();
            if group.is_empty() {
                continue;
            }
            md.push_str(&format!("### {}\n\n", severity));
            for finding in group {
                md.push_str(&format!("- **{}** ({}): {}", finding.id, finding.page, finding.title));
                if let Some(evidence) = &finding.evidence {
                    md.push_str(&format!(" — {}", evidence));
                }
                if let Some(suggestion) = &finding.suggestion {
                    md.push_str(&format!(". {}", suggestion));
                }
                md.push('\n');
            }
            md.push('\n');
        }
    }

    md
}
