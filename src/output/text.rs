//! Console text rendering

use crate::model::{Report, Severity};

/// Formats a report as a plain-text console summary
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str(&format!("SEO audit of {}\n", report.target));
    out.push_str(&format!(
        "Score: {}/100 across {} page(s)\n\n",
        report.score, report.pages
    ));

    out.push_str("Categories:\n");
    for (category, entry) in &report.categories {
        out.push_str(&format!(
            "  {:<16} {:>5.2}  (weight {:.2})\n",
            category.to_string(),
            entry.score,
            entry.weight
        ));
    }

    let errors = count(report, Severity::Error);
    let warns = count(report, Severity::Warn);
    let infos = count(report, Severity::Info);
    out.push_str(&format!(
        "\nFindings: {} error(s), {} warning(s), {} note(s)\n",
        errors, warns, infos
    ));

    for finding in &report.findings {
        out.push_str(&format!(
            "  [{}] {} — {} ({})\n",
            finding.severity, finding.id, finding.title, finding.page
        ));
        if let Some(suggestion) = &finding.suggestion {
            out.push_str(&format!("         fix: {}\n", suggestion));
        }
    }

    out
}

fn count(report: &Report, severity: Severity) -> usize {
    report
        .findings
        .iter()
        .filter(|f| f.severity == severity)
        .count()
}
