//! JSON report rendering
//!
//! The JSON output is the stable boundary shape consumed by CI tooling:
//! field names, the integer 0-100 score, and the 2-decimal category scores
//! are all fixed.

use crate::model::Report;

/// Serializes the report as pretty-printed JSON
pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, CategoryScore, Finding, Report, Severity, REPORT_VERSION};
    use serde_json::Value;
    use std::collections::BTreeMap;

    fn sample_report() -> Report {
        let mut categories = BTreeMap::new();
        for category in Category::ALL {
            categories.insert(
                category,
                CategoryScore {
                    score: 0.87,
                    weight: category.weight(),
                },
            );
        }
        Report {
            version: REPORT_VERSION,
            target: "https://example.com".to_string(),
            pages: 3,
            score: 87,
            categories,
            findings: vec![Finding::new(
                "title-missing",
                "Missing <title>",
                Severity::Error,
                0.0,
                "https://example.com/",
            )
            .with_suggestion("Add a descriptive <title> of 15-60 characters")],
        }
    }

    #[test]
    fn test_json_shape_matches_boundary_contract() {
        let json: Value = serde_json::from_str(&render_json(&sample_report()).unwrap()).unwrap();

        assert_eq!(json["version"], 1);
        assert_eq!(json["target"], "https://example.com");
        assert_eq!(json["pages"], 3);
        assert_eq!(json["score"], 87);
        assert!(json["score"].is_u64(), "score must be an integer");

        let categories = json["categories"].as_object().unwrap();
        assert_eq!(categories.len(), 5);
        for key in [
            "discoverability",
            "semantics",
            "metadata",
            "i18n_mobile",
            "structured",
        ] {
            let entry = &categories[key];
            assert!(entry["score"].is_number(), "{} missing score", key);
            assert!(entry["weight"].is_number(), "{} missing weight", key);
        }
        assert_eq!(categories["i18n_mobile"]["weight"], 0.15);

        let finding = &json["findings"][0];
        assert_eq!(finding["id"], "title-missing");
        assert_eq!(finding["severity"], "error");
        assert_eq!(finding["page"], "https://example.com/");
        assert!(finding.get("evidence").is_none());
    }

    #[test]
    fn test_json_round_trips() {
        let report = sample_report();
        let json = render_json(&report).unwrap();
        let parsed: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
