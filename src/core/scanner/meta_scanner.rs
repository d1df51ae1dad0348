// src/core/scanner/meta_scanner.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::models::{Finding, ScanFindings, Severity};

static META_DESCRIPTION_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"meta[name="description"]"#).unwrap());

const ELEMENT: &str = "Meta Description";

/// Checks the meta description: presence, emptiness, and length bounds.
pub fn check_meta_description(document: &Html, findings: &mut ScanFindings) {
    let Some(meta) = document.select(&META_DESCRIPTION_SELECTOR).next() else {
        findings.critical.push(Finding::new(
            Severity::Critical,
            ELEMENT,
            "Missing meta description",
            "No meta description tag found".to_string(),
        ));
        return;
    };

    let content = meta.value().attr("content").unwrap_or("").trim().to_string();
    let length = content.chars().count();

    if length == 0 {
        findings.critical.push(Finding::new(
            Severity::Critical,
            ELEMENT,
            "Empty meta description",
            "Meta description is empty".to_string(),
        ));
    } else if length < 120 {
        findings.warnings.push(
            Finding::new(
                Severity::Warning,
                ELEMENT,
                "Meta description too short",
                format!("Meta description is {length} characters, recommended minimum is 120"),
            )
            .with_text(&content),
        );
    } else if length > 160 {
        findings.critical.push(
            Finding::new(
                Severity::Warning,
                ELEMENT,
                "Meta description too long",
                format!("Meta description is {length} characters, recommended maximum is 160"),
            )
            .with_text(&content),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(markup: &str) -> ScanFindings {
        let document = Html::parse_document(markup);
        let mut findings = ScanFindings::default();
        check_meta_description(&document, &mut findings);
        findings
    }

    fn described(length: usize) -> String {
        format!(
            r#"<head><meta name="description" content="{}"></head>"#,
            "a".repeat(length)
        )
    }

    #[test]
    fn missing_meta_description_is_critical() {
        let findings = scan("<head><title>Page</title></head>");
        assert_eq!(findings.critical[0].issue, "Missing meta description");
    }

    #[test]
    fn missing_content_attribute_counts_as_empty() {
        let findings = scan(r#"<head><meta name="description"></head>"#);
        assert_eq!(findings.critical[0].issue, "Empty meta description");
    }

    #[test]
    fn short_description_is_a_warning() {
        let findings = scan(&described(119));
        assert_eq!(findings.warnings[0].issue, "Meta description too short");
        assert!(findings.critical.is_empty());
    }

    #[test]
    fn overlong_description_lands_in_the_critical_bucket() {
        let findings = scan(&described(161));
        assert_eq!(findings.critical[0].issue, "Meta description too long");
        assert_eq!(findings.critical[0].severity, Severity::Warning);
    }

    #[test]
    fn in_range_description_produces_nothing() {
        for length in [120, 140, 160] {
            let findings = scan(&described(length));
            assert!(findings.is_empty(), "expected no findings at {length}");
        }
    }
}
