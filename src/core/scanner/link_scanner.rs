// src/core/scanner/link_scanner.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::models::{Finding, ScanFindings, Severity};

static CANONICAL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"link[rel~="canonical"]"#).unwrap());

const ELEMENT: &str = "Canonical Tag";

/// Checks the canonical link: exactly one, with a non-empty href.
pub fn check_canonical(document: &Html, findings: &mut ScanFindings) {
    let canonicals: Vec<_> = document.select(&CANONICAL_SELECTOR).collect();

    if canonicals.is_empty() {
        findings.critical.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "Missing canonical tag",
            "No canonical tag found, could lead to duplicate content issues".to_string(),
        ));
    } else if canonicals.len() > 1 {
        findings.critical.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "Multiple canonical tags",
            format!("Found {} canonical tags, should have only one", canonicals.len()),
        ));
    } else if canonicals[0]
        .value()
        .attr("href")
        .unwrap_or("")
        .trim()
        .is_empty()
    {
        findings.critical.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "Empty canonical URL",
            "Canonical tag has empty href attribute".to_string(),
        ));
    }
}
