// src/core/scanner/title_scanner.rs

use once_cell::sync::Lazy;
use scraper::{Html, Selector};

use crate::core::models::{Finding, ScanFindings, Severity};

static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("title").unwrap());

const ELEMENT: &str = "Title Tag";

/// Checks the document's title tag: presence, uniqueness, and length tiers.
pub fn check_title(document: &Html, findings: &mut ScanFindings) {
    let titles: Vec<_> = document.select(&TITLE_SELECTOR).collect();

    if titles.is_empty() {
        findings.critical.push(Finding::new(
            Severity::Critical,
            ELEMENT,
            "Missing title tag",
            "No title tag found in the HTML".to_string(),
        ));
        return;
    }
    if titles.len() > 1 {
        findings.critical.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "Multiple title tags",
            format!("Found {} title tags, should have only one", titles.len()),
        ));
        return;
    }

    let text = titles[0].text().collect::<String>().trim().to_string();
    let length = text.chars().count();

    if length == 0 {
        findings.critical.push(Finding::new(
            Severity::Critical,
            ELEMENT,
            "Empty title tag",
            "Title tag is empty".to_string(),
        ));
    } else if length < 30 {
        findings.warnings.push(
            Finding::new(
                Severity::Warning,
                ELEMENT,
                "Title too short",
                format!("Title is {length} characters, recommended minimum is 30"),
            )
            .with_text(&text),
        );
    } else if length > 160 {
        findings.critical.push(
            Finding::new(
                Severity::Warning,
                ELEMENT,
                "Title too long",
                format!("Title is {length} characters, recommended maximum is 160"),
            )
            .with_text(&text),
        );
    } else if length < 150 {
        findings.recommendations.push(
            Finding::new(
                Severity::Recommendation,
                ELEMENT,
                "Title could be optimized",
                format!("Title is {length} characters, ideal range is 150-160"),
            )
            .with_text(&text),
        );
    }
}
