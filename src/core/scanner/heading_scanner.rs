// src/core/scanner/heading_scanner.rs

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};

use crate::core::models::{Finding, ScanFindings, Severity};

static H1_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("h1").unwrap());
static HEADER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("h1, h2, h3, h4, h5, h6").unwrap());

const H1_ELEMENT: &str = "H1 Tag";
const HIERARCHY_ELEMENT: &str = "Header Hierarchy";

/// Checks the document's H1 tag: presence, uniqueness, and length.
pub fn check_h1(document: &Html, findings: &mut ScanFindings) {
    let h1_tags: Vec<_> = document.select(&H1_SELECTOR).collect();

    if h1_tags.is_empty() {
        findings.critical.push(Finding::new(
            Severity::Critical,
            H1_ELEMENT,
            "Missing H1 tag",
            "No H1 tag found on the page".to_string(),
        ));
        return;
    }
    if h1_tags.len() > 1 {
        findings.critical.push(Finding::new(
            Severity::Warning,
            H1_ELEMENT,
            "Multiple H1 tags",
            format!("Found {} H1 tags, should have only one per page", h1_tags.len()),
        ));
        return;
    }

    let text = h1_tags[0].text().collect::<String>().trim().to_string();
    let length = text.chars().count();

    if length == 0 {
        findings.critical.push(Finding::new(
            Severity::Critical,
            H1_ELEMENT,
            "Empty H1 tag",
            "H1 tag is empty".to_string(),
        ));
    } else if length < 20 {
        findings.warnings.push(
            Finding::new(
                Severity::Warning,
                H1_ELEMENT,
                "H1 too short",
                format!("H1 is {length} characters, recommended minimum is 20"),
            )
            .with_text(&text),
        );
    } else if length > 70 {
        findings.warnings.push(
            Finding::new(
                Severity::Warning,
                H1_ELEMENT,
                "H1 too long",
                format!("H1 is {length} characters, recommended maximum is 70"),
            )
            .with_text(&text),
        );
    }
}

/// Walks all H1-H6 headers in document order, flagging level skips and
/// empty headers.
///
/// The previous level advances after every header, empty or not, so one
/// empty header does not hide a following jump.
pub fn check_header_hierarchy(document: &Html, findings: &mut ScanFindings) {
    let headers: Vec<_> = document.select(&HEADER_SELECTOR).collect();

    if headers.len() <= 1 {
        findings.recommendations.push(Finding::new(
            Severity::Recommendation,
            HIERARCHY_ELEMENT,
            "Limited header structure",
            "Consider using H2-H6 tags to create a logical content hierarchy".to_string(),
        ));
        return;
    }

    let mut previous_level = 0;
    let mut skips = Vec::new();

    for header in &headers {
        let level = header_level(header);

        if previous_level > 0 && level > previous_level + 1 {
            skips.push(format!(
                "Header hierarchy jumps from H{previous_level} to H{level}"
            ));
        }

        if header.text().collect::<String>().trim().is_empty() {
            findings.critical.push(Finding::new(
                Severity::Warning,
                &format!("H{level} Tag"),
                &format!("Empty H{level} tag"),
                format!("Found empty H{level} tag"),
            ));
        }

        previous_level = level;
    }

    for skip in skips {
        findings.warnings.push(Finding::new(
            Severity::Warning,
            HIERARCHY_ELEMENT,
            "Header hierarchy skip",
            skip,
        ));
    }
}

fn header_level(header: &ElementRef<'_>) -> u32 {
    header
        .value()
        .name()
        .strip_prefix('h')
        .and_then(|digit| digit.parse().ok())
        .unwrap_or(0)
}
