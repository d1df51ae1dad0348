// src/core/scanner/image_scanner.rs

use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

use crate::core::models::{Finding, ScanFindings, Severity};

static IMG_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").unwrap());

/// Matches placeholder-style filenames such as `img1.jpg` or `photo.png`.
static GENERIC_FILENAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(img|image|photo|pic)\d*\.(jpg|jpeg|png|gif|webp)$").unwrap());

const ALT_ELEMENT: &str = "Image ALT";
const FILENAME_ELEMENT: &str = "Image Filename";

/// Checks every image's ALT text and filename.
///
/// Missing, empty, and over-long ALT attributes are aggregated into one
/// finding each; short-but-present ALT text and generic filenames are
/// reported per image. Documents without images produce no findings.
pub fn check_images(document: &Html, findings: &mut ScanFindings) {
    let images: Vec<_> = document.select(&IMG_SELECTOR).collect();
    if images.is_empty() {
        return;
    }

    let mut missing_alt = 0usize;
    let mut empty_alt = 0usize;
    let mut long_alt = 0usize;
    let mut last_long_alt: Option<String> = None;

    for image in &images {
        match image.value().attr("alt") {
            None => missing_alt += 1,
            Some(alt) if alt.trim().is_empty() => empty_alt += 1,
            Some(alt) => {
                let length = alt.chars().count();
                if length > 125 {
                    long_alt += 1;
                    last_long_alt = Some(alt.to_string());
                } else if length < 80 {
                    findings.recommendations.push(
                        Finding::new(
                            Severity::Recommendation,
                            ALT_ELEMENT,
                            "ALT text could be longer",
                            format!(
                                "Image ALT text is {length} characters, ideal range is 80-125"
                            ),
                        )
                        .with_text(alt),
                    );
                }
            }
        }

        if let Some(src) = image.value().attr("src") {
            if !src.is_empty() {
                let filename = base_filename(src);
                if GENERIC_FILENAME.is_match(&filename) {
                    findings.recommendations.push(Finding::new(
                        Severity::Recommendation,
                        FILENAME_ELEMENT,
                        "Non-descriptive image filename",
                        format!("Consider using descriptive filename instead of \"{filename}\""),
                    ));
                }
            }
        }
    }

    if missing_alt > 0 {
        findings.critical.push(Finding::new(
            Severity::Warning,
            ALT_ELEMENT,
            "Missing ALT attributes",
            format!("{missing_alt} images missing ALT attributes"),
        ));
    }
    if empty_alt > 0 {
        findings.warnings.push(Finding::new(
            Severity::Warning,
            ALT_ELEMENT,
            "Empty ALT attributes",
            format!("{empty_alt} images have empty ALT attributes"),
        ));
    }
    if long_alt > 0 {
        let mut finding = Finding::new(
            Severity::Warning,
            ALT_ELEMENT,
            "ALT text too long",
            format!("{long_alt} images have ALT text longer than 125 characters"),
        );
        // The sample text is the last ALT that exceeded the limit.
        if let Some(text) = &last_long_alt {
            finding = finding.with_text(text);
        }
        findings.warnings.push(finding);
    }
}

fn base_filename(src: &str) -> String {
    src.rsplit('/').next().unwrap_or(src).to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(markup: &str) -> ScanFindings {
        let document = Html::parse_document(markup);
        let mut findings = ScanFindings::default();
        check_images(&document, &mut findings);
        findings
    }

    #[test]
    fn documents_without_images_produce_nothing() {
        let findings = scan("<body><p>Text only</p></body>");
        assert!(findings.is_empty());
    }

    #[test]
    fn missing_alt_attributes_aggregate_into_the_critical_bucket() {
        let findings = scan(r#"<body><img src="a.jpg"><img src="b.jpg"></body>"#);
        assert_eq!(findings.critical.len(), 1);
        assert_eq!(findings.critical[0].issue, "Missing ALT attributes");
        assert!(findings.critical[0].description.starts_with("2 images"));
    }

    #[test]
    fn empty_alt_attributes_aggregate_into_warnings() {
        let findings = scan(r#"<body><img src="a.jpg" alt="  "><img src="b.jpg" alt=""></body>"#);
        assert_eq!(findings.warnings[0].issue, "Empty ALT attributes");
        assert!(findings.warnings[0].description.starts_with("2 images"));
        assert!(findings.critical.is_empty());
    }

    #[test]
    fn short_alt_text_is_recommended_per_image() {
        let findings = scan(
            r#"<body><img src="a.jpg" alt="Short one"><img src="b.jpg" alt="Short two"></body>"#,
        );
        let longer: Vec<_> = findings
            .recommendations
            .iter()
            .filter(|finding| finding.issue == "ALT text could be longer")
            .collect();
        assert_eq!(longer.len(), 2);
        assert_eq!(longer[0].actual_text.as_deref(), Some("Short one"));
    }

    #[test]
    fn long_alt_aggregate_exposes_the_last_overlong_text() {
        let first = "a".repeat(126);
        let second = "b".repeat(130);
        let findings = scan(&format!(
            r#"<body><img src="a.jpg" alt="{first}"><img src="b.jpg" alt="{second}"><img src="c.jpg" alt="{}"></body>"#,
            "c".repeat(100)
        ));
        let long = findings
            .warnings
            .iter()
            .find(|finding| finding.issue == "ALT text too long")
            .expect("long ALT aggregate");
        assert!(long.description.starts_with("2 images"));
        assert_eq!(long.actual_text.as_deref(), Some(second.as_str()));
    }

    #[test]
    fn alt_boundaries_produce_nothing() {
        for length in [80, 125] {
            let findings = scan(&format!(
                r#"<body><img src="team-offsite.jpg" alt="{}"></body>"#,
                "a".repeat(length)
            ));
            assert!(findings.is_empty(), "expected no findings at {length}");
        }
    }

    #[test]
    fn generic_filenames_are_flagged() {
        let alt = "a".repeat(90);
        let findings = scan(&format!(
            r#"<body><img src="/assets/IMG2.PNG" alt="{alt}"><img src="photo.webp" alt="{alt}"></body>"#
        ));
        let flagged: Vec<_> = findings
            .recommendations
            .iter()
            .filter(|finding| finding.issue == "Non-descriptive image filename")
            .collect();
        assert_eq!(flagged.len(), 2);
        assert!(flagged[0].description.contains("\"img2.png\""));
    }

    #[test]
    fn descriptive_filenames_are_not_flagged() {
        let alt = "a".repeat(90);
        let findings = scan(&format!(
            r#"<body><img src="/assets/team-photo.jpg" alt="{alt}"><img src="picture-of-sunset.png" alt="{alt}"></body>"#
        ));
        assert!(findings.recommendations.is_empty());
    }
}
