// src/core/scanner/url_scanner.rs

use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

use crate::core::models::{Finding, ScanFindings, Severity};

/// Matches id-style segments in a request target, e.g. `/page42`,
/// `?id=42`, or `&post=7`.
static ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[/?&](id|page|post|article)=?\d+").unwrap());

const ELEMENT: &str = "URL Structure";

/// Checks the source URL's structure. Root and empty paths are left alone.
///
/// Underscore and length checks look at the path; the id-pattern check
/// looks at the path plus the query so query-carried ids are caught too.
/// The three checks are independent.
pub fn check_url_structure(url: &Url, findings: &mut ScanFindings) {
    let path = url.path();
    if path.is_empty() || path == "/" {
        return;
    }

    if path.contains('_') {
        findings.warnings.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "Underscores in URL",
            "URL contains underscores, hyphens are preferred for SEO".to_string(),
        ));
    }

    let length = path.chars().count();
    if length > 100 {
        findings.warnings.push(Finding::new(
            Severity::Warning,
            ELEMENT,
            "URL too long",
            format!("URL path is {length} characters, consider shortening"),
        ));
    }

    let request_target = match url.query() {
        Some(query) => format!("{path}?{query}"),
        None => path.to_string(),
    };
    if ID_PATTERN.is_match(&request_target) {
        findings.recommendations.push(Finding::new(
            Severity::Recommendation,
            ELEMENT,
            "Non-descriptive URL",
            "URL appears to use IDs instead of descriptive keywords".to_string(),
        ));
    }
}
