// src/core/scanner/mod.rs

// One module per check family; `evaluate` below runs them all in order.
pub mod heading_scanner;
pub mod image_scanner;
pub mod link_scanner;
pub mod meta_scanner;
pub mod title_scanner;
pub mod url_scanner;

use scraper::Html;
use tracing::debug;
use url::Url;

use crate::core::models::ScanFindings;

/// Runs every on-page check against a parsed document and collects the
/// findings into fresh severity buckets.
///
/// Checks run in a fixed order and only ever append to the buckets, so
/// repeated calls on the same document yield identical results. The URL
/// structure check runs only when a source URL is available.
///
/// # Arguments
///
/// * `document` - The parsed page under evaluation.
/// * `source_url` - The resolved URL the page was fetched from, if any.
///
/// # Returns
///
/// A `ScanFindings` with one ordered bucket per severity tier.
pub fn evaluate(document: &Html, source_url: Option<&Url>) -> ScanFindings {
    let mut findings = ScanFindings::default();

    title_scanner::check_title(document, &mut findings);
    heading_scanner::check_h1(document, &mut findings);
    heading_scanner::check_header_hierarchy(document, &mut findings);
    meta_scanner::check_meta_description(document, &mut findings);
    image_scanner::check_images(document, &mut findings);
    link_scanner::check_canonical(document, &mut findings);
    if let Some(url) = source_url {
        url_scanner::check_url_structure(url, &mut findings);
    }

    debug!(
        critical = findings.critical.len(),
        warnings = findings.warnings.len(),
        recommendations = findings.recommendations.len(),
        "Page evaluation finished."
    );
    findings
}
