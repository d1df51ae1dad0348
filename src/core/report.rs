// src/core/report.rs

use crate::core::models::{Finding, ScanFindings, ScanSummary};

/// Derives the aggregate counts for a completed scan. The total counts
/// only the two warning-or-worse buckets; recommendations are advisory.
pub fn summarize(findings: &ScanFindings) -> ScanSummary {
    ScanSummary {
        total_issues: findings.critical.len() + findings.warnings.len(),
        critical_issues: findings.critical.len(),
        warnings: findings.warnings.len(),
        recommendations: findings.recommendations.len(),
    }
}

/// Renders a plain-text report: a banner, then one section per non-empty
/// bucket in severity order, each finding as an `element: issue` bullet
/// with its description indented beneath.
pub fn render_text(findings: &ScanFindings) -> String {
    let mut lines = Vec::new();
    lines.push("=".repeat(60));
    lines.push("HTML SEO VULNERABILITY SCAN REPORT".to_string());
    lines.push("=".repeat(60));

    push_section(&mut lines, "CRITICAL ISSUES:", &findings.critical);
    push_section(&mut lines, "WARNINGS:", &findings.warnings);
    push_section(&mut lines, "RECOMMENDATIONS:", &findings.recommendations);

    if findings.is_empty() {
        lines.push(String::new());
        lines.push("No SEO issues found!".to_string());
    }

    lines.join("\n")
}

fn push_section(lines: &mut Vec<String>, heading: &str, findings: &[Finding]) {
    if findings.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    for finding in findings {
        lines.push(format!("  - {}: {}", finding.element, finding.issue));
        lines.push(format!("    {}", finding.description));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Severity;

    fn sample_findings() -> ScanFindings {
        let mut findings = ScanFindings::default();
        findings.critical.push(Finding::new(
            Severity::Critical,
            "Title Tag",
            "Missing title tag",
            "No title tag found in the HTML".to_string(),
        ));
        findings.warnings.push(Finding::new(
            Severity::Warning,
            "H1 Tag",
            "H1 too short",
            "H1 is 5 characters, recommended minimum is 20".to_string(),
        ));
        findings.recommendations.push(Finding::new(
            Severity::Recommendation,
            "URL Structure",
            "Non-descriptive URL",
            "URL appears to use IDs instead of descriptive keywords".to_string(),
        ));
        findings
    }

    #[test]
    fn summary_counts_warnings_and_critical_toward_total() {
        let summary = summarize(&sample_findings());
        assert_eq!(summary.total_issues, 2);
        assert_eq!(summary.critical_issues, 1);
        assert_eq!(summary.warnings, 1);
        assert_eq!(summary.recommendations, 1);
    }

    #[test]
    fn report_lists_buckets_in_severity_order() {
        let report = render_text(&sample_findings());
        let critical = report.find("CRITICAL ISSUES:").expect("critical section");
        let warnings = report.find("WARNINGS:").expect("warnings section");
        let recommendations = report
            .find("RECOMMENDATIONS:")
            .expect("recommendations section");
        assert!(critical < warnings && warnings < recommendations);
        assert!(report.contains("  - Title Tag: Missing title tag"));
        assert!(report.contains("    No title tag found in the HTML"));
    }

    #[test]
    fn empty_buckets_render_the_all_clear_line() {
        let report = render_text(&ScanFindings::default());
        assert!(report.contains("No SEO issues found!"));
        assert!(!report.contains("CRITICAL ISSUES:"));
    }

    #[test]
    fn empty_sections_are_omitted() {
        let mut findings = ScanFindings::default();
        findings.recommendations.push(Finding::new(
            Severity::Recommendation,
            "Header Hierarchy",
            "Limited header structure",
            "Consider using H2-H6 tags to create a logical content hierarchy".to_string(),
        ));
        let report = render_text(&findings);
        assert!(!report.contains("CRITICAL ISSUES:"));
        assert!(!report.contains("WARNINGS:"));
        assert!(report.contains("RECOMMENDATIONS:"));
        assert!(!report.contains("No SEO issues found!"));
    }
}
