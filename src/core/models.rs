// src/core/models.rs

use serde::{Deserialize, Serialize};

// --- Core Data Models ---

/// Severity tier of a single finding, ordered by actionability.
///
/// Serialized under the legacy `type` field as `CRITICAL` / `WARNING` /
/// `RECOMMENDATION` for wire compatibility with existing consumers.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Critical,
    Warning,
    Recommendation,
}

/// One reported SEO issue: the element it concerns, a short issue label,
/// and a human-readable description. `actual_text` carries the offending
/// text when the check has one to show.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Finding {
    #[serde(rename = "type")]
    pub severity: Severity,
    pub element: String,
    pub issue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_text: Option<String>,
    pub description: String,
}

impl Finding {
    pub fn new(severity: Severity, element: &str, issue: &str, description: String) -> Self {
        Self {
            severity,
            element: element.to_string(),
            issue: issue.to_string(),
            actual_text: None,
            description,
        }
    }

    /// Attaches the text the finding was raised about.
    pub fn with_text(mut self, text: &str) -> Self {
        self.actual_text = Some(text.to_string());
        self
    }
}

/// The three severity buckets a scan fills, each in insertion order.
///
/// The `critical` bucket keeps its historical wire name `vulnerabilities`.
/// Which bucket a finding lands in is decided by the check that produced it,
/// not by its severity field alone.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanFindings {
    #[serde(rename = "vulnerabilities")]
    pub critical: Vec<Finding>,
    pub warnings: Vec<Finding>,
    pub recommendations: Vec<Finding>,
}

impl ScanFindings {
    pub fn is_empty(&self) -> bool {
        self.critical.is_empty() && self.warnings.is_empty() && self.recommendations.is_empty()
    }
}

/// Aggregate issue counts derived from a completed scan.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScanSummary {
    pub total_issues: usize,
    pub critical_issues: usize,
    pub warnings: usize,
    pub recommendations: usize,
}

/// Readable content isolated from a parsed page, consumed by the
/// summarization pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExtractedContent {
    pub title: String,
    pub meta_description: String,
    pub body_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_serializes_under_legacy_names() {
        let finding = Finding::new(
            Severity::Critical,
            "Title Tag",
            "Missing title tag",
            "No title tag found in the HTML".to_string(),
        );
        let json = serde_json::to_value(&finding).expect("serialize finding");
        assert_eq!(json["type"], "CRITICAL");
        assert_eq!(json["element"], "Title Tag");
        assert!(json.get("actual_text").is_none());
    }

    #[test]
    fn critical_bucket_serializes_as_vulnerabilities() {
        let mut findings = ScanFindings::default();
        findings.critical.push(Finding::new(
            Severity::Warning,
            "Canonical Tag",
            "Missing canonical tag",
            "No canonical tag found, could lead to duplicate content issues".to_string(),
        ));
        let json = serde_json::to_value(&findings).expect("serialize findings");
        assert_eq!(json["vulnerabilities"].as_array().map(Vec::len), Some(1));
        assert!(json.get("critical").is_none());
    }
}
