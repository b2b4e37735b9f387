//! Validation reporting for mandatory segment checks.

use serde::{Deserialize, Serialize};

/// Outcome of checking a payload for mandatory EDIFACT and PAXLST segments.
///
/// Missing tags are collected for both sets regardless of which check
/// failed, so diagnostics always name every absent segment.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Mandatory EDIFACT envelope segments absent from the payload.
    pub missing_edifact: Vec<String>,
    /// Mandatory PAXLST segments absent from the payload.
    pub missing_paxlst: Vec<String>,
}

impl ValidationReport {
    /// True when every mandatory segment of both sets is present.
    pub fn is_valid(&self) -> bool {
        self.missing_edifact.is_empty() && self.missing_paxlst.is_empty()
    }

    /// Total number of missing segments across both sets.
    pub fn missing_count(&self) -> usize {
        self.missing_edifact.len() + self.missing_paxlst.len()
    }

    /// Human-readable list of every missing tag, EDIFACT set first.
    pub fn describe(&self) -> String {
        let mut parts = Vec::new();
        if !self.missing_edifact.is_empty() {
            parts.push(format!("EDIFACT [{}]", self.missing_edifact.join(", ")));
        }
        if !self.missing_paxlst.is_empty() {
            parts.push(format!("PAXLST [{}]", self.missing_paxlst.join(", ")));
        }
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert_eq!(report.missing_count(), 0);
        assert_eq!(report.describe(), "");
    }

    #[test]
    fn describe_names_both_sets() {
        let report = ValidationReport {
            missing_edifact: vec!["UNB".to_string(), "UNZ".to_string()],
            missing_paxlst: vec!["NAD".to_string()],
        };
        assert!(!report.is_valid());
        assert_eq!(report.missing_count(), 3);
        assert_eq!(report.describe(), "EDIFACT [UNB, UNZ], PAXLST [NAD]");
    }

    #[test]
    fn report_serializes_to_json() {
        let report = ValidationReport {
            missing_edifact: Vec::new(),
            missing_paxlst: vec!["NAD".to_string()],
        };
        let json = serde_json::to_string(&report).unwrap();
        assert_eq!(
            json,
            r#"{"missing_edifact":[],"missing_paxlst":["NAD"]}"#
        );
        let parsed: ValidationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }
}
