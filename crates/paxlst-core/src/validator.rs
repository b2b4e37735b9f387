//! Mandatory segment presence checks.
//!
//! Tags are detected by case-sensitive substring containment, not by
//! tokenizing EDIFACT syntax. A tag that happens to appear inside unrelated
//! element data therefore counts as present; segment order and position are
//! never checked. Absence of a tag is a normal negative result, not an
//! error.

use paxlst_model::ValidationReport;
use paxlst_model::segments::{EDIFACT_MANDATORY, PAXLST_MANDATORY};

/// Check a payload for every mandatory EDIFACT and PAXLST segment tag.
///
/// Missing tags are collected for both sets even when the EDIFACT check
/// already failed, so callers can report the full picture.
pub fn validate(payload: &str) -> ValidationReport {
    ValidationReport {
        missing_edifact: missing_tags(payload, &EDIFACT_MANDATORY),
        missing_paxlst: missing_tags(payload, &PAXLST_MANDATORY),
    }
}

/// True when the payload carries all mandatory EDIFACT and PAXLST segments.
pub fn is_paxlst(payload: &str) -> bool {
    validate(payload).is_valid()
}

fn missing_tags(payload: &str, tags: &[&str]) -> Vec<String> {
    tags.iter()
        .filter(|tag| !payload.contains(**tag))
        .map(|tag| (*tag).to_string())
        .collect()
}
