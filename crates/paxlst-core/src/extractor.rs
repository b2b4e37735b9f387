//! Delimiter discovery, boundary slicing, and segment reformatting.

use tracing::{debug, error};

use paxlst_model::segments::{
    DEFAULT_SEGMENT_TERMINATOR, INTERCHANGE_HEADER, INTERCHANGE_TRAILER, SEGMENT_TERMINATOR_INDEX,
    SERVICE_CHARACTERS_LEN, SERVICE_STRING_ADVICE,
};
use paxlst_model::{CleanError, Result};

use crate::validator::validate;

/// Delimiter set and start boundary derived from a normalized payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelimiterProfile {
    /// Segment terminator character.
    pub terminator: char,
    /// Byte offset where the message starts.
    pub start: usize,
    /// Whether the terminator came from an explicit `UNA` block.
    pub explicit: bool,
}

/// Strip line breaks and every non-ASCII character from a raw payload.
///
/// Characters are deleted, not replaced, so offsets in the result are not
/// comparable to offsets in the input.
pub fn normalize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii() && *c != '\n' && *c != '\r')
        .collect()
}

/// Resolve the segment terminator and message start of a normalized payload.
///
/// An explicit `UNA` block wins: the terminator is the sixth service
/// character and the message starts at `UNA` itself. Without one, the
/// default terminator `'` applies and the message starts at the Interchange
/// Header.
pub fn resolve_delimiters(payload: &str) -> Result<DelimiterProfile> {
    if let Some(start) = payload.find(SERVICE_STRING_ADVICE) {
        let block_start = start + SERVICE_STRING_ADVICE.len();
        let block = payload
            .get(block_start..block_start + SERVICE_CHARACTERS_LEN)
            .ok_or(CleanError::TruncatedServiceAdvice {
                expected: SERVICE_CHARACTERS_LEN,
                found: payload.len().saturating_sub(block_start),
            })?;
        // The payload is pure ASCII after normalization, so byte indexing
        // is char indexing.
        let terminator = block.as_bytes()[SEGMENT_TERMINATOR_INDEX] as char;
        Ok(DelimiterProfile {
            terminator,
            start,
            explicit: true,
        })
    } else {
        let start = payload.find(INTERCHANGE_HEADER).ok_or_else(|| {
            CleanError::BoundaryNotFound {
                marker: INTERCHANGE_HEADER.to_string(),
            }
        })?;
        Ok(DelimiterProfile {
            terminator: DEFAULT_SEGMENT_TERMINATOR,
            start,
            explicit: false,
        })
    }
}

/// Find the end boundary: just past the first terminator at or after the
/// first Interchange Trailer at or after the message start.
fn locate_end(payload: &str, profile: &DelimiterProfile) -> Result<usize> {
    let trailer = payload[profile.start..]
        .find(INTERCHANGE_TRAILER)
        .map(|offset| profile.start + offset)
        .ok_or_else(|| CleanError::BoundaryNotFound {
            marker: INTERCHANGE_TRAILER.to_string(),
        })?;
    let terminator = payload[trailer..]
        .find(profile.terminator)
        .map(|offset| trailer + offset)
        .ok_or_else(|| CleanError::BoundaryNotFound {
            marker: format!(
                "segment terminator {:?} after {INTERCHANGE_TRAILER}",
                profile.terminator
            ),
        })?;
    Ok(terminator + 1)
}

/// Insert a line break after every segment terminator.
///
/// Breaks are only inserted where one is not already present, so the
/// operation is idempotent.
pub fn reformat(payload: &str, terminator: char) -> String {
    let mut out = String::with_capacity(payload.len() + payload.len() / 8);
    let mut chars = payload.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == terminator && chars.peek() != Some(&'\n') {
            out.push('\n');
        }
    }
    out
}

/// Validate a raw payload and extract the bounded PAXLST message.
///
/// The payload is normalized, checked for mandatory segments, sliced from
/// the message start through the terminator following the Interchange
/// Trailer, and reformatted with one segment per line.
pub fn clean(raw: &str) -> Result<String> {
    let payload = normalize(raw);
    let report = validate(&payload);
    if !report.is_valid() {
        if report.missing_edifact.is_empty() {
            error!(missing = ?report.missing_paxlst, "not a valid PAXLST message");
        } else {
            error!(missing = ?report.missing_edifact, "not a valid EDIFACT interchange");
        }
        return Err(CleanError::Validation(report));
    }
    let profile = resolve_delimiters(&payload)?;
    let end = locate_end(&payload, &profile)?;
    debug!(
        terminator = %profile.terminator,
        explicit = profile.explicit,
        start = profile.start,
        end,
        "message bounded"
    );
    Ok(reformat(&payload[profile.start..end], profile.terminator))
}
