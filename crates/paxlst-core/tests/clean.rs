//! End-to-end tests for the validate-then-extract pipeline.

use insta::assert_snapshot;
use paxlst_core::clean;
use paxlst_model::CleanError;

/// A complete interchange: envelope, group, and one passenger record.
const SEGMENTS: [&str; 13] = [
    "UNB+UNOA:4+APIS*ABE+USADHS+070429:0900+000000001++USADHS'",
    "UNG+PAXLST+XYZ AIRLINES+USADHS+070429:0900+1+UN+D:05B'",
    "UNH+PAX001+PAXLST:D:05B:UN:IATA'",
    "BGM+745'",
    "TDT+20+UA123+++UA'",
    "NAD+FL+++SMITH:JOHN'",
    "ATT+2++M'",
    "DOC+P:110:111+MEGCASE123'",
    "NAT+2+USA'",
    "CNT+42:1'",
    "UNT+9+PAX001'",
    "UNE+1+1'",
    "UNZ+1+000000001'",
];

const UNA_PROLOGUE: &str = "UNA:+.? '";

fn body() -> String {
    SEGMENTS.concat()
}

fn expected(with_advice: bool) -> String {
    let mut out = String::new();
    if with_advice {
        out.push_str(UNA_PROLOGUE);
        out.push('\n');
    }
    for segment in SEGMENTS {
        out.push_str(segment);
        out.push('\n');
    }
    out
}

#[test]
fn explicit_advice_message_is_sliced_from_una() {
    let raw = format!("transmission header\r\n{UNA_PROLOGUE}{}\r\nfooter bytes", body());
    let cleaned = clean(&raw).unwrap();
    assert!(cleaned.starts_with("UNA:+.? '"));
    assert!(cleaned.ends_with("UNZ+1+000000001'\n"));
    assert_eq!(cleaned, expected(true));
    assert_eq!(cleaned.lines().count(), 14);
}

#[test]
fn default_advice_message_is_sliced_from_unb() {
    let raw = format!("prefix noise {} suffix noise", body());
    let cleaned = clean(&raw).unwrap();
    assert!(cleaned.starts_with("UNB+"));
    assert_eq!(cleaned, expected(false));
}

#[test]
fn missing_nad_is_rejected_with_diagnostic() {
    let raw: String = SEGMENTS
        .iter()
        .filter(|segment| !segment.starts_with("NAD"))
        .copied()
        .collect();
    let error = clean(&raw).unwrap_err();
    let CleanError::Validation(report) = &error else {
        panic!("expected validation failure, got {error}");
    };
    assert!(report.missing_edifact.is_empty());
    assert_eq!(report.missing_paxlst, vec!["NAD".to_string()]);
    assert_snapshot!(error.to_string(), @"missing mandatory segments: PAXLST [NAD]");
}

#[test]
fn embedded_noise_is_stripped_before_extraction() {
    let noisy = SEGMENTS.join("\r\n\u{2665}\u{e9}");
    let raw = format!("{UNA_PROLOGUE}{noisy}");
    assert_eq!(clean(&raw).unwrap(), expected(true));
}

#[test]
fn cleaning_is_stable_on_its_own_output() {
    let raw = format!("{UNA_PROLOGUE}{}", body());
    let cleaned = clean(&raw).unwrap();
    assert_eq!(clean(&cleaned).unwrap(), cleaned);
}

#[test]
fn truncated_advice_block_fails_after_validation() {
    // All tags are present, but the first UNA occurrence sits at the very
    // end of the payload with only two service characters after it.
    let raw = format!("{}xUNA:+", body());
    let error = clean(&raw).unwrap_err();
    assert!(matches!(
        error,
        CleanError::TruncatedServiceAdvice {
            expected: 6,
            found: 2,
        }
    ));
}

#[test]
fn advice_terminator_absent_after_trailer_fails() {
    // The advice block declares `~` as terminator, but no `~` follows UNZ.
    let raw = format!("UNA:+.? ~{}", body());
    let error = clean(&raw).unwrap_err();
    assert!(matches!(error, CleanError::BoundaryNotFound { .. }));
}

#[test]
fn cleaned_output_snapshot() {
    let raw = "UNA:+.? 'UNB+1'UNG+2'UNH+3'BGM+4'TDT+5'NAD+6'ATT+7'\
               DOC+8'NAT+9'CNT+10'UNT+11'UNE+12'UNZ+13'";
    let cleaned = clean(raw).unwrap();
    assert_snapshot!(cleaned, @r"
    UNA:+.? '
    UNB+1'
    UNG+2'
    UNH+3'
    BGM+4'
    TDT+5'
    NAD+6'
    ATT+7'
    DOC+8'
    NAT+9'
    CNT+10'
    UNT+11'
    UNE+12'
    UNZ+13'
    ");
}
