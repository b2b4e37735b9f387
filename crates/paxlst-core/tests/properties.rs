//! Property tests for reformatting and validation.

use proptest::prelude::*;

use paxlst_core::{clean, reformat, validate};

/// One segment per mandatory tag, ordered envelope-first.
const SEGMENTS: [(&str, &str); 13] = [
    ("UNB", "UNB+unoa:4+sender+receiver+070429:0900+ref1'"),
    ("UNG", "UNG+group+sender+receiver+070429:0900+1'"),
    ("UNH", "UNH+msg1+d:05b'"),
    ("BGM", "BGM+745'"),
    ("TDT", "TDT+20+flight123'"),
    ("NAD", "NAD+fl+++smith:john'"),
    ("ATT", "ATT+2++m'"),
    ("DOC", "DOC+p:110:111+doc42'"),
    ("NAT", "NAT+2+usa'"),
    ("CNT", "CNT+42:1'"),
    ("UNT", "UNT+9+msg1'"),
    ("UNE", "UNE+1+1'"),
    ("UNZ", "UNZ+1+ref1'"),
];

proptest! {
    /// Inserting breaks after terminators twice equals doing it once.
    #[test]
    fn reformat_is_idempotent(payload in "[a-z'+:\\n]{0,64}") {
        let once = reformat(&payload, '\'');
        prop_assert_eq!(reformat(&once, '\''), once);
    }

    /// Removing the inserted breaks from a cleaned output reproduces the
    /// un-reformatted slice.
    #[test]
    fn round_trip_restores_slice(noise in "[a-z0-9+: ]{0,32}") {
        let segments: String = SEGMENTS.iter().map(|(_, segment)| *segment).collect();
        let message = format!("UNA:+.? 'UNB+{noise}'{segments}");
        let cleaned = clean(&message).unwrap();
        prop_assert_eq!(cleaned.replace('\n', ""), message);
    }

    /// Dropping any single mandatory segment invalidates the payload and
    /// the report names exactly that tag.
    #[test]
    fn any_single_missing_tag_is_reported(index in 0usize..SEGMENTS.len()) {
        let (dropped, _) = SEGMENTS[index];
        let payload: String = SEGMENTS
            .iter()
            .filter(|(tag, _)| *tag != dropped)
            .map(|(_, segment)| *segment)
            .collect();
        let report = validate(&payload);
        prop_assert!(!report.is_valid());
        prop_assert_eq!(report.missing_count(), 1);
        let mut missing = report.missing_edifact;
        missing.extend(report.missing_paxlst);
        prop_assert_eq!(missing, vec![dropped.to_string()]);
    }

    /// Payloads carrying all thirteen tags always validate, regardless of
    /// surrounding noise.
    #[test]
    fn full_tag_set_always_validates(prefix in "[a-z ]{0,16}", suffix in "[a-z ]{0,16}") {
        let segments: String = SEGMENTS.iter().map(|(_, segment)| *segment).collect();
        let payload = format!("{prefix}{segments}{suffix}");
        prop_assert!(validate(&payload).is_valid());
    }
}
