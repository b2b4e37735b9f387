//! Segment tags and service characters of the PAXLST exchange.

/// Mandatory segments of the generic EDIFACT envelope.
pub const EDIFACT_MANDATORY: [&str; 4] = ["UNB", "UNH", "UNT", "UNZ"];

/// Mandatory segments of the PAXLST message body.
pub const PAXLST_MANDATORY: [&str; 9] = [
    "ATT", "BGM", "CNT", "DOC", "NAD", "NAT", "TDT", "UNE", "UNG",
];

/// Service String Advice tag. An optional prologue that overrides the
/// default service characters.
pub const SERVICE_STRING_ADVICE: &str = "UNA";

/// Interchange Header tag. The message starts here when no Service String
/// Advice is present.
pub const INTERCHANGE_HEADER: &str = "UNB";

/// Interchange Trailer tag. The message ends after the segment terminator
/// that follows it.
pub const INTERCHANGE_TRAILER: &str = "UNZ";

/// Length of the service characters block that follows `UNA`.
pub const SERVICE_CHARACTERS_LEN: usize = 6;

/// Zero-based position of the segment terminator within the service
/// characters block.
pub const SEGMENT_TERMINATOR_INDEX: usize = 5;

/// Segment terminator of the default service characters `:+.? '`.
pub const DEFAULT_SEGMENT_TERMINATOR: char = '\'';
