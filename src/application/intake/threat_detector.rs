use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::entities::RawRecord;
use crate::domain::value_objects::FieldName;

/// Comment markers, UNION SELECT, numeric tautologies and DML/DDL keywords
static INJECTION_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)(--|#|/\*|\*/|\bUNION\s+SELECT\b|\b(?:OR|AND)\s+\d+\s*=\s*\d+|\bDROP\s+TABLE\b|\bINSERT\b|\bUPDATE\b|\bDELETE\b|\bSELECT\b)",
    )
    .expect("Invalid injection regex")
});

/// Heuristic detection of SQL-injection-like input
///
/// Known limitation: legitimate text can trip it (a surname "Update",
/// "or 2=2" in free text) and encoded payloads slip past it. It only
/// short-circuits obvious probes before validation.
pub struct ThreatDetector;

impl ThreatDetector {
    pub fn looks_like_injection(value: &str) -> bool {
        INJECTION_REGEX.is_match(value.trim())
    }

    /// First field whose raw value looks like an injection attempt
    pub fn flagged_field(record: &RawRecord) -> Option<FieldName> {
        record
            .fields()
            .find(|(_, value)| Self::looks_like_injection(value))
            .map(|(field, _)| field)
    }
}
