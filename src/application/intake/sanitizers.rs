use crate::domain::value_objects::SanitizeProfile;

const MARKUP_CHARS: &[char] = &['<', '>'];

/// Markup delimiters, quotes, statement terminators and the control bytes
/// MySQL-style escaping treats specially
const SQL_CHARS: &[char] = &[
    '<', '>', '\'', '"', ';', '\0', '\x08', '\t', '\n', '\r', '\x1a', '\x1b',
];

const COMMENT_MARKER: &str = "--";

/// Core sanitization functions
///
/// Sanitizing is advisory hardening only; persistence still binds every
/// value as a parameter.
pub struct Sanitizer;

impl Sanitizer {
    /// Strip the profile's character set, then trim surrounding whitespace
    ///
    /// Total and idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
    pub fn sanitize(input: &str, profile: SanitizeProfile) -> String {
        let stripped: String = input
            .chars()
            .filter(|c| !Self::stripped_chars(profile).contains(c))
            .collect();

        let stripped = match profile {
            // Runs of dashes collapse to at most one, so no marker survives
            SanitizeProfile::Sql => stripped.replace(COMMENT_MARKER, ""),
            SanitizeProfile::Markup => stripped,
        };

        stripped.trim().to_string()
    }

    /// Drop all whitespace, sanitize and upper-case
    ///
    /// Whitespace goes first so that joining the pieces cannot form a new
    /// comment marker.
    pub fn normalize_postal_code(input: &str, profile: SanitizeProfile) -> String {
        let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
        Self::sanitize(&compact, profile).to_uppercase()
    }

    fn stripped_chars(profile: SanitizeProfile) -> &'static [char] {
        match profile {
            SanitizeProfile::Markup => MARKUP_CHARS,
            SanitizeProfile::Sql => SQL_CHARS,
        }
    }
}
