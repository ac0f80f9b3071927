use serde::{Deserialize, Serialize};

/// Character set stripped by the sanitizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SanitizeProfile {
    /// Angle brackets only
    Markup,
    /// Angle brackets, quotes, semicolons, comment markers and control bytes
    #[default]
    Sql,
}

impl std::fmt::Display for SanitizeProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SanitizeProfile::Markup => write!(f, "markup"),
            SanitizeProfile::Sql => write!(f, "sql"),
        }
    }
}

impl std::str::FromStr for SanitizeProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" => Ok(SanitizeProfile::Markup),
            "sql" => Ok(SanitizeProfile::Sql),
            _ => Err(format!("Invalid sanitize profile: {}", s)),
        }
    }
}
