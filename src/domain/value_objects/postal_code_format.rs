use serde::{Deserialize, Serialize};

/// Acceptance rule applied to the postal code field
///
/// `Compact` is the six character code used by the intake form: a leading
/// digit followed by five alphanumerics. `Eircode` is the full seven
/// character Irish postcode (routing key plus unique identifier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostalCodeFormat {
    #[default]
    Compact,
    Eircode,
}

impl PostalCodeFormat {
    /// Human readable description used in validation messages
    pub fn describe(&self) -> &'static str {
        match self {
            PostalCodeFormat::Compact => {
                "must be 6 alphanumeric characters starting with a number"
            }
            PostalCodeFormat::Eircode => {
                "must be a 7 character Eircode (routing key followed by 4 characters)"
            }
        }
    }
}

impl std::fmt::Display for PostalCodeFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostalCodeFormat::Compact => write!(f, "compact"),
            PostalCodeFormat::Eircode => write!(f, "eircode"),
        }
    }
}

impl std::str::FromStr for PostalCodeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(PostalCodeFormat::Compact),
            "eircode" => Ok(PostalCodeFormat::Eircode),
            _ => Err(format!("Invalid postal code format: {}", s)),
        }
    }
}
