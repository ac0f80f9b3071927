use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// The fields of a contact record, in the order they are validated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum FieldName {
    FirstName,
    SecondName,
    Email,
    Phone,
    PostalCode,
}

impl FieldName {
    /// Every field in validation order
    pub const ALL: [FieldName; 5] = [
        FieldName::FirstName,
        FieldName::SecondName,
        FieldName::Email,
        FieldName::Phone,
        FieldName::PostalCode,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::FirstName => "first_name",
            FieldName::SecondName => "second_name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::PostalCode => "postal_code",
        }
    }
}

impl std::fmt::Display for FieldName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for FieldName {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "first_name" => Ok(FieldName::FirstName),
            "second_name" => Ok(FieldName::SecondName),
            "email" => Ok(FieldName::Email),
            "phone" => Ok(FieldName::Phone),
            // Older forms and CSV exports name the column after the Irish format
            "postal_code" | "eircode" => Ok(FieldName::PostalCode),
            _ => Err(format!("Unknown field: {}", s)),
        }
    }
}
