use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::value_objects::FieldName;

/// Untrusted contact submission, as received from a form post or a CSV row
///
/// Every field is optional; an absent field is treated as an empty string
/// and fails validation like any other bad value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RawRecord {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub second_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default, alias = "eircode")]
    pub postal_code: Option<String>,
}

impl RawRecord {
    pub fn new(
        first_name: impl Into<String>,
        second_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        postal_code: impl Into<String>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            second_name: Some(second_name.into()),
            email: Some(email.into()),
            phone: Some(phone.into()),
            postal_code: Some(postal_code.into()),
        }
    }

    /// Raw value of a field, empty when absent
    pub fn get(&self, field: FieldName) -> &str {
        let value = match field {
            FieldName::FirstName => &self.first_name,
            FieldName::SecondName => &self.second_name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::PostalCode => &self.postal_code,
        };
        value.as_deref().unwrap_or("")
    }

    /// All fields with their raw values, in validation order
    pub fn fields(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |f| (f, self.get(f)))
    }
}

/// Validated, normalized contact ready for a parameterized insert
///
/// Only the intake validator constructs these, so holding one proves every
/// field passed its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct CleanRecord {
    first_name: String,
    second_name: String,
    email: String,
    phone: String,
    postal_code: String,
}

impl CleanRecord {
    pub(crate) fn new(
        first_name: String,
        second_name: String,
        email: String,
        phone: String,
        postal_code: String,
    ) -> Self {
        Self {
            first_name,
            second_name,
            email,
            phone,
            postal_code,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn second_name(&self) -> &str {
        &self.second_name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn postal_code(&self) -> &str {
        &self.postal_code
    }
}
