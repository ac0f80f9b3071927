//! Field acceptance rules for contact records
//!
//! Each rule takes an already sanitized value and reports the violated
//! constraint as a [`ValidationError`] tagged with the field it belongs to.

use crate::domain::errors::ValidationError;
use crate::domain::value_objects::{FieldName, PostalCodeFormat};
use once_cell::sync::Lazy;
use regex::Regex;

/// Letters and digits only, 1 to 20 characters
static NAME_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9]{1,20}$").expect("Invalid name regex"));

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Invalid email regex"));

static PHONE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("Invalid phone regex"));

static COMPACT_POSTAL_CODE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9][A-Z0-9]{5}$").expect("Invalid postal code regex"));

static EIRCODE_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:[ACDEFHKNPRTVWXY][0-9]{2}|D6W)[0-9ACDEFHKNPRTVWXY]{4}$")
        .expect("Invalid eircode regex")
});

/// Validation result type
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Field rules shared by the form and CSV import paths
pub struct Validation;

impl Validation {
    pub const MAX_NAME_LENGTH: usize = 20;
    pub const MAX_EMAIL_LENGTH: usize = 254;
    pub const PHONE_DIGITS: usize = 10;

    /// First and second names: ASCII alphanumeric, 1 to 20 characters
    pub fn validate_name(value: &str, field: FieldName) -> ValidationResult<()> {
        if value.is_empty() {
            return Err(ValidationError::new(
                field,
                format!("{} cannot be empty", Self::label(field)),
            ));
        }

        if !NAME_REGEX.is_match(value) {
            return Err(ValidationError::new(
                field,
                format!(
                    "{} must contain only letters or numbers and be at most {} characters",
                    Self::label(field),
                    Self::MAX_NAME_LENGTH
                ),
            ));
        }

        Ok(())
    }

    /// Email in `local@domain.tld` shape with no embedded whitespace
    pub fn validate_email(value: &str) -> ValidationResult<()> {
        if value.len() > Self::MAX_EMAIL_LENGTH {
            return Err(ValidationError::new(
                FieldName::Email,
                format!(
                    "Email must be at most {} characters",
                    Self::MAX_EMAIL_LENGTH
                ),
            ));
        }

        if !EMAIL_REGEX.is_match(value) {
            return Err(ValidationError::new(
                FieldName::Email,
                "Email must be a valid address (name@domain.tld)",
            ));
        }

        Ok(())
    }

    /// Exactly ten decimal digits, no separators
    pub fn validate_phone(value: &str) -> ValidationResult<()> {
        if !PHONE_REGEX.is_match(value) {
            return Err(ValidationError::new(
                FieldName::Phone,
                format!(
                    "Phone number must be exactly {} digits",
                    Self::PHONE_DIGITS
                ),
            ));
        }
        Ok(())
    }

    /// Postal code, expected already upper-cased with whitespace removed
    pub fn validate_postal_code(value: &str, format: PostalCodeFormat) -> ValidationResult<()> {
        let matches = match format {
            PostalCodeFormat::Compact => COMPACT_POSTAL_CODE_REGEX.is_match(value),
            PostalCodeFormat::Eircode => EIRCODE_REGEX.is_match(value),
        };

        if !matches {
            return Err(ValidationError::new(
                FieldName::PostalCode,
                format!("Postal code {}", format.describe()),
            ));
        }
        Ok(())
    }

    fn label(field: FieldName) -> &'static str {
        match field {
            FieldName::FirstName => "First name",
            FieldName::SecondName => "Second name",
            FieldName::Email => "Email",
            FieldName::Phone => "Phone number",
            FieldName::PostalCode => "Postal code",
        }
    }
}
