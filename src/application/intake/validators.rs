use super::config::IntakeConfig;
use super::sanitizers::Sanitizer;
use crate::domain::entities::{CleanRecord, RawRecord};
use crate::domain::errors::ValidationErrors;
use crate::domain::validation::Validation;
use crate::domain::value_objects::FieldName;

/// Structural validation of a whole record
pub struct Validator;

impl Validator {
    /// Sanitize and check all five fields
    ///
    /// Every field is checked regardless of earlier failures, so the error
    /// list names each violated field once, in field order.
    pub fn validate(
        record: &RawRecord,
        config: &IntakeConfig,
    ) -> Result<CleanRecord, ValidationErrors> {
        let profile = config.sanitize_profile;

        let first_name = Sanitizer::sanitize(record.get(FieldName::FirstName), profile);
        let second_name = Sanitizer::sanitize(record.get(FieldName::SecondName), profile);
        let email = Sanitizer::sanitize(record.get(FieldName::Email), profile);
        let phone = Sanitizer::sanitize(record.get(FieldName::Phone), profile);
        let postal_code =
            Sanitizer::normalize_postal_code(record.get(FieldName::PostalCode), profile);

        let checks = [
            Validation::validate_name(&first_name, FieldName::FirstName),
            Validation::validate_name(&second_name, FieldName::SecondName),
            Validation::validate_email(&email),
            Validation::validate_phone(&phone),
            Validation::validate_postal_code(&postal_code, config.postal_code_format),
        ];

        let mut errors = ValidationErrors::new();
        for error in checks.into_iter().filter_map(Result::err) {
            errors.push(error);
        }

        if !errors.is_empty() {
            return Err(errors);
        }

        Ok(CleanRecord::new(
            first_name,
            second_name,
            email,
            phone,
            postal_code,
        ))
    }
}
