use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{PostalCodeFormat, SanitizeProfile};

/// Intake pipeline configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Characters stripped before validation
    pub sanitize_profile: SanitizeProfile,
    /// Rule applied to the postal code field
    pub postal_code_format: PostalCodeFormat,
}

impl IntakeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_sanitize_profile(mut self, profile: SanitizeProfile) -> Self {
        self.sanitize_profile = profile;
        self
    }

    pub fn with_postal_code_format(mut self, format: PostalCodeFormat) -> Self {
        self.postal_code_format = format;
        self
    }
}
