use tracing::{debug, warn};

use super::config::IntakeConfig;
use super::threat_detector::ThreatDetector;
use super::validators::Validator;
use crate::application::errors::IntakeError;
use crate::domain::entities::{CleanRecord, RawRecord};

/// Screen, sanitize and validate one record
///
/// Stateless apart from its configuration; share it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct IntakePipeline {
    config: IntakeConfig,
}

impl IntakePipeline {
    pub fn new(config: IntakeConfig) -> Self {
        Self { config }
    }

    /// Threat screening runs on the raw values and short-circuits:
    /// a flagged record never reaches the validator.
    pub fn process(&self, record: &RawRecord) -> Result<CleanRecord, IntakeError> {
        if let Some(field) = ThreatDetector::flagged_field(record) {
            warn!(field = %field, "Rejected submission with injection-like input");
            return Err(IntakeError::ThreatDetected);
        }

        Validator::validate(record, &self.config).map_err(|errors| {
            debug!(
                error_count = errors.len(),
                fields = ?errors.fields(),
                "Submission failed validation"
            );
            IntakeError::ValidationFailed(errors)
        })
    }
}
