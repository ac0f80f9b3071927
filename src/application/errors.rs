//! Error types shared by the intake use cases

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::errors::ValidationErrors;

/// Outcome of a rejected or failed submission
///
/// Messages never include submitted values.
#[derive(Debug, Error)]
pub enum IntakeError {
    /// Some raw field matched an injection pattern; which one is not disclosed
    #[error("Submission rejected: input contains disallowed content")]
    ThreatDetected,

    #[error("Validation failed: {0}")]
    ValidationFailed(ValidationErrors),

    #[error("Persistence error: {0}")]
    Persistence(#[from] RepositoryError),
}
