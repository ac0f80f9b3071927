use std::sync::Arc;

use tracing::{error, info};

use crate::application::dto::ContactDto;
use crate::application::errors::IntakeError;
use crate::application::intake::IntakePipeline;
use crate::application::ports::ContactRepository;
use crate::domain::entities::RawRecord;

/// Use case: accept one form submission
pub struct SubmitContactUseCase {
    pipeline: Arc<IntakePipeline>,
    repository: Arc<dyn ContactRepository>,
}

impl SubmitContactUseCase {
    pub fn new(pipeline: Arc<IntakePipeline>, repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            pipeline,
            repository,
        }
    }

    /// Screen and validate, then insert exactly once
    ///
    /// Persistence failures are returned as-is; nothing is retried.
    pub async fn execute(&self, record: RawRecord) -> Result<ContactDto, IntakeError> {
        let clean = self.pipeline.process(&record)?;

        let id = self.repository.insert_one(&clean).await.map_err(|e| {
            error!(error = %e, "Failed to save contact");
            IntakeError::Persistence(e)
        })?;

        info!(contact_id = %id, "Contact saved");
        Ok(ContactDto::new(id, &clean))
    }
}
