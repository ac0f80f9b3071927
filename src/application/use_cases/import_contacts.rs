use std::io::Read;
use std::sync::Arc;

use thiserror::Error;
use tracing::{info, warn};

use crate::application::dto::{ImportReport, RowRejection};
use crate::application::errors::IntakeError;
use crate::application::intake::IntakePipeline;
use crate::application::ports::{ContactRepository, RepositoryError};
use crate::domain::entities::{CleanRecord, RawRecord};
use crate::domain::value_objects::FieldName;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("CSV header is missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Could not read CSV input: {0}")]
    Csv(#[from] csv::Error),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Use case: bulk import contacts from CSV
///
/// Each row goes through the same pipeline as a form submission. Rejected
/// rows are skipped and reported; accepted rows are inserted in one batch.
pub struct ImportContactsUseCase {
    pipeline: Arc<IntakePipeline>,
    repository: Arc<dyn ContactRepository>,
}

impl ImportContactsUseCase {
    pub fn new(pipeline: Arc<IntakePipeline>, repository: Arc<dyn ContactRepository>) -> Self {
        Self {
            pipeline,
            repository,
        }
    }

    pub async fn execute<R: Read>(&self, input: R) -> Result<ImportReport, ImportError> {
        let (accepted, mut report) = self.screen_rows(input)?;

        if !accepted.is_empty() {
            report.inserted = self.repository.insert_many(&accepted).await?;
        }

        info!(
            rows_read = report.rows_read,
            inserted = report.inserted,
            rejected = report.rejected.len(),
            "CSV import finished"
        );
        Ok(report)
    }

    /// Parse and run the pipeline over every row, without touching storage
    fn screen_rows<R: Read>(
        &self,
        input: R,
    ) -> Result<(Vec<CleanRecord>, ImportReport), ImportError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::Headers)
            .flexible(true)
            .from_reader(input);

        let columns = Self::column_positions(reader.headers()?)?;

        let mut accepted = Vec::new();
        let mut report = ImportReport::default();

        for (index, result) in reader.records().enumerate() {
            let fallback_row = index as u64 + 2;
            report.rows_read += 1;

            let row = match result {
                Ok(row) => row,
                Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
                Err(e) => {
                    let line = e.position().map(|p| p.line()).unwrap_or(fallback_row);
                    warn!(row = line, error = %e, "Skipping malformed CSV row");
                    report.rejected.push(RowRejection::malformed(line));
                    continue;
                }
            };
            let line = row.position().map(|p| p.line()).unwrap_or(fallback_row);

            let mut record = RawRecord::default();
            for (field, position) in &columns {
                let value = row.get(*position).map(str::to_string);
                match field {
                    FieldName::FirstName => record.first_name = value,
                    FieldName::SecondName => record.second_name = value,
                    FieldName::Email => record.email = value,
                    FieldName::Phone => record.phone = value,
                    FieldName::PostalCode => record.postal_code = value,
                }
            }

            Self::admit_row(
                line,
                self.pipeline.process(&record),
                &mut accepted,
                &mut report,
            )?;
        }

        Ok((accepted, report))
    }

    /// Keep an accepted row or report why it was skipped
    ///
    /// Only threat and validation outcomes skip a row; anything else
    /// aborts the import.
    fn admit_row(
        line: u64,
        outcome: Result<CleanRecord, IntakeError>,
        accepted: &mut Vec<CleanRecord>,
        report: &mut ImportReport,
    ) -> Result<(), ImportError> {
        match outcome {
            Ok(clean) => accepted.push(clean),
            Err(IntakeError::ValidationFailed(errors)) => {
                warn!(row = line, fields = ?errors.fields(), "Skipping invalid CSV row");
                report
                    .rejected
                    .push(RowRejection::invalid(line, errors.into_inner()));
            }
            Err(IntakeError::ThreatDetected) => {
                warn!(row = line, "Skipping CSV row with injection-like input");
                report.rejected.push(RowRejection::threat(line));
            }
            Err(IntakeError::Persistence(e)) => return Err(ImportError::Repository(e)),
        }
        Ok(())
    }

    /// Map each required field to its column, accepting `eircode` for the
    /// postal code and ignoring unknown columns
    fn column_positions(headers: &csv::StringRecord) -> Result<Vec<(FieldName, usize)>, ImportError> {
        let mut columns: Vec<(FieldName, usize)> = Vec::with_capacity(FieldName::ALL.len());
        for (position, header) in headers.iter().enumerate() {
            if let Ok(field) = header.parse::<FieldName>() {
                if !columns.iter().any(|(f, _)| *f == field) {
                    columns.push((field, position));
                }
            }
        }

        let missing: Vec<String> = FieldName::ALL
            .iter()
            .filter(|field| !columns.iter().any(|(f, _)| f == *field))
            .map(|field| field.to_string())
            .collect();

        if !missing.is_empty() {
            return Err(ImportError::MissingColumns(missing));
        }
        Ok(columns)
    }
}
