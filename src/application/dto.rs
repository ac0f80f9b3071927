use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::entities::CleanRecord;
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::ContactId;

/// DTO for a stored contact
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ContactDto {
    pub id: i64,
    pub first_name: String,
    pub second_name: String,
    pub email: String,
    pub phone: String,
    pub postal_code: String,
}

impl ContactDto {
    pub fn new(id: ContactId, record: &CleanRecord) -> Self {
        Self {
            id: id.as_i64(),
            first_name: record.first_name().to_string(),
            second_name: record.second_name().to_string(),
            email: record.email().to_string(),
            phone: record.phone().to_string(),
            postal_code: record.postal_code().to_string(),
        }
    }
}

/// Response body for an accepted form submission
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitResponse {
    pub message: String,
    pub contact: ContactDto,
}

/// Why an import row was skipped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// Injection-like content in some field
    Threat,
    /// One or more field rules failed
    Invalid,
    /// The CSV row itself could not be read
    Malformed,
}

/// A skipped CSV row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct RowRejection {
    /// Line number in the CSV input; the header is line 1
    pub row: u64,
    pub reason: RejectionReason,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationError>,
}

impl RowRejection {
    pub fn threat(row: u64) -> Self {
        Self {
            row,
            reason: RejectionReason::Threat,
            errors: Vec::new(),
        }
    }

    pub fn invalid(row: u64, errors: Vec<ValidationError>) -> Self {
        Self {
            row,
            reason: RejectionReason::Invalid,
            errors,
        }
    }

    pub fn malformed(row: u64) -> Self {
        Self {
            row,
            reason: RejectionReason::Malformed,
            errors: Vec::new(),
        }
    }
}

/// Result of a CSV bulk import
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, ToSchema)]
pub struct ImportReport {
    /// Data rows read, excluding the header
    pub rows_read: usize,
    pub inserted: u64,
    pub rejected: Vec<RowRejection>,
}

/// Database connectivity details for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DatabaseInfo {
    pub database: String,
    pub tables: Vec<String>,
}
