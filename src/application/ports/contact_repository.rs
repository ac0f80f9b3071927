use async_trait::async_trait;
use thiserror::Error;

use crate::application::dto::DatabaseInfo;
use crate::domain::entities::CleanRecord;
use crate::domain::value_objects::ContactId;
#[cfg(test)]
use mockall::automock;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Table '{table}' is missing columns: {}", .missing.join(", "))]
    SchemaMismatch { table: String, missing: Vec<String> },

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Port for contact persistence
///
/// Implementations must bind every value as a query parameter.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContactRepository: Send + Sync {
    /// Insert one validated record
    async fn insert_one(&self, record: &CleanRecord) -> Result<ContactId, RepositoryError>;

    /// Insert a batch atomically, returning the number of rows written
    async fn insert_many(&self, records: &[CleanRecord]) -> Result<u64, RepositoryError>;

    /// Check that the contacts table has every required column
    async fn verify_schema(&self) -> Result<(), RepositoryError>;

    /// Connected database name and its tables
    async fn database_info(&self) -> Result<DatabaseInfo, RepositoryError>;
}
