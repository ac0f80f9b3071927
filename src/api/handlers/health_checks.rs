//! Error sanitizing for the diagnostic endpoints
//!
//! Connection strings, host names and SQL fragments never reach a response.

use crate::application::ports::RepositoryError;

/// Sanitize database error messages to prevent information leakage
pub fn sanitize_db_error(error: &sqlx::Error) -> &'static str {
    match error {
        sqlx::Error::Configuration(_) => "Database configuration error",
        sqlx::Error::Database(_) => "Database operation error",
        sqlx::Error::Io(_) => "Database connection error",
        sqlx::Error::Tls(_) => "Database TLS error",
        sqlx::Error::Protocol(_) => "Database protocol error",
        sqlx::Error::RowNotFound => "Record not found",
        sqlx::Error::TypeNotFound { .. } => "Database type error",
        sqlx::Error::ColumnIndexOutOfBounds { .. } => "Database column error",
        sqlx::Error::ColumnNotFound(_) => "Database column error",
        sqlx::Error::ColumnDecode { .. } => "Database decode error",
        sqlx::Error::Decode(_) => "Database decode error",
        sqlx::Error::PoolTimedOut => "Database pool timeout",
        sqlx::Error::PoolClosed => "Database pool closed",
        sqlx::Error::WorkerCrashed => "Database worker error",
        _ => "Database error",
    }
}

pub fn sanitize_repository_error(error: &RepositoryError) -> &'static str {
    match error {
        RepositoryError::Database(e) => sanitize_db_error(e),
        RepositoryError::SchemaMismatch { .. } => "Database schema mismatch",
        RepositoryError::Internal(_) => "Database error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_db_error_sanitization() {
        let config_err = sqlx::Error::Configuration("host=localhost password=secret".into());
        assert_eq!(sanitize_db_error(&config_err), "Database configuration error");

        let io_err = sqlx::Error::Io(std::io::Error::new(
            std::io::ErrorKind::ConnectionRefused,
            "Connection refused",
        ));
        assert_eq!(sanitize_db_error(&io_err), "Database connection error");

        let tls_err = sqlx::Error::Tls("certificate verification failed".into());
        assert_eq!(sanitize_db_error(&tls_err), "Database TLS error");

        assert_eq!(sanitize_db_error(&sqlx::Error::PoolTimedOut), "Database pool timeout");
        assert_eq!(sanitize_db_error(&sqlx::Error::PoolClosed), "Database pool closed");
        assert_eq!(sanitize_db_error(&sqlx::Error::RowNotFound), "Record not found");
        assert_eq!(sanitize_db_error(&sqlx::Error::WorkerCrashed), "Database worker error");
    }

    #[test]
    fn test_repository_error_sanitization() {
        let err = RepositoryError::Database(sqlx::Error::PoolTimedOut);
        assert_eq!(sanitize_repository_error(&err), "Database pool timeout");

        let err = RepositoryError::SchemaMismatch {
            table: "contacts".to_string(),
            missing: vec!["phone".to_string()],
        };
        assert_eq!(sanitize_repository_error(&err), "Database schema mismatch");

        let err = RepositoryError::Internal("db01.internal:5432 refused".to_string());
        assert_eq!(sanitize_repository_error(&err), "Database error");
    }
}
