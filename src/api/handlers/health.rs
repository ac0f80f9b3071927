use std::sync::Arc;
use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::Json};
use serde::Serialize;
use tracing::warn;
use utoipa::ToSchema;

use super::health_checks::sanitize_repository_error;
use crate::application::ports::ContactRepository;

const DB_CHECK_TIMEOUT: Duration = Duration::from_secs(2);

/// Basic health check response
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub tls: bool,
}

/// Database connectivity report
#[derive(Debug, Serialize, ToSchema)]
pub struct DbTestResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tables: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// GET /health
/// Liveness check, no database access
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_handler(State(tls_enabled): State<bool>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        service: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        tls: tls_enabled,
    })
}

/// GET /db-test
/// Report the connected database and its tables
#[utoipa::path(
    get,
    path = "/db-test",
    tag = "health",
    responses(
        (status = 200, description = "Database reachable", body = DbTestResponse),
        (status = 500, description = "Database unreachable", body = DbTestResponse)
    )
)]
pub async fn db_test_handler(
    State(repository): State<Arc<dyn ContactRepository>>,
) -> (StatusCode, Json<DbTestResponse>) {
    let error = match tokio::time::timeout(DB_CHECK_TIMEOUT, repository.database_info()).await {
        Ok(Ok(info)) => {
            return (
                StatusCode::OK,
                Json(DbTestResponse {
                    message: "Database connection successful".to_string(),
                    database: Some(info.database),
                    tables: info.tables,
                    error: None,
                }),
            );
        }
        Ok(Err(e)) => {
            warn!(error = %e, "Database check failed");
            sanitize_repository_error(&e)
        }
        Err(_) => {
            warn!("Database check timed out");
            "Database query timed out"
        }
    };

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(DbTestResponse {
            message: "Database connection failed".to_string(),
            database: None,
            tables: Vec::new(),
            error: Some(error.to_string()),
        }),
    )
}
