use utoipa::OpenApi;

use crate::api::handlers::health::{DbTestResponse, HealthResponse};
use crate::application::dto::{
    ContactDto, ImportReport, RejectionReason, RowRejection, SubmitResponse,
};
use crate::domain::entities::RawRecord;
use crate::domain::errors::ValidationError;
use crate::domain::value_objects::FieldName;

/// OpenAPI specification for the contact intake API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Contact Intake API",
        version = "1.0.0",
        description = "Contact form intake with injection screening, field validation and CSV bulk import"
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server"),
        (url = "https://localhost:3000", description = "Local server with TLS")
    ),
    paths(
        crate::api::handlers::index::index_handler,
        crate::api::handlers::health::health_handler,
        crate::api::handlers::health::db_test_handler,
        crate::api::handlers::submit::submit_handler,
        crate::api::handlers::import::import_handler,
    ),
    components(
        schemas(
            RawRecord,
            ContactDto,
            SubmitResponse,
            ValidationError,
            FieldName,
            ImportReport,
            RowRejection,
            RejectionReason,
            HealthResponse,
            DbTestResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "contacts", description = "Contact submission and import")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_every_route() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/health", "/db-test", "/submit-form", "/import-csv"] {
            assert!(doc.paths.paths.contains_key(path), "missing path {}", path);
        }
    }
}
