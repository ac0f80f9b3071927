use std::sync::Arc;

use axum::{body::Bytes, extract::State, response::Json};

use crate::api::errors::ApiError;
use crate::application::dto::ImportReport;
use crate::application::use_cases::ImportContactsUseCase;

/// POST /import-csv
/// Bulk import contacts from a CSV body
#[utoipa::path(
    post,
    path = "/import-csv",
    tag = "contacts",
    request_body(
        content = String,
        description = "CSV with a header row naming first_name, second_name, email, phone and postal_code (or eircode)",
        content_type = "text/csv"
    ),
    responses(
        (status = 200, description = "Import finished; skipped rows are listed", body = ImportReport),
        (status = 400, description = "Header is missing columns or the CSV is unreadable"),
        (status = 413, description = "Body exceeds the import size limit"),
        (status = 500, description = "Accepted rows could not be saved")
    )
)]
pub async fn import_handler(
    State(use_case): State<Arc<ImportContactsUseCase>>,
    body: Bytes,
) -> Result<Json<ImportReport>, ApiError> {
    let report = use_case.execute(body.as_ref()).await?;
    Ok(Json(report))
}
