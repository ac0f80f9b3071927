use axum::response::Json;
use utoipa::OpenApi;

use crate::api::openapi::ApiDoc;

/// GET /api-docs/openapi.json
pub async fn openapi_handler() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
