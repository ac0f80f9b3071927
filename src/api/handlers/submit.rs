use std::sync::Arc;

use axum::{
    extract::{FromRequest, Request, State},
    http::header::CONTENT_TYPE,
    response::Json,
    Form,
};
use tracing::debug;

use crate::api::errors::ApiError;
use crate::application::dto::SubmitResponse;
use crate::application::use_cases::SubmitContactUseCase;
use crate::domain::entities::RawRecord;

pub const SUBMIT_SUCCESS_MESSAGE: &str = "Form submitted successfully and saved to database.";

/// Contact form body, URL-encoded or JSON depending on `Content-Type`
#[derive(Debug)]
pub struct ContactSubmission(pub RawRecord);

impl<S> FromRequest<S> for ContactSubmission
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        // Extractor rejections can quote the offending input, so they are
        // replaced with a fixed message
        if content_type.starts_with("application/json") {
            let Json(record) = Json::<RawRecord>::from_request(req, state)
                .await
                .map_err(|e| {
                    debug!(status = %e.status(), "Rejected JSON submission");
                    ApiError::bad_request("Malformed form submission")
                })?;
            Ok(Self(record))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(record) = Form::<RawRecord>::from_request(req, state)
                .await
                .map_err(|e| {
                    debug!(status = %e.status(), "Rejected form submission");
                    ApiError::bad_request("Malformed form submission")
                })?;
            Ok(Self(record))
        } else {
            Err(ApiError::unsupported_media_type(
                "Expected application/x-www-form-urlencoded or application/json",
            ))
        }
    }
}

/// POST /submit-form
/// Validate and store one contact
#[utoipa::path(
    post,
    path = "/submit-form",
    tag = "contacts",
    request_body(
        content = RawRecord,
        description = "Contact fields; also accepted as application/x-www-form-urlencoded",
        content_type = "application/json"
    ),
    responses(
        (status = 200, description = "Contact saved", body = SubmitResponse),
        (status = 400, description = "Validation failed or input rejected"),
        (status = 415, description = "Unsupported content type"),
        (status = 500, description = "Contact could not be saved")
    )
)]
pub async fn submit_handler(
    State(use_case): State<Arc<SubmitContactUseCase>>,
    ContactSubmission(record): ContactSubmission,
) -> Result<Json<SubmitResponse>, ApiError> {
    let contact = use_case.execute(record).await?;

    Ok(Json(SubmitResponse {
        message: SUBMIT_SUCCESS_MESSAGE.to_string(),
        contact,
    }))
}
