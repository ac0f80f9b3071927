use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

use crate::application::errors::IntakeError;
use crate::application::use_cases::ImportError;
use crate::domain::errors::ValidationError;

pub const VALIDATION_FAILED_MESSAGE: &str = "Form validation failed";
pub const SAVE_FAILED_MESSAGE: &str = "Server error while saving form data.";

/// API error response
///
/// Renders `{"error": message}`, or `{"message": message, "errors": [...]}`
/// when field errors are attached.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: String,
    field_errors: Option<Vec<ValidationError>>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            field_errors: None,
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn unsupported_media_type(message: impl Into<String>) -> Self {
        Self::new(StatusCode::UNSUPPORTED_MEDIA_TYPE, message)
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    pub fn validation(errors: Vec<ValidationError>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: VALIDATION_FAILED_MESSAGE.to_string(),
            field_errors: Some(errors),
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = match self.field_errors {
            Some(errors) => Json(json!({
                "message": self.message,
                "errors": errors,
            })),
            None => Json(json!({
                "error": self.message,
            })),
        };

        (self.status, body).into_response()
    }
}

// Convert use case errors to API errors

impl From<IntakeError> for ApiError {
    fn from(err: IntakeError) -> Self {
        match err {
            IntakeError::ThreatDetected => ApiError::bad_request(err.to_string()),
            IntakeError::ValidationFailed(errors) => ApiError::validation(errors.into_inner()),
            IntakeError::Persistence(e) => {
                error!(error = %e, "Contact could not be saved");
                ApiError::internal_error(SAVE_FAILED_MESSAGE)
            }
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::MissingColumns(_) | ImportError::Csv(_) => {
                ApiError::bad_request(err.to_string())
            }
            ImportError::Repository(e) => {
                error!(error = %e, "CSV import could not be saved");
                ApiError::internal_error(SAVE_FAILED_MESSAGE)
            }
        }
    }
}
