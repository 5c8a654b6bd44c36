use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::auth::AuthError;
use crate::services::ServiceError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error("Invalid query parameter: {0}")]
    InvalidQuery(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let service_error = match self {
            ApiError::Auth(err) => return err.into_response(),
            ApiError::InvalidQuery(message) => {
                return error_body(StatusCode::BAD_REQUEST, "Invalid query parameter", &message, None)
            }
            ApiError::Service(err) => err,
        };

        match service_error {
            ServiceError::Validation(errors) => {
                let details = serde_json::to_value(&errors).ok();
                error_body(StatusCode::BAD_REQUEST, "Validation failed", &errors.to_string(), details)
            }
            ServiceError::InvalidReference(message) => {
                error_body(StatusCode::BAD_REQUEST, "Invalid reference", &message, None)
            }
            ServiceError::InvalidArgument(message) => {
                error_body(StatusCode::BAD_REQUEST, "Invalid argument", &message, None)
            }
            ServiceError::NotFound(what) => {
                error_body(StatusCode::NOT_FOUND, "Not found", &format!("{} not found", what), None)
            }
            ServiceError::Store(err) => {
                tracing::error!(error = %err, "Store operation failed");
                error_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error",
                    "The request could not be completed",
                    None,
                )
            }
        }
    }
}

fn error_body(
    status: StatusCode,
    error: &str,
    message: &str,
    details: Option<serde_json::Value>,
) -> Response {
    let mut body = json!({
        "error": error,
        "message": message,
    });
    if let Some(details) = details {
        body["details"] = details;
    }

    (status, Json(body)).into_response()
}
