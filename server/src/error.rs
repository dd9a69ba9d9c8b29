//! Mapping of service errors onto HTTP responses.

use axum::{
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use licensor_service::{ErrorKind, ServiceError};
use tokio::task::JoinError;
use tracing::error;

use crate::ActionResponse;

/// Error returned by admin handlers.
#[derive(Debug)]
pub enum ApiError {
    /// The request body could not be read as the expected JSON.
    BadBody(JsonRejection),
    /// The path did not name a license id.
    BadPath(PathRejection),
    /// The blocking task running the operation did not complete.
    Task(JoinError),
    /// The service rejected or failed the operation.
    Service(ServiceError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadBody(rejection)
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::BadPath(rejection)
    }
}

impl From<JoinError> for ApiError {
    fn from(err: JoinError) -> Self {
        Self::Task(err)
    }
}

impl From<ServiceError> for ApiError {
    fn from(err: ServiceError) -> Self {
        Self::Service(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::BadBody(rejection) => (StatusCode::BAD_REQUEST, rejection.body_text()),
            // A non-numeric id can never name a license.
            Self::BadPath(_) => (StatusCode::NOT_FOUND, "license not found".to_string()),
            Self::Task(err) => {
                error!("Request task failed: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    format!("server error: {err}"),
                )
            }
            Self::Service(err) => match err.kind() {
                // Duplicate keys are reported as a bad request, like missing fields.
                ErrorKind::Input | ErrorKind::Conflict => (StatusCode::BAD_REQUEST, err.to_string()),
                ErrorKind::NotFound => (StatusCode::NOT_FOUND, err.to_string()),
                ErrorKind::Server => {
                    error!("Request failed: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        format!("server error: {err}"),
                    )
                }
            },
        };
        (status, Json(ActionResponse::failed(message))).into_response()
    }
}
