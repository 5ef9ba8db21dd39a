use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::ServiceError;
use thiserror::Error;
use tracing::{error, warn};

/// Handler error: a service failure rendered as `{ "message": ... }`.
///
/// Storage faults are not reported to the client; they are logged and the
/// request ends with an empty 500.
#[derive(Debug)]
pub struct ApiError(pub ServiceError);

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Conflict(_) => StatusCode::CONFLICT,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(cause) => {
                error!(error = %cause, "collection storage failure");
                return StatusCode::INTERNAL_SERVER_ERROR.into_response();
            }
        };
        warn!(status = status.as_u16(), message = self.0.message(), "request rejected");
        (status, Json(serde_json::json!({"message": self.0.message()}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("storage preparation failed: {0}")]
    Storage(String),
}
