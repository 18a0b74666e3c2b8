//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use hostel_domain::error::HostelError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
    kind: &'static str,
}

/// Maps [`HostelError`] to an HTTP response with appropriate status code.
pub struct ApiError(HostelError);

impl From<HostelError> for ApiError {
    fn from(err: HostelError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let kind = self.0.kind().as_str();
        let (status, message) = match &self.0 {
            HostelError::Validation(_) | HostelError::Conflict(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            HostelError::NotFound(err) => (StatusCode::NOT_FOUND, err.to_string()),
            HostelError::Storage(err) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (
            status,
            Json(ErrorBody {
                error: message,
                kind,
            }),
        )
            .into_response()
    }
}
