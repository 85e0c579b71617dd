use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;
use crate::presentation::http::envelope::ApiResponse;

/// The single point where domain error kinds become HTTP statuses. Handlers
/// bubble `DomainError` up with `?`; classification happens here exactly
/// once per request.
pub struct ApiError(DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

pub fn status_for(err: &DomainError) -> StatusCode {
    match err {
        DomainError::RecordNotFound(_) => StatusCode::NOT_FOUND,
        DomainError::Conflict(_) => StatusCode::CONFLICT,
        DomainError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
        DomainError::Forbidden(_) => StatusCode::FORBIDDEN,
        DomainError::BadRequest(_) => StatusCode::BAD_REQUEST,
        DomainError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        let message = match self.0 {
            // Unclassified errors are logged server-side and never leak
            // internals to clients.
            DomainError::Internal(err) => {
                tracing::error!(error = ?err, "unclassified error reached the HTTP boundary");
                "Internal Server Error".to_string()
            }
            other => other.to_string(),
        };
        (status, Json(ApiResponse::error(status.as_u16(), message))).into_response()
    }
}
