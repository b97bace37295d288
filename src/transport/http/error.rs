use crate::domain::ApiError;
use crate::storage::StoreError;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::error;

/// Everything a ride handler can fail with.
#[derive(Debug, thiserror::Error)]
pub enum RideApiError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
    #[error("ride not found")]
    NotFound,
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("ride {0} vanished right after insert")]
    MissingAfterInsert(i64),
}

impl RideApiError {
    pub fn to_api_error(&self) -> ApiError {
        match self {
            RideApiError::Validation(violations) => ApiError::validation(violations.clone()),
            RideApiError::NotFound => ApiError::not_found(),
            RideApiError::Store(_) | RideApiError::MissingAfterInsert(_) => ApiError::server(),
        }
    }
}

impl IntoResponse for RideApiError {
    fn into_response(self) -> Response {
        if matches!(
            self,
            RideApiError::Store(_) | RideApiError::MissingAfterInsert(_)
        ) {
            error!(error = %self, "request failed");
        }
        let body = self.to_api_error();
        (body.error_code.status(), Json(body)).into_response()
    }
}
