//! Wire-level error shape returned by every failing endpoint.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    RidesNotFoundError,
    ServerError,
}

impl ErrorCode {
    pub fn status(self) -> StatusCode {
        match self {
            ErrorCode::ValidationError => StatusCode::BAD_REQUEST,
            ErrorCode::RidesNotFoundError => StatusCode::NOT_FOUND,
            ErrorCode::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// A stable error code plus one message per detected problem, in detection order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    pub error_code: ErrorCode,
    pub messages: Vec<String>,
}

impl ApiError {
    pub fn validation(violations: Vec<String>) -> Self {
        Self {
            error_code: ErrorCode::ValidationError,
            messages: violations,
        }
    }

    pub fn not_found() -> Self {
        Self {
            error_code: ErrorCode::RidesNotFoundError,
            messages: vec!["Could not find any rides".to_string()],
        }
    }

    /// Generic failure; never carries backend details.
    pub fn server() -> Self {
        Self {
            error_code: ErrorCode::ServerError,
            messages: vec!["Unknown error".to_string()],
        }
    }
}
