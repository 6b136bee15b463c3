//! HTTP error surface.
//!
//! # Invariants
//! - Every error response is JSON shaped as `{"error": "<message>"}`.
//! - Validation and undecodable bodies map to 400, unknown ids to 404, store
//!   faults to 500.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use log::error;
use serde::{Deserialize, Serialize};
use showcase_core::ServiceError;
use std::fmt::{Display, Formatter};

const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body of every error response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound(String),
    /// Details are logged, never returned to the caller.
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl Display for ApiError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadRequest(message) | Self::NotFound(message) => f.write_str(message),
            Self::Internal(_) => f.write_str(INTERNAL_ERROR_MESSAGE),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(err) => Self::BadRequest(err.to_string()),
            err @ ServiceError::NotFound { .. } => Self::NotFound(err.to_string()),
            ServiceError::Store(err) => Self::Internal(err.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(value: JsonRejection) -> Self {
        Self::BadRequest(value.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(details) = &self {
            error!(
                "event=http_error module=api status=error error_code=internal error={}",
                details
            );
        }

        let status = self.status();
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::ApiError;
    use axum::http::StatusCode;
    use showcase_core::{ServiceError, StoreError};

    #[test]
    fn not_found_keeps_entity_message() {
        let err = ApiError::from(ServiceError::NotFound {
            entity: "Portfolio",
            id: "9".to_string(),
        });
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Portfolio not found");
    }

    #[test]
    fn store_failures_hide_details() {
        let err = ApiError::from(ServiceError::Store(StoreError::LockPoisoned("properties")));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "Internal server error");
    }
}
