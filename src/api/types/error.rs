//! API error types
//!
//! Failures cross the HTTP boundary in three shapes: a 400 carrying one
//! message array per invalid field, a bare 404 with an empty body, and a
//! generic 500 that leaks no internal detail.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::domain::{DomainError, FieldErrors};

/// Problem-details style error body
#[derive(Debug, Clone, Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub problem_type: String,
    pub title: String,
    pub status: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

/// API error with status code and optional problem body
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub problem: Option<ProblemDetails>,
}

impl ApiError {
    /// 404 with an empty body
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            problem: None,
        }
    }

    /// 400 carrying the aggregated field validation failures
    pub fn validation(errors: FieldErrors) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            problem: Some(ProblemDetails {
                problem_type: "Validation exception".to_string(),
                title: "One or more validation errors occurred.".to_string(),
                status: StatusCode::BAD_REQUEST.as_u16(),
                detail: None,
                errors: Some(errors),
            }),
        }
    }

    /// Request body could not be read as the expected JSON shape
    pub fn bad_request(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            problem: Some(ProblemDetails {
                problem_type: "Validation exception".to_string(),
                title: "One or more validation errors occurred.".to_string(),
                status: status.as_u16(),
                detail: Some(detail.into()),
                errors: None,
            }),
        }
    }

    /// Generic fault with no internal detail leaked
    pub fn internal() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            problem: Some(ProblemDetails {
                problem_type: "Server error".to_string(),
                title: "Server error".to_string(),
                status: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
                detail: Some("An internal server error has occurred.".to_string()),
                errors: None,
            }),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.problem {
            Some(problem) => (self.status, Json(problem)).into_response(),
            None => self.status.into_response(),
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::NotFound { .. } => Self::not_found(),
            DomainError::Validation { errors } => Self::validation(errors),
            DomainError::Internal { .. } | DomainError::Storage { .. } => {
                error!(%err, "Unhandled domain error");
                Self::internal()
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.problem {
            Some(problem) => write!(f, "{}: {}", self.status, problem.title),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for ApiError {}
