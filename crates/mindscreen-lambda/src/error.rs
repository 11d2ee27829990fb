use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use mindscreen_engine::validation::AnswerValidationError;
use mindscreen_engine::InferenceError;
use mindscreen_rules::error::RuleStoreError;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    /// One entry per rejected answer.
    InvalidAnswers(Vec<AnswerValidationError>),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    details: Vec<AnswerValidationError>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg, Vec::new()),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg, Vec::new()),
            ApiError::Conflict(msg) => (StatusCode::CONFLICT, msg, Vec::new()),
            ApiError::InvalidAnswers(details) => (
                StatusCode::BAD_REQUEST,
                "answers must be between 0 and 1".to_string(),
                details,
            ),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                    Vec::new(),
                )
            }
        };

        (status, Json(ErrorBody { error, details })).into_response()
    }
}

impl From<InferenceError> for ApiError {
    fn from(e: InferenceError) -> Self {
        match e {
            InferenceError::NoSymptomsDetected => ApiError::BadRequest(e.to_string()),
            InferenceError::InvalidRuleBase(_) => {
                tracing::warn!("rejected screening: {e}");
                ApiError::BadRequest(e.to_string())
            }
        }
    }
}

impl From<RuleStoreError> for ApiError {
    fn from(e: RuleStoreError) -> Self {
        match e {
            RuleStoreError::SymptomNotFound(_) | RuleStoreError::RuleNotFound(_) => {
                ApiError::NotFound(e.to_string())
            }
            RuleStoreError::Core(_) | RuleStoreError::DuplicateRule { .. } => {
                ApiError::BadRequest(e.to_string())
            }
            RuleStoreError::DuplicateSymptom(_) => ApiError::Conflict(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}
