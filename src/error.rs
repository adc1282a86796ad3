//! Boundary error type translating service failures to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

use crate::application::services::{ExpandError, ShortenError};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

#[derive(Serialize)]
struct ErrorInfo {
    code: &'static str,
    message: String,
    details: Value,
}

/// Application-level error mapped onto an HTTP status and JSON body.
///
/// Store conflicts never appear here: the coordinator resolves them before
/// the boundary. Infrastructure failures arrive wrapped in the service
/// errors and are rendered as a generic failure with the diagnostic chain in
/// `details`.
#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message, details) = match self {
            AppError::Validation { message, details } => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                message,
                details,
            ),
            AppError::NotFound { message, details } => {
                (StatusCode::NOT_FOUND, "not_found", message, details)
            }
            AppError::Internal { message, details } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal_error",
                message,
                details,
            ),
        };

        let body = ErrorBody {
            error: ErrorInfo {
                code,
                message,
                details,
            },
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::bad_request("validation failed", json!(errors))
    }
}

impl From<ShortenError> for AppError {
    fn from(err: ShortenError) -> Self {
        tracing::error!(error = %error_chain(&err), "shorten failed");
        AppError::internal("failed getting short URL", json!({}))
    }
}

impl From<ExpandError> for AppError {
    fn from(err: ExpandError) -> Self {
        match &err {
            ExpandError::NotFound(short_ref) => AppError::not_found(
                "original URL does not exist",
                json!({ "shorted_url": short_ref }),
            ),
            ExpandError::Retrieval(_) => {
                tracing::error!(error = %error_chain(&err), "expand failed");
                AppError::internal("failed to get original URL", json!({}))
            }
        }
    }
}

/// Renders an error and its source chain for logging.
fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str(": ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
