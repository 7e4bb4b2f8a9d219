//! Error types for the contract analysis server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tower_governor::GovernorError;

use crate::extract::FileType;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Upload exceeds {0} bytes")]
    FileTooLarge(usize),

    #[error("Unsupported file type")]
    UnsupportedFileType,

    #[error("Text extraction unavailable for {0} files")]
    ExtractionUnavailable(FileType),

    #[error("Text extraction failed: {0}")]
    ExtractionFailed(String),

    #[error("Text too short: {found} characters, need {required}")]
    TextTooShort { found: usize, required: usize },

    #[error("Rate limit exceeded, retry in {0}s")]
    RateLimited(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ServerError::InvalidRequest(msg) => {
                (StatusCode::BAD_REQUEST, "INVALID_REQUEST", msg.clone())
            }
            ServerError::FileTooLarge(max) => (
                StatusCode::PAYLOAD_TOO_LARGE,
                "FILE_TOO_LARGE",
                format!("File too large. Maximum size is {} bytes.", max),
            ),
            ServerError::UnsupportedFileType => (
                StatusCode::BAD_REQUEST,
                "UNSUPPORTED_FILE_TYPE",
                "Unsupported file type. Please upload PDF, DOCX, or TXT.".to_string(),
            ),
            ServerError::ExtractionUnavailable(file_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                "EXTRACTION_UNAVAILABLE",
                format!(
                    "Text extraction for {} files is not available. Please upload the contract as plain text.",
                    file_type
                ),
            ),
            ServerError::ExtractionFailed(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
                msg.clone(),
            ),
            ServerError::TextTooShort { .. } => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "TEXT_TOO_SHORT",
                "Document appears to be empty or too short to analyze".to_string(),
            ),
            ServerError::RateLimited(wait_secs) => (
                StatusCode::TOO_MANY_REQUESTS,
                "RATE_LIMITED",
                format!(
                    "Too many requests. Please try again in {} seconds.",
                    wait_secs
                ),
            ),
            ServerError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An unexpected error occurred during analysis".to_string(),
                )
            }
        };

        let body = ErrorResponse {
            success: false,
            error: message,
            code: code.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<tokio::task::JoinError> for ServerError {
    fn from(err: tokio::task::JoinError) -> Self {
        ServerError::Internal(err.to_string())
    }
}

impl From<GovernorError> for ServerError {
    fn from(err: GovernorError) -> Self {
        match err {
            GovernorError::TooManyRequests { wait_time, .. } => ServerError::RateLimited(wait_time),
            other => ServerError::Internal(other.to_string()),
        }
    }
}
